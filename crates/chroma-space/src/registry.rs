//! Name-to-color-space registry.
//!
//! [`Registry`] is an explicit context object rather than process-wide
//! state: build one at startup, pass it (or the [`crate::ColorSpace`]
//! handles looked up from it) to whatever needs conversions. It is plain
//! immutable data after construction, so sharing it across threads needs
//! no synchronization, and tests can build a fresh one each without any
//! cross-test leakage.
//!
//! Lookups report absence as `None`; [`Registry::require`] escalates a
//! miss to [`chroma_core::Error::UnknownColorSpace`] for callers that
//! treat a missing name as fatal.

use chroma_core::{Chromaticity, Error, Result};

use crate::builtin::BUILTIN_TABLE;
use crate::descriptor::ColorSpaceDescriptor;
use crate::space::ColorSpace;

/// The name-to-space table, populated from the built-in declaration table.
///
/// # Example
///
/// ```rust
/// use chroma_space::Registry;
///
/// let registry = Registry::new().unwrap();
/// assert!(registry.lookup("acescg").is_some());
/// assert!(registry.lookup("not_a_space").is_none());
/// assert_eq!(registry.len(), 18);
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    spaces: Vec<ColorSpace>,
}

impl Registry {
    /// Builds a registry holding all built-in color spaces.
    ///
    /// Every call produces an equivalent fresh value, so repeated
    /// initialization is harmless.
    ///
    /// # Errors
    ///
    /// [`Error::SingularMatrix`] if a table entry's primaries were
    /// degenerate; the built-in table never triggers this.
    pub fn new() -> Result<Self> {
        let mut spaces = Vec::with_capacity(BUILTIN_TABLE.len());
        for entry in &BUILTIN_TABLE {
            let desc = ColorSpaceDescriptor {
                name: entry.name.to_string(),
                red: entry.red,
                green: entry.green,
                blue: entry.blue,
                white: entry.white,
                gamma: entry.gamma,
                linear_bias: entry.linear_bias,
            };
            spaces.push(ColorSpace::from_primaries(&desc)?);
        }
        Ok(Self { spaces })
    }

    /// Looks a color space up by name.
    ///
    /// Unknown names are an ordinary absence, never an error.
    pub fn lookup(&self, name: &str) -> Option<&ColorSpace> {
        self.spaces.iter().find(|cs| cs.name() == name)
    }

    /// Looks a color space up by name, treating a miss as an error.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownColorSpace`] when the name is not registered.
    pub fn require(&self, name: &str) -> Result<&ColorSpace> {
        self.lookup(name)
            .ok_or_else(|| Error::unknown_color_space(name))
    }

    /// Registered names, in declaration-table order.
    pub fn names(&self) -> Vec<&str> {
        self.spaces.iter().map(ColorSpace::name).collect()
    }

    /// Iterates the registered spaces in declaration-table order.
    pub fn iter(&self) -> impl Iterator<Item = &ColorSpace> {
        self.spaces.iter()
    }

    /// Number of registered spaces.
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Finds a registered **linear** space whose primaries and white point
    /// all sit within `epsilon` (per-axis absolute difference) of the
    /// supplied chromaticities.
    ///
    /// Exists so externally described gamuts (e.g. OpenEXR chromaticity
    /// headers) can be matched to a catalogued space instead of setting up
    /// a one-off transform. Only entries with gamma == 1.0 are considered.
    ///
    /// Several catalogued linear spaces share identical primaries (the
    /// Rec. 709 family); the scan returns the **first** hit in
    /// declaration-table order, which is implementation-defined and not a
    /// semantic priority among the equivalents.
    pub fn match_linear_space(
        &self,
        red: Chromaticity,
        green: Chromaticity,
        blue: Chromaticity,
        white: Chromaticity,
        epsilon: f32,
    ) -> Option<&str> {
        self.spaces
            .iter()
            .filter(|cs| cs.gamma() == 1.0)
            .find(|cs| {
                cs.red().approx_eq(red, epsilon)
                    && cs.green().approx_eq(green, epsilon)
                    && cs.blue().approx_eq(blue, epsilon)
                    && cs.white().approx_eq(white, epsilon)
            })
            .map(ColorSpace::name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::names;

    #[test]
    fn test_all_builtins_resolve() {
        let registry = Registry::new().unwrap();
        assert_eq!(registry.len(), 18);
        for name in registry.names() {
            assert!(registry.lookup(name).is_some());
        }
    }

    #[test]
    fn test_reinit_is_equivalent() {
        let a = Registry::new().unwrap();
        let b = Registry::new().unwrap();
        assert_eq!(a.names(), b.names());
        // weak equality: same name/gamma/bias per entry
        for name in a.names() {
            assert_eq!(a.lookup(name), b.lookup(name));
        }
    }

    #[test]
    fn test_unknown_name_is_absent() {
        let registry = Registry::new().unwrap();
        assert!(registry.lookup("rec_2100_pq").is_none());
    }

    #[test]
    fn test_require_escalates_miss() {
        let registry = Registry::new().unwrap();
        let err = registry.require("rec_2100_pq").unwrap_err();
        assert_eq!(err, Error::unknown_color_space("rec_2100_pq"));
        assert!(registry.require(names::ACESCG).is_ok());
    }

    #[test]
    fn test_identity_space_has_identity_matrix() {
        let registry = Registry::new().unwrap();
        let identity = registry.lookup(names::IDENTITY).unwrap();
        let m = identity.rgb_to_xyz();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((m[i][j] - expected).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_match_linear_space_rec709_family() {
        let registry = Registry::new().unwrap();
        let lin_srgb = registry.lookup(names::LIN_SRGB).unwrap().clone();
        let matched = registry
            .match_linear_space(
                lin_srgb.red(),
                lin_srgb.green(),
                lin_srgb.blue(),
                lin_srgb.white(),
                1e-4,
            )
            .unwrap();
        // several linear spaces share Rec. 709 primaries; any of them is a
        // correct answer, the specific one is declaration-order dependent
        assert!(matched == names::LIN_REC709 || matched == names::LIN_SRGB);
    }

    #[test]
    fn test_match_skips_nonlinear_spaces() {
        let registry = Registry::new().unwrap();
        let srgb = registry.lookup(names::SRGB).unwrap();
        let matched = registry.match_linear_space(
            srgb.red(),
            srgb.green(),
            srgb.blue(),
            srgb.white(),
            1e-4,
        );
        // Rec.709 primaries match linear entries, never the gamma ones
        assert!(matched.is_some());
        assert_ne!(matched.unwrap(), names::SRGB);
    }

    #[test]
    fn test_match_linear_space_no_match() {
        let registry = Registry::new().unwrap();
        let off_gamut = Chromaticity::new(0.9, 0.1);
        assert!(registry
            .match_linear_space(off_gamut, off_gamut, off_gamut, off_gamut, 1e-4)
            .is_none());
    }
}
