//! Color space derivation.
//!
//! A [`ColorSpace`] is built once from a descriptor and is immutable
//! afterwards. Construction resolves everything the transform engine needs:
//! the RGB-to-XYZ matrix (and its cached inverse) and the transfer-function
//! coefficients `k0` and `phi`.
//!
//! # Matrix derivation
//!
//! For the primaries form, the RGB-to-XYZ matrix follows SMPTE RP 177-1993:
//! bind the red/green/blue chromaticities (extended with z = 1 - x - y) as
//! the columns of a matrix P, compute the white point's XYZ with luminance
//! normalized to Y = 1, solve C = P⁻¹·W, and scale the columns of P by C so
//! that RGB (1, 1, 1) maps exactly to the white point.
//!
//! # Transfer function
//!
//! A toe-linear segment joined to a power curve, generalizing the
//! sRGB/Rec.709 family of encodings:
//!
//! ```text
//! to_linear(t)   = t / phi                      if t < k0
//!                = ((t + a) / (1 + a))^gamma    otherwise
//! from_linear(t) = t * phi                      if t < k0 / phi
//!                = (1 + a) * t^(1/gamma) - a    otherwise
//! ```
//!
//! `k0` and `phi` are solved at construction so the curve is continuous at
//! the breakpoint. gamma = 1 degenerates to the identity (`k0` infinite);
//! a linear bias <= 0 degenerates to a pure power law (`k0` = 0, `phi` = 1).

use chroma_core::{Chromaticity, Error, Result};
use chroma_math::{Mat3, Vec3};

use crate::descriptor::{ColorSpaceDescriptor, MatrixDescriptor};

/// A resolved color space: cached matrices plus transfer coefficients.
///
/// Built from exactly one descriptor via [`ColorSpace::from_primaries`] or
/// [`ColorSpace::from_matrix`]; immutable after construction.
///
/// # Equality
///
/// Equality is deliberately **weak**: two spaces compare equal when their
/// (name, gamma, linear_bias) triples match, without inspecting matrices.
/// Two spaces with different matrices but the same name and curve are
/// therefore equal. This mirrors how spaces are identified by name
/// throughout the engine; it is not a deep value comparison.
///
/// # Example
///
/// ```rust
/// use chroma_space::Registry;
///
/// let registry = Registry::new().unwrap();
/// let srgb = registry.lookup("sRGB").unwrap();
/// let linear = srgb.to_linear(0.5);
/// assert!((linear - 0.214).abs() < 1e-3);
/// ```
#[derive(Debug, Clone)]
pub struct ColorSpace {
    name: String,
    red: Chromaticity,
    green: Chromaticity,
    blue: Chromaticity,
    white: Chromaticity,
    gamma: f32,
    linear_bias: f32,
    k0: f32,
    phi: f32,
    rgb_to_xyz: Mat3,
    xyz_to_rgb: Mat3,
}

/// Solves the transfer-function breakpoint and linear slope from
/// (linear_bias, gamma) so the curve is continuous at k0.
fn solve_transfer(gamma: f32, a: f32) -> (f32, f32) {
    if gamma == 1.0 {
        // Pure linear: the power segment is unreachable.
        (f32::INFINITY, 1.0)
    } else if a <= 0.0 {
        // Pure power law, no toe.
        (0.0, 1.0)
    } else {
        let k0 = a / (gamma - 1.0);
        let phi = (a / ((gamma * a / (gamma + gamma * a - 1.0 - a)).ln() * gamma).exp())
            / (gamma - 1.0);
        (k0, phi)
    }
}

/// Projects an XYZ point to its chromaticity.
fn chromaticity_of(v: Vec3) -> Chromaticity {
    let sum = v.sum();
    if sum == 0.0 {
        Chromaticity::default()
    } else {
        Chromaticity::new(v.x / sum, v.y / sum)
    }
}

impl ColorSpace {
    /// Builds a color space from primaries and white point.
    ///
    /// # Errors
    ///
    /// [`Error::SingularMatrix`] when the primaries are degenerate (e.g.
    /// collinear chromaticities) and the primaries matrix cannot be
    /// inverted.
    pub fn from_primaries(desc: &ColorSpaceDescriptor) -> Result<Self> {
        let (k0, phi) = solve_transfer(desc.gamma, desc.linear_bias);

        // P: primaries as columns, extended to xyz
        let p = Mat3::from_col_vecs(
            desc.red.to_xyz_coords(),
            desc.green.to_xyz_coords(),
            desc.blue.to_xyz_coords(),
        );

        // White point XYZ with luminance normalized to Y = 1
        let w = desc.white.to_xyz_coords();
        let w = w / w.y;

        // Per-primary scale so (1, 1, 1) maps to the white point
        let p_inv = p.inverse().ok_or_else(|| Error::singular(p.determinant()))?;
        let c = p_inv * w;
        let rgb_to_xyz = p.scale_cols(c);

        let xyz_to_rgb = rgb_to_xyz
            .inverse()
            .ok_or_else(|| Error::singular(rgb_to_xyz.determinant()))?;

        Ok(Self {
            name: desc.name.clone(),
            red: desc.red,
            green: desc.green,
            blue: desc.blue,
            white: desc.white,
            gamma: desc.gamma,
            linear_bias: desc.linear_bias,
            k0,
            phi,
            rgb_to_xyz,
            xyz_to_rgb,
        })
    }

    /// Builds a color space from an explicit RGB-to-XYZ matrix.
    ///
    /// The primaries derivation is skipped; the effective chromaticities
    /// are recovered by pushing unit R/G/B and white through the matrix,
    /// so matrix-defined spaces still participate in primaries matching
    /// and descriptor readback.
    ///
    /// # Errors
    ///
    /// [`Error::SingularMatrix`] when the supplied matrix cannot be
    /// inverted.
    pub fn from_matrix(desc: &MatrixDescriptor) -> Result<Self> {
        let (k0, phi) = solve_transfer(desc.gamma, desc.linear_bias);

        let rgb_to_xyz = desc.rgb_to_xyz;
        let xyz_to_rgb = rgb_to_xyz
            .inverse()
            .ok_or_else(|| Error::singular(rgb_to_xyz.determinant()))?;

        Ok(Self {
            name: desc.name.clone(),
            red: chromaticity_of(rgb_to_xyz * Vec3::new(1.0, 0.0, 0.0)),
            green: chromaticity_of(rgb_to_xyz * Vec3::new(0.0, 1.0, 0.0)),
            blue: chromaticity_of(rgb_to_xyz * Vec3::new(0.0, 0.0, 1.0)),
            white: chromaticity_of(rgb_to_xyz * Vec3::ONE),
            gamma: desc.gamma,
            linear_bias: desc.linear_bias,
            k0,
            phi,
            rgb_to_xyz,
            xyz_to_rgb,
        })
    }

    /// Decodes an encoded value to linear light.
    #[inline]
    pub fn to_linear(&self, t: f32) -> f32 {
        if t < self.k0 {
            t / self.phi
        } else {
            let a = self.linear_bias;
            ((t + a) / (1.0 + a)).powf(self.gamma)
        }
    }

    /// Encodes a linear-light value.
    #[inline]
    pub fn from_linear(&self, t: f32) -> f32 {
        if t < self.k0 / self.phi {
            t * self.phi
        } else {
            let a = self.linear_bias;
            (1.0 + a) * t.powf(1.0 / self.gamma) - a
        }
    }

    /// The cached RGB-to-XYZ matrix.
    #[inline]
    pub fn rgb_to_xyz(&self) -> Mat3 {
        self.rgb_to_xyz
    }

    /// The cached XYZ-to-RGB matrix (inverse of [`Self::rgb_to_xyz`]).
    #[inline]
    pub fn xyz_to_rgb(&self) -> Mat3 {
        self.xyz_to_rgb
    }

    /// The linear RGB-to-RGB matrix from this space to `dst`.
    ///
    /// Equals `dst.xyz_to_rgb() * self.rgb_to_xyz()`; transfer functions
    /// are not included.
    #[inline]
    pub fn rgb_to_rgb(&self, dst: &ColorSpace) -> Mat3 {
        dst.xyz_to_rgb.mul_mat(&self.rgb_to_xyz)
    }

    /// Color space name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Transfer curve exponent.
    #[inline]
    pub fn gamma(&self) -> f32 {
        self.gamma
    }

    /// Transfer curve linear-segment bias.
    #[inline]
    pub fn linear_bias(&self) -> f32 {
        self.linear_bias
    }

    /// Transfer-function breakpoint (encoded-domain) and linear slope.
    #[inline]
    pub fn k0_phi(&self) -> (f32, f32) {
        (self.k0, self.phi)
    }

    /// Red primary chromaticity.
    #[inline]
    pub fn red(&self) -> Chromaticity {
        self.red
    }

    /// Green primary chromaticity.
    #[inline]
    pub fn green(&self) -> Chromaticity {
        self.green
    }

    /// Blue primary chromaticity.
    #[inline]
    pub fn blue(&self) -> Chromaticity {
        self.blue
    }

    /// White point chromaticity.
    #[inline]
    pub fn white(&self) -> Chromaticity {
        self.white
    }

    /// Reads the space back as a primaries-form descriptor.
    pub fn descriptor(&self) -> ColorSpaceDescriptor {
        ColorSpaceDescriptor {
            name: self.name.clone(),
            red: self.red,
            green: self.green,
            blue: self.blue,
            white: self.white,
            gamma: self.gamma,
            linear_bias: self.linear_bias,
        }
    }

    /// A human-readable description of the built-in spaces.
    ///
    /// Falls back to the space's name for custom spaces.
    pub fn description(&self) -> &str {
        match self.name.as_str() {
            "acescg" => "Academy Color Encoding System (ACEScg), a color space designed for computer graphics.",
            "adobergb" => "Adobe RGB (1998), a color space developed by Adobe Systems.",
            "g18_ap1" => "Gamma 1.8, primaries from ACES, white point from ACES.",
            "g18_rec709" => "Gamma 1.8, primaries from Rec. 709, white point from D65.",
            "g22_ap1" => "Gamma 2.2, primaries from ACES, white point from ACES.",
            "g22_rec709" => "Gamma 2.2, primaries from Rec. 709, white point from D65.",
            "identity" => "Identity color space, no conversion.",
            "lin_adobergb" => "Linear Adobe RGB (1998), a color space developed by Adobe Systems.",
            "lin_ap0" => "Linear transfer, AP0 primaries, white point from ACES.",
            "lin_ap1" => "Linear transfer, AP1 primaries, white point from ACES.",
            "lin_displayp3" => "Linear Display P3, a color space using the Display P3 primaries.",
            "lin_rec709" => "Linear Rec. 709, a color space using the Rec. 709 primaries.",
            "lin_rec2020" => "Linear Rec. 2020, a color space using the Rec. 2020 primaries.",
            "lin_srgb" => "Linear sRGB, a color space using the sRGB primaries.",
            "raw" => "Raw color space, no conversion.",
            "srgb_displayp3" => "sRGB Display P3, a color space using the Display P3 primaries.",
            "sRGB" => "sRGB, a display color space developed by HP and Microsoft.",
            "srgb_texture" => "sRGB Texture, a color space using the sRGB primaries.",
            other => other,
        }
    }
}

impl PartialEq for ColorSpace {
    /// Weak equality over (name, gamma, linear_bias); see the type docs.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.gamma == other.gamma
            && self.linear_bias == other.linear_bias
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn srgb_descriptor() -> ColorSpaceDescriptor {
        ColorSpaceDescriptor {
            name: "sRGB".to_string(),
            red: Chromaticity::new(0.640, 0.330),
            green: Chromaticity::new(0.300, 0.600),
            blue: Chromaticity::new(0.150, 0.060),
            white: Chromaticity::new(0.3127, 0.3290),
            gamma: 2.4,
            linear_bias: 0.055,
        }
    }

    #[test]
    fn test_srgb_matrix_matches_reference() {
        let cs = ColorSpace::from_primaries(&srgb_descriptor()).unwrap();
        let m = cs.rgb_to_xyz();
        // IEC 61966-2-1 reference values
        assert!((m[0][0] - 0.4124564).abs() < 1e-3);
        assert!((m[1][0] - 0.2126729).abs() < 1e-3);
        assert!((m[2][2] - 0.9503041).abs() < 1e-3);
    }

    #[test]
    fn test_white_maps_to_unit_luminance() {
        let cs = ColorSpace::from_primaries(&srgb_descriptor()).unwrap();
        let white = cs.rgb_to_xyz() * Vec3::ONE;
        assert!((white.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_srgb_transfer_coefficients() {
        let cs = ColorSpace::from_primaries(&srgb_descriptor()).unwrap();
        let (k0, phi) = cs.k0_phi();
        // a/(gamma-1) and the closed-form slope; ~0.0393 and ~12.92
        assert!((k0 - 0.0392857).abs() < 1e-5);
        assert!((phi - 12.92).abs() < 0.01);
    }

    #[test]
    fn test_transfer_continuity_at_breakpoint() {
        let cs = ColorSpace::from_primaries(&srgb_descriptor()).unwrap();
        let (k0, phi) = cs.k0_phi();
        let below = cs.to_linear(k0 - 1e-6);
        let above = cs.to_linear(k0 + 1e-6);
        assert!((below - above).abs() < 1e-4);
        assert!((cs.to_linear(k0) - k0 / phi).abs() < 1e-5);
    }

    #[test]
    fn test_linear_space_identity_curve() {
        let mut desc = srgb_descriptor();
        desc.gamma = 1.0;
        desc.linear_bias = 0.0;
        let cs = ColorSpace::from_primaries(&desc).unwrap();
        let (k0, phi) = cs.k0_phi();
        assert!(k0.is_infinite());
        assert_eq!(phi, 1.0);
        assert_eq!(cs.to_linear(0.73), 0.73);
        assert_eq!(cs.from_linear(-0.5), -0.5);
    }

    #[test]
    fn test_pure_power_law_when_no_bias() {
        let mut desc = srgb_descriptor();
        desc.gamma = 2.2;
        desc.linear_bias = 0.0;
        let cs = ColorSpace::from_primaries(&desc).unwrap();
        let (k0, phi) = cs.k0_phi();
        assert_eq!(k0, 0.0);
        assert_eq!(phi, 1.0);
        assert!((cs.to_linear(0.5) - 0.5f32.powf(2.2)).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_primaries_fail() {
        let mut desc = srgb_descriptor();
        // all three primaries collapsed onto one point
        desc.green = desc.red;
        desc.blue = desc.red;
        let err = ColorSpace::from_primaries(&desc).unwrap_err();
        assert!(err.is_singular());
    }

    #[test]
    fn test_from_matrix_recovers_chromaticities() {
        let primaries = ColorSpace::from_primaries(&srgb_descriptor()).unwrap();
        let matrix = ColorSpace::from_matrix(&MatrixDescriptor {
            name: "srgb_m33".to_string(),
            rgb_to_xyz: primaries.rgb_to_xyz(),
            gamma: 2.4,
            linear_bias: 0.055,
        })
        .unwrap();
        assert!(matrix.red().approx_eq(primaries.red(), 1e-4));
        assert!(matrix.green().approx_eq(primaries.green(), 1e-4));
        assert!(matrix.blue().approx_eq(primaries.blue(), 1e-4));
        assert!(matrix.white().approx_eq(primaries.white(), 1e-4));
    }

    #[test]
    fn test_from_matrix_singular_fails() {
        let err = ColorSpace::from_matrix(&MatrixDescriptor {
            name: "broken".to_string(),
            rgb_to_xyz: Mat3::ZERO,
            gamma: 1.0,
            linear_bias: 0.0,
        })
        .unwrap_err();
        assert!(err.is_singular());
    }

    #[test]
    fn test_weak_equality() {
        let a = ColorSpace::from_primaries(&srgb_descriptor()).unwrap();
        // same name and curve, different primaries: still equal
        let mut desc = srgb_descriptor();
        desc.red = Chromaticity::new(0.7, 0.3);
        let b = ColorSpace::from_primaries(&desc).unwrap();
        assert_eq!(a, b);

        let mut desc = srgb_descriptor();
        desc.gamma = 2.2;
        let c = ColorSpace::from_primaries(&desc).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_description_fallback() {
        let mut desc = srgb_descriptor();
        desc.name = "studio_internal".to_string();
        let cs = ColorSpace::from_primaries(&desc).unwrap();
        assert_eq!(cs.description(), "studio_internal");
    }
}
