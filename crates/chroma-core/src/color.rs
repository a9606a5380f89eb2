//! Chromaticity and tristimulus value types.
//!
//! These carry CIE 1931 coordinates with no validation: wide-gamut and
//! ACES spaces legitimately use chromaticities outside [0, 1] (the AP0
//! blue primary sits at y = -0.077), and scene-referred XYZ values are
//! unbounded for HDR content.

use chroma_math::Vec3;

/// A coordinate on the CIE 1931 xy chromaticity diagram.
///
/// May be negative or exceed 1 for imaginary primaries; no range checks
/// are performed.
///
/// # Example
///
/// ```rust
/// use chroma_core::Chromaticity;
///
/// const D65: Chromaticity = Chromaticity::new(0.3127, 0.3290);
/// const AP0_BLUE: Chromaticity = Chromaticity::new(0.0001, -0.0770);
/// assert!(AP0_BLUE.y < 0.0);
/// # let _ = D65;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Chromaticity {
    /// x coordinate
    pub x: f32,
    /// y coordinate
    pub y: f32,
}

impl Chromaticity {
    /// Creates a new chromaticity coordinate.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Extends to CIE xyz with the third coordinate 1 - x - y.
    #[inline]
    pub fn to_xyz_coords(self) -> Vec3 {
        Vec3::new(self.x, self.y, 1.0 - self.x - self.y)
    }

    /// Per-axis absolute closeness test.
    #[inline]
    pub fn approx_eq(self, other: Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }
}

/// A CIE 1931 tristimulus value (linear light).
///
/// Components are unrestricted; scene-referred HDR values routinely exceed
/// 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    /// X component
    pub x: f32,
    /// Y component (luminance)
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Xyz {
    /// Zero tristimulus value.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a new tristimulus value.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Component sum, the denominator of the chromaticity projection.
    #[inline]
    pub fn sum(self) -> f32 {
        self.x + self.y + self.z
    }
}

impl From<Vec3> for Xyz {
    #[inline]
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Xyz> for Vec3 {
    #[inline]
    fn from(xyz: Xyz) -> Self {
        Self::new(xyz.x, xyz.y, xyz.z)
    }
}

/// Luminance plus chromaticity.
///
/// `luminance` is unrestricted; `(x, y)` follow the same conventions as
/// [`Chromaticity`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Yxy {
    /// Luminance (the CIE Y component)
    pub luminance: f32,
    /// x chromaticity coordinate
    pub x: f32,
    /// y chromaticity coordinate
    pub y: f32,
}

impl Yxy {
    /// Creates a new luminance-chromaticity value.
    #[inline]
    pub const fn new(luminance: f32, x: f32, y: f32) -> Self {
        Self { luminance, x, y }
    }

    /// The chromaticity part.
    #[inline]
    pub const fn chromaticity(self) -> Chromaticity {
        Chromaticity::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_chromaticity_extension() {
        let c = Chromaticity::new(0.64, 0.33);
        let v = c.to_xyz_coords();
        assert_abs_diff_eq!(v.z, 0.03, epsilon = 1e-6);
        assert_abs_diff_eq!(v.sum(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_chromaticity_approx_eq() {
        let a = Chromaticity::new(0.3127, 0.3290);
        let b = Chromaticity::new(0.31275, 0.32895);
        assert!(a.approx_eq(b, 1e-4));
        assert!(!a.approx_eq(b, 1e-6));
    }

    #[test]
    fn test_imaginary_primary_allowed() {
        // AP0 blue: negative y is valid input, not an error
        let ap0_blue = Chromaticity::new(0.0001, -0.0770);
        let v = ap0_blue.to_xyz_coords();
        assert!(v.z > 1.0);
    }

    #[test]
    fn test_yxy_accessors() {
        let y = Yxy::new(1.0, 0.3127, 0.3290);
        assert_eq!(y.chromaticity(), Chromaticity::new(0.3127, 0.3290));
    }
}
