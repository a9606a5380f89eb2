//! Color space descriptors.
//!
//! A descriptor is the immutable definition a [`crate::ColorSpace`] is
//! built from. Two forms exist and are kept as two distinct types rather
//! than one struct with a sentinel field, so a space defined by an explicit
//! matrix can never collide with one whose chromaticities legitimately sit
//! at zero:
//!
//! - [`ColorSpaceDescriptor`] - primaries + white point + transfer curve
//! - [`MatrixDescriptor`] - explicit RGB-to-XYZ matrix + transfer curve

use chroma_core::Chromaticity;
use chroma_math::Mat3;

/// Defines a color space by its primaries and white point.
///
/// The transfer curve is a toe-linear + power function parameterized by
/// `gamma` and `linear_bias`; see [`crate::ColorSpace::to_linear`].
///
/// # Example
///
/// ```rust
/// use chroma_core::Chromaticity;
/// use chroma_space::ColorSpaceDescriptor;
///
/// let desc = ColorSpaceDescriptor {
///     name: "my_srgb".to_string(),
///     red: Chromaticity::new(0.640, 0.330),
///     green: Chromaticity::new(0.300, 0.600),
///     blue: Chromaticity::new(0.150, 0.060),
///     white: Chromaticity::new(0.3127, 0.3290),
///     gamma: 2.4,
///     linear_bias: 0.055,
/// };
/// # let _ = desc;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSpaceDescriptor {
    /// Color space name
    pub name: String,
    /// Red primary chromaticity
    pub red: Chromaticity,
    /// Green primary chromaticity
    pub green: Chromaticity,
    /// Blue primary chromaticity
    pub blue: Chromaticity,
    /// White point chromaticity
    pub white: Chromaticity,
    /// Transfer curve exponent
    pub gamma: f32,
    /// Transfer curve linear-segment bias (the sRGB `a` constant)
    pub linear_bias: f32,
}

/// Defines a color space by an explicit RGB-to-XYZ matrix.
///
/// Used when primaries are unknown or the matrix comes from external
/// metadata. The effective chromaticities are recovered at construction by
/// pushing unit R/G/B and white through the matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixDescriptor {
    /// Color space name
    pub name: String,
    /// RGB-to-XYZ conversion matrix (row-major, column-vector convention)
    pub rgb_to_xyz: Mat3,
    /// Transfer curve exponent
    pub gamma: f32,
    /// Transfer curve linear-segment bias
    pub linear_bias: f32,
}
