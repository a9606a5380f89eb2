//! Space-free RGB value types.
//!
//! An [`Rgb`] has no intrinsic color space identity: the same triplet can
//! be sRGB-encoded display values or ACEScg scene-linear light. Whoever
//! holds the value tracks which space it is expressed in and hands both to
//! the transform engine.

use chroma_math::Vec3;

/// An RGB triplet with no intrinsic color space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Rgb {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
}

impl Rgb {
    /// Black (0, 0, 0).
    pub const BLACK: Self = Self::splat(0.0);

    /// White (1, 1, 1).
    pub const WHITE: Self = Self::splat(1.0);

    /// Creates a new RGB value.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates an RGB value with all channels equal.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Applies a function to each channel.
    ///
    /// The transform engine uses this to run transfer functions over a
    /// whole triplet.
    #[inline]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }
}

impl From<Vec3> for Rgb {
    #[inline]
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Rgb> for Vec3 {
    #[inline]
    fn from(rgb: Rgb) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b)
    }
}

/// An RGB triplet plus alpha.
///
/// Alpha is coverage, not color: space-to-space transforms leave it
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Alpha channel
    pub a: f32,
}

impl Rgba {
    /// Creates a new RGBA value.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates from an RGB value and an alpha.
    #[inline]
    pub const fn from_rgb(rgb: Rgb, a: f32) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b, a)
    }

    /// The color part.
    #[inline]
    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Replaces the color part, keeping alpha.
    #[inline]
    pub const fn with_rgb(self, rgb: Rgb) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b, self.a)
    }
}
