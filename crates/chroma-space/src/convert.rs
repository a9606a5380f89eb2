//! Stateless conversion functions.
//!
//! Every function here is a pure mapping from inputs to outputs: no caches,
//! no shared state, no I/O. Identical inputs always produce identical
//! outputs, so all of these are reentrant and safe to call from any number
//! of threads at once. The batched variants are element-wise maps with no
//! ordering dependency and run on the rayon thread pool.
//!
//! # Pipeline
//!
//! A space-to-space transform is always the same three steps:
//!
//! ```text
//! encoded RGB --src.to_linear--> linear --M--> linear --dst.from_linear--> encoded RGB
//! ```
//!
//! where `M = dst.xyz_to_rgb() * src.rgb_to_xyz()` collapses the trip
//! through XYZ into one matrix.

use chroma_core::{Rgb, Rgba, Xyz, Yxy};
use chroma_math::Vec3;
use rayon::prelude::*;

use crate::space::ColorSpace;

/// Converts an RGB value from `src` to `dst`.
///
/// # Example
///
/// ```rust
/// use chroma_core::Rgb;
/// use chroma_space::{transform, Registry};
///
/// let registry = Registry::new().unwrap();
/// let srgb = registry.lookup("sRGB").unwrap();
/// let lin = registry.lookup("lin_srgb").unwrap();
///
/// let mid_gray = transform(lin, srgb, Rgb::splat(0.5));
/// assert!((mid_gray.r - 0.214).abs() < 1e-3);
/// ```
pub fn transform(dst: &ColorSpace, src: &ColorSpace, rgb: Rgb) -> Rgb {
    let tx = src.rgb_to_rgb(dst);
    let linear: Vec3 = rgb.map(|t| src.to_linear(t)).into();
    Rgb::from(tx * linear).map(|t| dst.from_linear(t))
}

/// Converts a slice of RGB values from `src` to `dst` in place.
///
/// Element-wise and order-independent; work is parallelized across the
/// rayon thread pool. The matrix is computed once for the whole batch.
pub fn transform_slice(dst: &ColorSpace, src: &ColorSpace, colors: &mut [Rgb]) {
    let tx = src.rgb_to_rgb(dst);
    colors.par_iter_mut().for_each(|c| {
        let linear: Vec3 = c.map(|t| src.to_linear(t)).into();
        *c = Rgb::from(tx * linear).map(|t| dst.from_linear(t));
    });
}

/// Converts a slice of RGBA values from `src` to `dst` in place.
///
/// Same as [`transform_slice`] but alpha passes through untouched.
pub fn transform_slice_rgba(dst: &ColorSpace, src: &ColorSpace, pixels: &mut [Rgba]) {
    let tx = src.rgb_to_rgb(dst);
    pixels.par_iter_mut().for_each(|px| {
        let linear: Vec3 = px.rgb().map(|t| src.to_linear(t)).into();
        *px = px.with_rgb(Rgb::from(tx * linear).map(|t| dst.from_linear(t)));
    });
}

/// Converts an RGB value in `cs` to XYZ.
///
/// Linearizes first, then applies the space's RGB-to-XYZ matrix.
pub fn rgb_to_xyz(cs: &ColorSpace, rgb: Rgb) -> Xyz {
    let linear: Vec3 = rgb.map(|t| cs.to_linear(t)).into();
    Xyz::from(cs.rgb_to_xyz() * linear)
}

/// Converts an XYZ value to RGB in `cs`.
///
/// Applies the space's XYZ-to-RGB matrix, then encodes.
pub fn xyz_to_rgb(cs: &ColorSpace, xyz: Xyz) -> Rgb {
    let linear = cs.xyz_to_rgb() * Vec3::from(xyz);
    Rgb::from(linear).map(|t| cs.from_linear(t))
}

/// Projects XYZ to luminance plus chromaticity.
///
/// When the component sum is zero the chromaticity divide is undefined;
/// the result keeps the input's Y with (x, y) = (0, 0) instead of
/// dividing by zero.
pub fn xyz_to_yxy(xyz: Xyz) -> Yxy {
    let sum = xyz.sum();
    if sum == 0.0 {
        return Yxy::new(xyz.y, 0.0, 0.0);
    }
    Yxy::new(xyz.y, xyz.x / sum, xyz.y / sum)
}

/// Reconstructs XYZ from luminance plus chromaticity.
///
/// A zero y chromaticity carries no recoverable tristimulus information;
/// the result is (0, 0, 0).
pub fn yxy_to_xyz(yxy: Yxy) -> Xyz {
    if yxy.y == 0.0 {
        return Xyz::ZERO;
    }
    Xyz::new(
        yxy.luminance * yxy.x / yxy.y,
        yxy.luminance,
        yxy.luminance * (1.0 - yxy.x - yxy.y) / yxy.y,
    )
}

/// Converts luminance plus chromaticity to RGB in `cs`, via XYZ.
pub fn yxy_to_rgb(cs: &ColorSpace, yxy: Yxy) -> Rgb {
    xyz_to_rgb(cs, yxy_to_xyz(yxy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Registry;

    #[test]
    fn test_degenerate_xyz_to_yxy() {
        let yxy = xyz_to_yxy(Xyz::ZERO);
        assert_eq!(yxy, Yxy::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_degenerate_yxy_to_xyz() {
        let xyz = yxy_to_xyz(Yxy::new(1.0, 0.3, 0.0));
        assert_eq!(xyz, Xyz::ZERO);
    }

    #[test]
    fn test_yxy_roundtrip() {
        let xyz = Xyz::new(0.4124, 0.2126, 0.0193);
        let back = yxy_to_xyz(xyz_to_yxy(xyz));
        assert!((back.x - xyz.x).abs() < 1e-6);
        assert!((back.y - xyz.y).abs() < 1e-6);
        assert!((back.z - xyz.z).abs() < 1e-6);
    }

    #[test]
    fn test_slice_matches_scalar() {
        let registry = Registry::new().unwrap();
        let src = registry.lookup("sRGB").unwrap();
        let dst = registry.lookup("acescg").unwrap();

        let colors: Vec<Rgb> = (0..64)
            .map(|i| Rgb::new(i as f32 / 63.0, 0.5, 1.0 - i as f32 / 63.0))
            .collect();
        let mut batched = colors.clone();
        transform_slice(dst, src, &mut batched);

        for (input, output) in colors.iter().zip(&batched) {
            let scalar = transform(dst, src, *input);
            assert_eq!(*output, scalar);
        }
    }

    #[test]
    fn test_rgba_slice_keeps_alpha() {
        let registry = Registry::new().unwrap();
        let src = registry.lookup("lin_srgb").unwrap();
        let dst = registry.lookup("sRGB").unwrap();

        let mut pixels = vec![
            Rgba::new(0.18, 0.18, 0.18, 0.75),
            Rgba::new(1.0, 0.0, 0.0, 0.0),
        ];
        transform_slice_rgba(dst, src, &mut pixels);

        assert_eq!(pixels[0].a, 0.75);
        assert_eq!(pixels[1].a, 0.0);
        let expected = transform(dst, src, Rgb::splat(0.18));
        assert_eq!(pixels[0].rgb(), expected);
    }

    #[test]
    fn test_rgb_xyz_roundtrip() {
        let registry = Registry::new().unwrap();
        let srgb = registry.lookup("sRGB").unwrap();

        let rgb = Rgb::new(0.25, 0.5, 0.75);
        let back = xyz_to_rgb(srgb, rgb_to_xyz(srgb, rgb));
        assert!((back.r - rgb.r).abs() < 1e-5);
        assert!((back.g - rgb.g).abs() < 1e-5);
        assert!((back.b - rgb.b).abs() < 1e-5);
    }
}
