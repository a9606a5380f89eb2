//! # chroma-space
//!
//! Color space derivation and the RGB/XYZ/Yxy transform engine.
//!
//! Given a named or custom color space (primaries, white point, transfer
//! function), this crate derives the matrices and curves needed to move
//! color values between linear tristimulus space and any other space, and
//! performs space-to-space conversions.
//!
//! # Architecture
//!
//! ```text
//!        chroma-space
//!             |
//!     +-------+-------+
//!     |               |
//! chroma-core    chroma-math
//! (value types)  (Mat3, Vec3)
//! ```
//!
//! A descriptor is resolved **once** into a [`ColorSpace`] (matrix and
//! transfer coefficients cached at construction); the [`Registry`] exposes
//! the built-in spaces by name; the free functions in [`convert`] take two
//! space handles and a value and produce a converted value, with no other
//! shared state.
//!
//! # Quick Start
//!
//! ```rust
//! use chroma_core::Rgb;
//! use chroma_space::{transform, Registry};
//!
//! let registry = Registry::new().unwrap();
//! let srgb = registry.lookup("sRGB").unwrap();
//! let acescg = registry.lookup("acescg").unwrap();
//!
//! let display_pixel = Rgb::new(0.5, 0.3, 0.2);
//! let scene_linear = transform(acescg, srgb, display_pixel);
//! # let _ = scene_linear;
//! ```
//!
//! # Concurrency
//!
//! Everything is immutable after construction and every conversion is a
//! pure function, so any number of threads may convert concurrently.
//! Build the [`Registry`] before sharing it; that is the entire
//! initialization discipline. No operation blocks or performs I/O.
//!
//! # Dependencies
//!
//! - [`chroma-core`] - value types and errors
//! - [`chroma-math`] - matrix/vector primitives
//! - [`rayon`] - parallel batched conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod blackbody;
mod builtin;
mod descriptor;
mod registry;
mod space;

pub mod convert;

pub use blackbody::{kelvin_to_yxy, MAX_KELVIN, MIN_KELVIN};
pub use builtin::{names, WHITE_ACES, WHITE_D65};
pub use convert::{
    rgb_to_xyz, transform, transform_slice, transform_slice_rgba, xyz_to_rgb, xyz_to_yxy,
    yxy_to_rgb, yxy_to_xyz,
};
pub use descriptor::{ColorSpaceDescriptor, MatrixDescriptor};
pub use registry::Registry;
pub use space::ColorSpace;

// Re-export the value and math types so engine consumers need only this
// crate.
pub use chroma_core::{Chromaticity, Error, Result, Rgb, Rgba, Xyz, Yxy};
pub use chroma_math::{Mat3, Vec3};
