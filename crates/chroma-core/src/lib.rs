//! # chroma-core
//!
//! Core value types for colorimetric transforms.
//!
//! All types here are pure data: a [`Rgb`] carries no record of which color
//! space it is expressed in, a [`Chromaticity`] is just a point on the CIE
//! 1931 diagram. The caller tracks space identity; `chroma-space` supplies
//! the transforms between spaces.
//!
//! # Types
//!
//! - [`Chromaticity`] - CIE 1931 xy coordinate
//! - [`Xyz`] - linear tristimulus value
//! - [`Yxy`] - luminance plus chromaticity
//! - [`Rgb`] / [`Rgba`] - space-free color triplet/quad
//! - [`Error`] / [`Result`] - shared error type for the workspace
//!
//! # Usage
//!
//! ```rust
//! use chroma_core::{Rgb, Xyz};
//!
//! let mid_gray = Rgb::splat(0.18);
//! let hdr = Xyz::new(4.2, 5.0, 3.1); // unrestricted range
//! assert_eq!(mid_gray.g, 0.18);
//! assert!(hdr.y > 1.0);
//! ```
//!
//! # Used By
//!
//! - `chroma-space` - color space derivation, registry, transform engine

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color;
mod error;
mod rgb;

pub use color::{Chromaticity, Xyz, Yxy};
pub use error::{Error, Result};
pub use rgb::{Rgb, Rgba};
