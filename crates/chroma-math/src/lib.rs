//! # chroma-math
//!
//! Linear-algebra primitives for colorimetric transforms.
//!
//! Provides [`Mat3`], a row-major 3x3 matrix used for RGB-XYZ conversions,
//! and [`Vec3`], a 3-component value used for RGB and XYZ triplets.
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::{Mat3, Vec3};
//!
//! // sRGB to XYZ (D65)
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let red = Vec3::new(1.0, 0.0, 0.0);
//! let xyz = rgb_to_xyz * red;
//! assert!((xyz.x - 0.4124564).abs() < 1e-6);
//! ```
//!
//! # Used By
//!
//! - `chroma-space` - color space derivation and the transform engine

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::Mat3;
pub use vec3::Vec3;
