//! Blackbody locus approximation.
//!
//! Maps a correlated color temperature in kelvin to a chromaticity on the
//! Planckian locus, using Kim et al.'s piecewise cubic spline
//! approximation: x as a cubic in reciprocal temperature (split at
//! 4000 K), then y as a cubic in x (split at 2222 K and 4000 K).
//!
//! Accuracy is a few thousandths over the supported range, which is ample
//! for generating light source colors and temperature swatch series.

use chroma_core::Yxy;

/// Lowest supported temperature, in kelvin.
pub const MIN_KELVIN: f32 = 1000.0;

/// Highest supported temperature, in kelvin.
pub const MAX_KELVIN: f32 = 15000.0;

/// Converts a blackbody temperature to luminance plus chromaticity.
///
/// The temperature is silently clamped to [1000, 15000] K; out-of-range
/// input is not an error. `luminosity` passes through as the Y component.
///
/// Deterministic and stateless.
///
/// # Example
///
/// ```rust
/// use chroma_space::kelvin_to_yxy;
///
/// // 6500 K lands near the D65 white point
/// let yxy = kelvin_to_yxy(6500.0, 1.0);
/// assert!((yxy.x - 0.3127).abs() < 0.01);
/// assert!((yxy.y - 0.3290).abs() < 0.01);
/// ```
pub fn kelvin_to_yxy(kelvin: f32, luminosity: f32) -> Yxy {
    let t = kelvin.clamp(MIN_KELVIN, MAX_KELVIN);

    let t1 = 1e3 / t;
    let t2 = 1e6 / (t * t);
    let t3 = 1e9 / (t * t * t);

    let x = if t < 4000.0 {
        -0.2661239 * t3 - 0.2343589 * t2 + 0.8776956 * t1 + 0.179910
    } else {
        -3.0258469 * t3 + 2.1070379 * t2 + 0.2226347 * t1 + 0.240390
    };

    let x2 = x * x;
    let x3 = x2 * x;
    let y = if t < 2222.0 {
        -1.1063814 * x3 - 1.34811020 * x2 + 2.18555832 * x - 0.20219683
    } else if t < 4000.0 {
        -0.9549476 * x3 - 1.37418593 * x2 + 2.09137015 * x - 0.16748867
    } else {
        3.0817580 * x3 - 5.87338670 * x2 + 3.75112997 * x - 0.37001483
    };

    Yxy::new(luminosity, x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d65_neighborhood() {
        let yxy = kelvin_to_yxy(6500.0, 1.0);
        assert_eq!(yxy.luminance, 1.0);
        assert!((yxy.x - 0.313).abs() < 0.01);
        assert!((yxy.y - 0.329).abs() < 0.01);
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(kelvin_to_yxy(500.0, 1.0), kelvin_to_yxy(1000.0, 1.0));
        assert_eq!(kelvin_to_yxy(20000.0, 1.0), kelvin_to_yxy(15000.0, 1.0));
    }

    #[test]
    fn test_luminosity_passthrough() {
        let yxy = kelvin_to_yxy(3200.0, 0.5);
        assert_eq!(yxy.luminance, 0.5);
    }

    #[test]
    fn test_locus_moves_from_warm_to_cool() {
        // warmer temperatures sit at larger x (redder)
        let tungsten = kelvin_to_yxy(2856.0, 1.0);
        let daylight = kelvin_to_yxy(6500.0, 1.0);
        let shade = kelvin_to_yxy(12000.0, 1.0);
        assert!(tungsten.x > daylight.x);
        assert!(daylight.x > shade.x);
    }

    #[test]
    fn test_continuity_at_branch_points() {
        for t in [2222.0_f32, 4000.0] {
            let below = kelvin_to_yxy(t - 1.0, 1.0);
            let above = kelvin_to_yxy(t + 1.0, 1.0);
            assert!((below.x - above.x).abs() < 1e-3);
            assert!((below.y - above.y).abs() < 1e-2);
        }
    }
}
