//! Built-in color space table.
//!
//! The fixed declaration table the [`crate::Registry`] is populated from.
//! Names, chromaticities, gammas, and biases follow the established
//! catalog for these spaces; the declaration order is part of the
//! observable behavior of first-match primaries lookup and must not be
//! reshuffled.

use chroma_core::Chromaticity;

/// D65 white point chromaticity (daylight, ~6500K).
pub const WHITE_D65: Chromaticity = Chromaticity::new(0.3127, 0.3290);

/// ACES white point chromaticity (~D60).
pub const WHITE_ACES: Chromaticity = Chromaticity::new(0.32168, 0.33767);

/// Names of the built-in color spaces.
pub mod names {
    /// ACEScg: AP1 primaries, linear.
    pub const ACESCG: &str = "acescg";
    /// Adobe RGB (1998).
    pub const ADOBERGB: &str = "adobergb";
    /// Gamma 1.8, AP1 primaries.
    pub const G18_AP1: &str = "g18_ap1";
    /// Gamma 1.8, Rec. 709 primaries.
    pub const G18_REC709: &str = "g18_rec709";
    /// Gamma 2.2, AP1 primaries.
    pub const G22_AP1: &str = "g22_ap1";
    /// Gamma 2.2, Rec. 709 primaries.
    pub const G22_REC709: &str = "g22_rec709";
    /// Identity space, no conversion.
    pub const IDENTITY: &str = "identity";
    /// Linear Adobe RGB (1998).
    pub const LIN_ADOBERGB: &str = "lin_adobergb";
    /// Linear, AP0 primaries.
    pub const LIN_AP0: &str = "lin_ap0";
    /// Linear, AP1 primaries.
    pub const LIN_AP1: &str = "lin_ap1";
    /// Linear Display P3.
    pub const LIN_DISPLAYP3: &str = "lin_displayp3";
    /// Linear Rec. 709.
    pub const LIN_REC709: &str = "lin_rec709";
    /// Linear Rec. 2020.
    pub const LIN_REC2020: &str = "lin_rec2020";
    /// Linear sRGB.
    pub const LIN_SRGB: &str = "lin_srgb";
    /// Raw space, no conversion.
    pub const RAW: &str = "raw";
    /// sRGB curve on Display P3 primaries.
    pub const SRGB_DISPLAYP3: &str = "srgb_displayp3";
    /// sRGB.
    pub const SRGB: &str = "sRGB";
    /// sRGB texture space.
    pub const SRGB_TEXTURE: &str = "srgb_texture";
}

/// One row of the built-in declaration table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BuiltinSpace {
    pub name: &'static str,
    pub red: Chromaticity,
    pub green: Chromaticity,
    pub blue: Chromaticity,
    pub white: Chromaticity,
    pub gamma: f32,
    pub linear_bias: f32,
}

// AP1 (ACES working) primaries
const AP1_RED: Chromaticity = Chromaticity::new(0.713, 0.293);
const AP1_GREEN: Chromaticity = Chromaticity::new(0.165, 0.830);
const AP1_BLUE: Chromaticity = Chromaticity::new(0.128, 0.044);

// Rec. 709 / sRGB primaries
const REC709_RED: Chromaticity = Chromaticity::new(0.640, 0.330);
const REC709_GREEN: Chromaticity = Chromaticity::new(0.300, 0.600);
const REC709_BLUE: Chromaticity = Chromaticity::new(0.150, 0.060);

// Adobe RGB (1998) primaries
const ADOBE_RED: Chromaticity = Chromaticity::new(0.64, 0.33);
const ADOBE_GREEN: Chromaticity = Chromaticity::new(0.21, 0.71);
const ADOBE_BLUE: Chromaticity = Chromaticity::new(0.15, 0.06);

// Display P3 primaries
const P3_RED: Chromaticity = Chromaticity::new(0.6800, 0.3200);
const P3_GREEN: Chromaticity = Chromaticity::new(0.2650, 0.6900);
const P3_BLUE: Chromaticity = Chromaticity::new(0.1500, 0.0600);

// These chromaticities generate the identity matrix.
const UNIT_RED: Chromaticity = Chromaticity::new(1.0, 0.0);
const UNIT_GREEN: Chromaticity = Chromaticity::new(0.0, 1.0);
const UNIT_BLUE: Chromaticity = Chromaticity::new(0.0, 0.0);
const UNIT_WHITE: Chromaticity = Chromaticity::new(1.0 / 3.0, 1.0 / 3.0);

/// The fixed declaration table of the 18 built-in spaces.
pub(crate) const BUILTIN_TABLE: [BuiltinSpace; 18] = [
    BuiltinSpace {
        name: names::ACESCG,
        red: AP1_RED,
        green: AP1_GREEN,
        blue: AP1_BLUE,
        white: WHITE_ACES,
        gamma: 1.0,
        linear_bias: 0.0,
    },
    BuiltinSpace {
        name: names::ADOBERGB,
        red: ADOBE_RED,
        green: ADOBE_GREEN,
        blue: ADOBE_BLUE,
        white: WHITE_D65,
        // Adobe RGB specifies 563/256, not a flat 2.2
        gamma: 563.0 / 256.0,
        linear_bias: 0.0,
    },
    BuiltinSpace {
        name: names::G18_AP1,
        red: AP1_RED,
        green: AP1_GREEN,
        blue: AP1_BLUE,
        white: WHITE_ACES,
        gamma: 1.8,
        linear_bias: 0.0,
    },
    BuiltinSpace {
        name: names::G22_AP1,
        red: AP1_RED,
        green: AP1_GREEN,
        blue: AP1_BLUE,
        white: WHITE_ACES,
        gamma: 2.2,
        linear_bias: 0.0,
    },
    BuiltinSpace {
        name: names::G18_REC709,
        red: REC709_RED,
        green: REC709_GREEN,
        blue: REC709_BLUE,
        white: WHITE_D65,
        gamma: 1.8,
        linear_bias: 0.0,
    },
    BuiltinSpace {
        name: names::G22_REC709,
        red: REC709_RED,
        green: REC709_GREEN,
        blue: REC709_BLUE,
        white: WHITE_D65,
        gamma: 2.2,
        linear_bias: 0.0,
    },
    BuiltinSpace {
        name: names::LIN_ADOBERGB,
        red: ADOBE_RED,
        green: ADOBE_GREEN,
        blue: ADOBE_BLUE,
        white: WHITE_D65,
        gamma: 1.0,
        linear_bias: 0.0,
    },
    BuiltinSpace {
        name: names::LIN_AP0,
        red: Chromaticity::new(0.7347, 0.2653),
        green: Chromaticity::new(0.0000, 1.0000),
        blue: Chromaticity::new(0.0001, -0.0770),
        white: WHITE_ACES,
        gamma: 1.0,
        linear_bias: 0.0,
    },
    BuiltinSpace {
        name: names::LIN_AP1,
        red: AP1_RED,
        green: AP1_GREEN,
        blue: AP1_BLUE,
        white: WHITE_ACES,
        gamma: 1.0,
        linear_bias: 0.0,
    },
    BuiltinSpace {
        name: names::LIN_DISPLAYP3,
        red: P3_RED,
        green: P3_GREEN,
        blue: P3_BLUE,
        white: WHITE_D65,
        gamma: 1.0,
        linear_bias: 0.0,
    },
    BuiltinSpace {
        name: names::LIN_REC709,
        red: REC709_RED,
        green: REC709_GREEN,
        blue: REC709_BLUE,
        white: WHITE_D65,
        gamma: 1.0,
        linear_bias: 0.0,
    },
    BuiltinSpace {
        name: names::LIN_REC2020,
        red: Chromaticity::new(0.708, 0.292),
        green: Chromaticity::new(0.170, 0.797),
        blue: Chromaticity::new(0.131, 0.046),
        white: WHITE_D65,
        gamma: 1.0,
        linear_bias: 0.0,
    },
    BuiltinSpace {
        name: names::LIN_SRGB,
        red: REC709_RED,
        green: REC709_GREEN,
        blue: REC709_BLUE,
        white: WHITE_D65,
        gamma: 1.0,
        linear_bias: 0.0,
    },
    BuiltinSpace {
        name: names::SRGB_DISPLAYP3,
        red: P3_RED,
        green: P3_GREEN,
        blue: P3_BLUE,
        white: WHITE_D65,
        gamma: 2.4,
        linear_bias: 0.055,
    },
    BuiltinSpace {
        name: names::SRGB_TEXTURE,
        red: REC709_RED,
        green: REC709_GREEN,
        blue: REC709_BLUE,
        white: WHITE_D65,
        gamma: 2.4,
        linear_bias: 0.055,
    },
    BuiltinSpace {
        name: names::SRGB,
        red: REC709_RED,
        green: REC709_GREEN,
        blue: REC709_BLUE,
        white: WHITE_D65,
        gamma: 2.4,
        linear_bias: 0.055,
    },
    BuiltinSpace {
        name: names::IDENTITY,
        red: UNIT_RED,
        green: UNIT_GREEN,
        blue: UNIT_BLUE,
        white: UNIT_WHITE,
        gamma: 1.0,
        linear_bias: 0.0,
    },
    BuiltinSpace {
        name: names::RAW,
        red: UNIT_RED,
        green: UNIT_GREEN,
        blue: UNIT_BLUE,
        white: UNIT_WHITE,
        gamma: 1.0,
        linear_bias: 0.0,
    },
];
