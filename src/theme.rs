/*
 * Theme Module
 *
 * Water "moods" and the colour palettes entities draw from. Entities only
 * carry an index into a palette; the renderer resolves it to a colour.
 */

use serde::{Deserialize, Serialize};

/// An sRGB colour with 8-bit channels and alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn opaque(hex: u32) -> Self {
        Self {
            r: (hex >> 16) as u8,
            g: (hex >> 8) as u8,
            b: hex as u8,
            a: 255,
        }
    }

    pub const fn translucent(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    // Linear blend between two colours, t in [0, 1]
    pub fn lerp(self, other: Rgba8, t: f32) -> Rgba8 {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgba8 {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

// Soft pastel fish colours
pub const FISH_PALETTE: [Rgba8; 9] = [
    Rgba8::opaque(0xfca5a5), // soft red
    Rgba8::opaque(0xfcd34d), // soft yellow
    Rgba8::opaque(0x86efac), // mint
    Rgba8::opaque(0x67e8f9), // cyan
    Rgba8::opaque(0xc4b5fd), // lavender
    Rgba8::opaque(0xfda4af), // pink
    Rgba8::opaque(0xf9a8d4), // light pink
    Rgba8::opaque(0xfff1f2), // pale pink
    Rgba8::opaque(0xe0f2fe), // pale blue
];

pub const JELLYFISH_PALETTE: [Rgba8; 3] = [
    Rgba8::translucent(255, 200, 255, 115),
    Rgba8::translucent(200, 240, 255, 115),
    Rgba8::translucent(255, 250, 240, 115),
];

/// Background mood selectable from the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    DeepOcean,
    DreamyPink,
    FantasyMint,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::DeepOcean, Theme::DreamyPink, Theme::FantasyMint];

    pub fn label(self) -> &'static str {
        match self {
            Theme::DeepOcean => "Deep Ocean",
            Theme::DreamyPink => "Dreamy Pink",
            Theme::FantasyMint => "Fantasy Mint",
        }
    }

    /// Water colour at the top and bottom of the viewport.
    pub fn water_gradient(self) -> (Rgba8, Rgba8) {
        match self {
            Theme::DeepOcean => (Rgba8::opaque(0x0f172a), Rgba8::opaque(0x0ea5e9)),
            Theme::DreamyPink => (Rgba8::opaque(0x4a044e), Rgba8::opaque(0xf472b6)),
            Theme::FantasyMint => (Rgba8::opaque(0x134e4a), Rgba8::opaque(0x2dd4bf)),
        }
    }
}

pub fn fish_color(tag: usize) -> Rgba8 {
    FISH_PALETTE[tag % FISH_PALETTE.len()]
}

pub fn jellyfish_color(tag: usize) -> Rgba8 {
    JELLYFISH_PALETTE[tag % JELLYFISH_PALETTE.len()]
}
