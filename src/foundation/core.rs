pub use kurbo::{Point, Vec2};

/// Straight (non-premultiplied) RGBA8 color.
///
/// Scenes never composite pixels themselves; colors are carried through to
/// whichever renderer consumes the script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba8 {
    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent black.
    pub const fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Shared scene palette.
///
/// Values match the hues used throughout the video (node/edge greys, the
/// yellow/red emphasis pair, green/orange for zero vs. non-zero entries).
pub mod palette {
    use super::Rgba8;

    /// Plain white, default for node outlines and body text.
    pub const WHITE: Rgba8 = Rgba8::rgb(0xFF, 0xFF, 0xFF);
    /// Scene background.
    pub const BLACK: Rgba8 = Rgba8::rgb(0x00, 0x00, 0x00);
    /// Emphasis red (highlights, problem call-outs, zero matrix entries).
    pub const RED: Rgba8 = Rgba8::rgb(0xFC, 0x62, 0x55);
    /// Green (diagonal entries, selected models).
    pub const GREEN: Rgba8 = Rgba8::rgb(0x83, 0xC1, 0x67);
    /// Blue (secondary titles, node fills).
    pub const BLUE: Rgba8 = Rgba8::rgb(0x58, 0xC4, 0xDD);
    /// Primary yellow (titles, arrows).
    pub const YELLOW: Rgba8 = Rgba8::rgb(0xFF, 0xFF, 0x00);
    /// Orange (non-zero schematic entries).
    pub const ORANGE: Rgba8 = Rgba8::rgb(0xFF, 0x86, 0x2F);
    /// Gold (decorative glow).
    pub const GOLD: Rgba8 = Rgba8::rgb(0xF0, 0xAC, 0x5F);
    /// Purple (level-set ellipse in the lasso scene).
    pub const PURPLE: Rgba8 = Rgba8::rgb(0x94, 0x42, 0x4D);
    /// Light grey for graph edges and schematic strokes.
    pub const GREY: Rgba8 = Rgba8::rgb(0x9C, 0xA8, 0xB3);
    /// Dark grey for schematic cell fills.
    pub const GREY_DARK: Rgba8 = Rgba8::rgb(0x22, 0x22, 0x22);
}
