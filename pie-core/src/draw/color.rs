use serde::{Deserialize, Serialize};

/// Opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const MISTY_ROSE: Color = Color::rgb(0xFF, 0xE4, 0xE1);
    pub const WHEAT: Color = Color::rgb(0xF5, 0xDE, 0xB3);
    pub const CADET_BLUE: Color = Color::rgb(0x5F, 0x9E, 0xA0);
    pub const LIGHT_CYAN: Color = Color::rgb(0xE0, 0xFF, 0xFF);

    pub const fn rgb(
        r: u8,
        g: u8,
        b: u8,
    ) -> Self {
        Self { r, g, b }
    }

    /// Packs the color as `0xRRGGBB`.
    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn to_hex_packs_channels_in_rgb_order() {
        assert_eq!(Color::MISTY_ROSE.to_hex(), 0xFFE4E1);
        assert_eq!(Color::CADET_BLUE.to_hex(), 0x5F9EA0);
        assert_eq!(Color::BLACK.to_hex(), 0);
    }
}
