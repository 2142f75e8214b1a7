//! Color type for monochrome OLED panels
//!
//! The SSD1306 drives one bit per pixel: lit or unlit. There are no gray
//! levels; inversion is a whole-panel controller mode, not a color.
//!
//! ## Example
//!
//! ```
//! use ssd1306_i2c::Color;
//!
//! assert!(Color::On.is_on());
//! assert!(!Color::Off.is_on());
//! ```

/// Pixel state of a monochrome OLED
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Color {
    /// Pixel unlit
    Off,
    /// Pixel lit
    On,
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU1;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        match color {
            embedded_graphics_core::pixelcolor::BinaryColor::On => Self::On,
            embedded_graphics_core::pixelcolor::BinaryColor::Off => Self::Off,
        }
    }
}

impl Color {
    /// Whether the pixel is lit
    pub fn is_on(self) -> bool {
        self == Self::On
    }
}
