//! Graphics support via embedded-graphics
//!
//! This module implements the
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait
//! directly on [`Display`]: the driver already owns the full frame buffer,
//! so no wrapper type or external buffer is needed. Drawing mutates the
//! in-memory frame; nothing reaches the panel until
//! [`display_prepared_frame`](Display::display_prepared_frame).
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//! };
//! use ssd1306_i2c::{Builder, Color, Display, I2cInterface, interface::DEFAULT_ADDRESS};
//! # use core::convert::Infallible;
//! # use embedded_hal::i2c::{I2c, Operation};
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # let i2c = MockI2c;
//! let interface = I2cInterface::new(i2c, DEFAULT_ADDRESS);
//! let mut display = Display::new(interface, Builder::new().build());
//! let _ = display.init();
//!
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Color::On))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(80, 20), 24)
//!     .into_styled(PrimitiveStyle::with_stroke(Color::On, 2))
//!     .draw(&mut display);
//!
//! // Update physical display
//! let _ = display.display_prepared_frame();
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::Pixel,
};

use crate::buffer::{HEIGHT, WIDTH};
use crate::color::Color;
use crate::display::Display;
use crate::interface::DisplayInterface;

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }
            // Out-of-range coordinates drop silently in the frame buffer.
            self.frame_mut().set_pixel(x as u16, y as u16, color);
        }

        Ok(())
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use embedded_graphics::{
        prelude::*,
        primitives::{PrimitiveStyle, Rectangle},
    };

    #[derive(Debug)]
    struct MockInterface;

    impl DisplayInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn send_commands(&mut self, _commands: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn send_data(&mut self, _data: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn yield_now(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn test_display() -> Display<MockInterface> {
        Display::new(MockInterface, Builder::new().build())
    }

    #[test]
    fn size_reports_panel_dimensions() {
        let display = test_display();
        assert_eq!(display.size(), Size::new(128, 64));
    }

    #[test]
    fn filled_rectangle_lands_in_frame_buffer() {
        let mut display = test_display();
        Rectangle::new(Point::new(2, 3), Size::new(4, 5))
            .into_styled(PrimitiveStyle::with_fill(Color::On))
            .draw(&mut display)
            .unwrap();

        for x in 2..6 {
            for y in 3..8 {
                assert_eq!(display.frame().get_pixel(x, y), Some(Color::On));
            }
        }
        // Just outside stays dark.
        assert_eq!(display.frame().get_pixel(6, 3), Some(Color::Off));
        assert_eq!(display.frame().get_pixel(2, 8), Some(Color::Off));
    }

    #[test]
    fn negative_and_out_of_range_pixels_are_ignored() {
        let mut display = test_display();
        display
            .draw_iter([
                Pixel(Point::new(-1, 0), Color::On),
                Pixel(Point::new(0, -3), Color::On),
                Pixel(Point::new(128, 0), Color::On),
                Pixel(Point::new(0, 64), Color::On),
                Pixel(Point::new(127, 63), Color::On),
            ])
            .unwrap();

        assert_eq!(display.frame().get_pixel(127, 63), Some(Color::On));
        let lit: u32 = display
            .frame()
            .as_bytes()
            .iter()
            .map(|b| b.count_ones())
            .sum();
        assert_eq!(lit, 1);
    }

    #[test]
    fn clearing_via_draw_target_resets_pixels() {
        let mut display = test_display();
        display.frame_mut().set_pixel(10, 10, Color::On);
        DrawTarget::clear(&mut display, Color::Off).unwrap();
        assert_eq!(display.frame().get_pixel(10, 10), Some(Color::Off));
    }
}
