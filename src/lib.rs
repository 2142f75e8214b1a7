//! SSD1306 OLED Display Driver
//!
//! A driver for SSD1306-class 128x64 monochrome OLED controllers over I2C.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Page-organized in-memory frame buffer with XBM import
//! - Streaming 8x8 text path and proportional bitmap fonts
//! - Chunked full-frame transfers with a cooperative yield hook
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::i2c::{I2c, Operation};
//! use ssd1306_i2c::{Builder, Color, Display, I2cInterface, interface::DEFAULT_ADDRESS};
//!
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
//! let config = Builder::new().contrast(0xCF).build();
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.init();
//! let _ = display.clear();
//!
//! display.frame_mut().set_pixel(64, 32, Color::On);
//! let _ = display.display_prepared_frame();
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Page-organized frame buffer and panel geometry
pub mod buffer;
/// Monochrome color type
pub mod color;
/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Proportional bitmap font rendering
pub mod font;
/// Hardware interface abstraction
pub mod interface;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use buffer::{FRAME_SIZE, FrameBuffer, HEIGHT, PAGES, WIDTH};
pub use color::Color;
pub use config::{Builder, Config};
pub use display::{CHUNK_SIZE, Display};
pub use error::Error;
pub use font::{Font, GlyphDescriptor};
pub use interface::{CoopYield, DisplayInterface, I2cInterface, InterfaceError, NoYield};
