//! In-memory frame buffer with page-major pixel addressing
//!
//! The SSD1306 organizes its 128x64 GDDRAM as 8 pages of 128 bytes; each
//! byte holds 8 vertically stacked pixels. The [`FrameBuffer`] mirrors
//! that layout so a full-frame push is a plain byte copy:
//!
//! - byte index = `x + (y / 8) * WIDTH`
//! - bit within the byte = `y & 7`
//!
//! All pixel operations are bounds-checked; out-of-range coordinates are
//! silent no-ops, matching the controller's lack of coordinate wrapping.

use crate::color::Color;

/// Panel width in pixels
pub const WIDTH: usize = 128;

/// Panel height in pixels
pub const HEIGHT: usize = 64;

/// Number of controller pages (horizontal bands of 8 pixel rows)
pub const PAGES: usize = HEIGHT / 8;

/// Full frame size in bytes
pub const FRAME_SIZE: usize = WIDTH * PAGES;

/// Page-major 1-bit-per-pixel frame store
///
/// Owned by the [`Display`](crate::display::Display); drawing operations
/// mutate it in memory and a frame push sends it to the controller as one
/// chunked transfer.
pub struct FrameBuffer {
    data: [u8; FRAME_SIZE],
}

impl FrameBuffer {
    /// Create a zeroed frame buffer
    pub const fn new() -> Self {
        Self {
            data: [0; FRAME_SIZE],
        }
    }

    /// Zero every byte
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Set or clear one pixel
    ///
    /// Out-of-range coordinates are ignored.
    pub fn set_pixel(&mut self, x: u16, y: u16, color: Color) {
        if x as usize >= WIDTH || y as usize >= HEIGHT {
            return;
        }
        let index = x as usize + (y as usize / 8) * WIDTH;
        let mask = 1 << (y & 7);
        if color.is_on() {
            self.data[index] |= mask;
        } else {
            self.data[index] &= !mask;
        }
    }

    /// Read one pixel; `None` if out of range
    pub fn get_pixel(&self, x: u16, y: u16) -> Option<Color> {
        if x as usize >= WIDTH || y as usize >= HEIGHT {
            return None;
        }
        let index = x as usize + (y as usize / 8) * WIDTH;
        if self.data[index] & (1 << (y & 7)) != 0 {
            Some(Color::On)
        } else {
            Some(Color::Off)
        }
    }

    /// Merge an XBM-format bitmap into the buffer
    ///
    /// XBM stores pixels row-major, LSB-first within each byte, rows padded
    /// to byte boundaries (`WIDTH / 8` bytes per row). Source row `r`, byte
    /// column `c`, bit `b` maps to destination pixel `(c * 8 + b, r)`;
    /// shearing that mapping produces diagonal garbage on screen. Only set
    /// bits are written, so existing buffer content shows through where the
    /// image is blank.
    ///
    /// A slice shorter than [`FRAME_SIZE`] converts as far as it reaches.
    pub fn load_xbm(&mut self, xbm: &[u8]) {
        const ROW_BYTES: usize = WIDTH / 8;
        for row in 0..HEIGHT {
            for col in 0..ROW_BYTES {
                let Some(&byte) = xbm.get(row * ROW_BYTES + col) else {
                    return;
                };
                for bit in 0..8 {
                    if byte & (1 << bit) != 0 {
                        self.set_pixel((col * 8 + bit) as u16, row as u16, Color::On);
                    }
                }
            }
        }
    }

    /// Borrow the raw page-major bytes for transfer
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
