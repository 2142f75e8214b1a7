//! Proportional bitmap font model and rasterizer
//!
//! A [`Font`] is a read-only resource: a shared glyph `height` and
//! inter-glyph `advance`, plus per-character [`GlyphDescriptor`]s pointing
//! into one flat bitmap table. Glyph rows are packed MSB-first,
//! `ceil(width / 8)` bytes per row.
//!
//! Rasterization goes through [`Font::draw_str`], which blits into the
//! in-memory [`FrameBuffer`] only; pushing the result to the panel is the
//! display driver's job, so several strings can be composed before one
//! transfer.

use crate::buffer::FrameBuffer;
use crate::color::Color;

/// Location and width of one glyph inside a font's bitmap table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphDescriptor {
    /// Byte offset of the glyph's first row in the bitmap table
    pub offset: u16,
    /// Glyph width in pixels
    pub width: u8,
}

/// Immutable proportional bitmap font
///
/// Covers one contiguous character range starting at `first_char`; the
/// descriptor slice is indexed by `code - first_char`. Characters outside
/// the range have no glyph and are skipped during drawing.
#[derive(Clone, Copy, Debug)]
pub struct Font<'a> {
    /// Glyph height in pixel rows
    pub height: u8,
    /// Horizontal spacing inserted between consecutive glyphs
    pub advance: u8,
    /// Code of the first covered character
    pub first_char: u8,
    /// One descriptor per character in the covered range
    pub glyphs: &'a [GlyphDescriptor],
    /// Flat glyph bitmap table, rows MSB-first
    pub bitmap: &'a [u8],
}

impl Font<'_> {
    /// Look up the descriptor for a character; `None` outside the range
    pub fn glyph(&self, ch: char) -> Option<GlyphDescriptor> {
        let index = u32::from(ch).checked_sub(u32::from(self.first_char))?;
        self.glyphs.get(index as usize).copied()
    }

    /// Rasterize a string into the frame buffer at `(x, y)`.
    ///
    /// Background pixels are painted explicitly with `bg` rather than
    /// skipped, so successive strings overwrite prior content cleanly.
    /// Characters without a glyph are skipped and add no width of their
    /// own; the inter-glyph `advance` is still inserted between every pair
    /// of consecutive characters, never after the last one.
    ///
    /// Returns the total horizontal extent in pixels, letting callers
    /// position subsequent strings. The empty string returns 0 and leaves
    /// the buffer untouched.
    pub fn draw_str(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        text: &str,
        fg: Color,
        bg: Color,
    ) -> u16 {
        let origin = x;
        let mut x = x;
        let row_stride = |width: u8| (width as usize + 7) / 8;

        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            if let Some(desc) = self.glyph(ch) {
                let stride = row_stride(desc.width);
                for j in 0..self.height {
                    for i in 0..desc.width {
                        let offset =
                            desc.offset as usize + stride * j as usize + i as usize / 8;
                        let row = self.bitmap.get(offset).copied().unwrap_or(0);
                        let color = if row & (0x80 >> (i % 8)) != 0 { fg } else { bg };
                        // Saturate rather than wrap: a coordinate past
                        // u16::MAX is out of range either way, and the
                        // frame buffer drops it silently.
                        fb.set_pixel(
                            x.saturating_add(u16::from(i)),
                            y.saturating_add(u16::from(j)),
                            color,
                        );
                    }
                }
                x = x.saturating_add(u16::from(desc.width));
            }
            if chars.peek().is_some() {
                x = x.saturating_add(u16::from(self.advance));
            }
        }

        x - origin
    }
}
