//! Core display operations
//!
//! [`Display`] owns the hardware interface and the in-memory
//! [`FrameBuffer`], and sequences command protocol, frame buffer, and font
//! rasterizer into the public drawing operations. It is not internally
//! reentrant: one logical thread of control, at most one in-flight
//! operation, no locking.

use log::{debug, warn};

use crate::buffer::{FRAME_SIZE, FrameBuffer, PAGES, WIDTH};
use crate::color::Color;
use crate::command;
use crate::config::Config;
use crate::error::Error;
use crate::font::Font;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Maximum bytes per bus data write during a frame push
///
/// Bounds per-transfer latency and stays within typical I2C buffer and
/// timeout limits; one chunk is exactly one page row of the panel.
pub const CHUNK_SIZE: usize = 128;

/// Transmit buffer size of the streaming text path: 8 glyphs of 8 bytes
const TEXT_BUFFER_SIZE: usize = 64;

/// Shared zero chunk for blank-frame pushes
static ZERO_CHUNK: [u8; CHUNK_SIZE] = [0; CHUNK_SIZE];

/// Driver for an SSD1306-class 128x64 monochrome OLED
///
/// Construct with [`Display::new`], then call [`init`](Display::init)
/// before any drawing operation. The driver sends the init sequence once
/// per call and never retries internally; bounded retry with a delay is
/// the caller's policy.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Panel configuration
    config: Config,
    /// Shared in-memory frame store
    buffer: FrameBuffer,
    /// Whether the init sequence has been accepted by the controller
    is_ready: bool,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            buffer: FrameBuffer::new(),
            is_ready: false,
        }
    }

    /// Send the controller initialization sequence
    ///
    /// One attempt only; on failure the caller may retry the whole call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Init`] if the bus rejects the sequence.
    pub fn init(&mut self) -> DisplayResult<I> {
        self.is_ready = false;
        let sequence = command::init_sequence(&self.config);
        debug!("initializing display ({} command bytes)", sequence.len());
        if let Err(e) = self.interface.send_commands(&sequence) {
            warn!("init sequence rejected: {:?}", e);
            return Err(Error::Init(e));
        }
        self.is_ready = true;
        Ok(())
    }

    /// Whether a prior [`init`](Display::init) succeeded
    pub fn is_ready(&self) -> bool {
        self.is_ready
    }

    /// Zero the frame buffer and push it, blanking the panel
    ///
    /// "Clear" means zeroed pixels made visible, not merely a local buffer
    /// reset.
    pub fn clear(&mut self) -> DisplayResult<I> {
        self.buffer.clear();
        Self::write_frame(&mut self.interface, Some(self.buffer.as_bytes()))
    }

    /// Stream text in the fixed 8x8 font, one panel page per line
    ///
    /// This path writes glyph column data straight to the controller and
    /// does not touch the frame buffer. A newline flushes pending glyphs,
    /// advances to the next page (wrapping past the last), and resets the
    /// column to 0. Glyphs are batched into a 64-byte transmit buffer (8
    /// characters) to keep per-write protocol overhead down. Bytes outside
    /// the ASCII table render as a blank cell.
    pub fn display_text(&mut self, text: &[u8]) -> DisplayResult<I> {
        let mut page: u8 = 0;
        Self::send_commands_on(&mut self.interface, &Self::text_window(page))?;

        let mut pending = [0u8; TEXT_BUFFER_SIZE];
        let mut pending_len = 0usize;

        for &byte in text {
            if byte == b'\n' {
                if pending_len > 0 {
                    Self::send_data_on(&mut self.interface, &pending[..pending_len])?;
                    pending_len = 0;
                }
                page = (page + 1) % PAGES as u8;
                Self::send_commands_on(&mut self.interface, &Self::text_window(page))?;
            } else {
                pending[pending_len..pending_len + 8].copy_from_slice(&glyph_columns(byte));
                pending_len += 8;
                if pending_len == TEXT_BUFFER_SIZE {
                    Self::send_data_on(&mut self.interface, &pending)?;
                    pending_len = 0;
                }
            }
        }

        if pending_len > 0 {
            Self::send_data_on(&mut self.interface, &pending[..pending_len])?;
        }
        Ok(())
    }

    /// Load an XBM-format bitmap into the frame buffer and push it
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`] if `xbm` holds fewer than
    /// [`FRAME_SIZE`] bytes.
    pub fn load_xbm(&mut self, xbm: &[u8]) -> DisplayResult<I> {
        if xbm.len() < FRAME_SIZE {
            return Err(Error::BufferTooSmall {
                required: FRAME_SIZE,
                provided: xbm.len(),
            });
        }
        self.buffer.load_xbm(xbm);
        Self::write_frame(&mut self.interface, Some(self.buffer.as_bytes()))
    }

    /// Rasterize a string into the shared frame buffer without bus traffic
    ///
    /// Callers compose multiple strings, then push once with
    /// [`display_prepared_frame`](Display::display_prepared_frame).
    /// Returns the rendered width in pixels.
    pub fn prepare_string_frame(
        &mut self,
        font: &Font<'_>,
        x: u16,
        y: u16,
        text: &str,
        fg: Color,
        bg: Color,
    ) -> u16 {
        font.draw_str(&mut self.buffer, x, y, text, fg, bg)
    }

    /// Push the current frame buffer contents to the panel
    pub fn display_prepared_frame(&mut self) -> DisplayResult<I> {
        Self::write_frame(&mut self.interface, Some(self.buffer.as_bytes()))
    }

    /// Push a caller-supplied full frame, or a blank frame for `None`
    ///
    /// The `None` path reuses a shared all-zero chunk instead of
    /// allocating a transient buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`] if a provided frame holds fewer
    /// than [`FRAME_SIZE`] bytes.
    pub fn push_frame(&mut self, frame: Option<&[u8]>) -> DisplayResult<I> {
        if let Some(frame) = frame {
            if frame.len() < FRAME_SIZE {
                return Err(Error::BufferTooSmall {
                    required: FRAME_SIZE,
                    provided: frame.len(),
                });
            }
        }
        Self::write_frame(&mut self.interface, frame)
    }

    /// Toggle the panel's horizontal mirror ("invert")
    ///
    /// See [`command::invert`] for the controller-specific byte mapping.
    pub fn invert_display(&mut self, enable: bool) -> DisplayResult<I> {
        Self::send_commands_on(&mut self.interface, &[command::invert(enable)])
    }

    /// Toggle the panel's vertical scan direction
    pub fn reverse_scan(&mut self, enable: bool) -> DisplayResult<I> {
        Self::send_commands_on(&mut self.interface, &[command::scan_flip(enable)])
    }

    /// Set the contrast level
    pub fn set_contrast(&mut self, level: u8) -> DisplayResult<I> {
        Self::send_commands_on(&mut self.interface, &[command::SET_CONTRAST, level])
    }

    /// Turn the panel on or off without losing GDDRAM contents
    pub fn display_on(&mut self, on: bool) -> DisplayResult<I> {
        let cmd = if on {
            command::DISPLAY_ON
        } else {
            command::DISPLAY_OFF
        };
        Self::send_commands_on(&mut self.interface, &[cmd])
    }

    /// Access the in-memory frame buffer
    pub fn frame(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Access the in-memory frame buffer mutably
    ///
    /// Changes become visible on the next
    /// [`display_prepared_frame`](Display::display_prepared_frame).
    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.buffer
    }

    /// Access the panel configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the driver and release the interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Address window for the text path: full column range, pages
    /// `page..=last`, column reset to 0.
    fn text_window(page: u8) -> [u8; 6] {
        command::address_window(0, (WIDTH - 1) as u8, page, (PAGES - 1) as u8)
    }

    /// Chunked full-frame transfer with a single trailing yield.
    ///
    /// Associated function rather than a method so callers can borrow the
    /// frame buffer and the interface at the same time. A failed chunk
    /// aborts the push; the panel then holds a partial frame until the
    /// next full push.
    fn write_frame(interface: &mut I, frame: Option<&[u8]>) -> DisplayResult<I> {
        Self::send_commands_on(
            interface,
            &command::address_window(0, (WIDTH - 1) as u8, 0, (PAGES - 1) as u8),
        )?;

        match frame {
            Some(frame) => {
                for chunk in frame[..FRAME_SIZE].chunks(CHUNK_SIZE) {
                    Self::send_data_on(interface, chunk)?;
                }
            }
            None => {
                let mut remaining = FRAME_SIZE;
                while remaining > 0 {
                    let n = remaining.min(CHUNK_SIZE);
                    Self::send_data_on(interface, &ZERO_CHUNK[..n])?;
                    remaining -= n;
                }
            }
        }

        // One yield per frame, not per chunk: enough to keep a cooperative
        // scheduler's watchdog fed without per-chunk overhead.
        interface.yield_now().map_err(Error::Interface)
    }

    fn send_commands_on(interface: &mut I, commands: &[u8]) -> DisplayResult<I> {
        interface.send_commands(commands).map_err(|e| {
            warn!("command write failed: {:?}", e);
            Error::Interface(e)
        })
    }

    fn send_data_on(interface: &mut I, data: &[u8]) -> DisplayResult<I> {
        interface.send_data(data).map_err(|e| {
            warn!("data write failed: {:?}", e);
            Error::Interface(e)
        })
    }
}

/// Transpose one 8x8 ASCII glyph into column-major page bytes.
///
/// The font table stores row bytes, LSB = leftmost pixel; the controller
/// wants one byte per column, bit 0 = top row. Bytes outside the table
/// (>= 0x80) come back blank.
fn glyph_columns(byte: u8) -> [u8; 8] {
    let mut columns = [0u8; 8];
    if let Some(glyph) = font8x8::legacy::BASIC_LEGACY.get(byte as usize) {
        for (row, &bits) in glyph.iter().enumerate() {
            for (col, column) in columns.iter_mut().enumerate() {
                if bits & (1 << col) != 0 {
                    *column |= 1 << row;
                }
            }
        }
    }
    columns
}
