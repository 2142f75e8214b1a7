//! Error types for the driver
//!
//! This module defines [`Error`], the result type of every operation that
//! touches the bus. The driver never retries mid-operation; retry policy
//! (e.g. bounded init attempts with a delay) belongs to the caller.
//!
//! A frame push that fails partway leaves the in-memory frame buffer
//! valid but the physical display contents undefined until the next full
//! push; callers needing a guaranteed-consistent screen must re-push after
//! any failure.

use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Bus transfer rejected or timed out
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`]
    /// implementation.
    Interface(I::Error),
    /// Bus transfer failed during the mandatory initialization sequence
    ///
    /// The display is not usable; the caller may retry `init` from scratch.
    Init(I::Error),
    /// Input buffer is too small for the operation
    ///
    /// Full-frame and XBM inputs must be at least
    /// [`FRAME_SIZE`](crate::FRAME_SIZE) bytes.
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::Init(e) => write!(f, "Initialization failed: {e:?}"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}
