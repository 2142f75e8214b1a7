//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the
//! [`I2cInterface`] struct for communicating with the SSD1306 controller
//! over I2C.
//!
//! ## Hardware Requirements
//!
//! The SSD1306 in I2C mode needs only the bus itself (SDA + SCL). There is
//! no data/command pin; instead every transaction is prefixed with a
//! control byte selecting command or data interpretation. The controller
//! answers on a fixed 7-bit address (usually 0x3C), which the HAL shifts
//! left one bit on the wire per the standard addressing convention.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306_i2c::{DisplayInterface, I2cInterface, interface::DEFAULT_ADDRESS};
//! # use core::convert::Infallible;
//! # use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
//! # struct MockI2c;
//! # impl ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: SevenBitAddress,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! let mut interface = I2cInterface::new(MockI2c, DEFAULT_ADDRESS);
//!
//! // Send a command stream
//! let _ = interface.send_commands(&[0xAE]); // Display off
//!
//! // Send GDDRAM data
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::{I2c, Operation};

use crate::command::{CONTROL_CMD_STREAM, CONTROL_DATA_STREAM};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Default 7-bit I2C address of SSD1306 modules
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Trait for the byte-oriented command/data bus to the controller
///
/// This trait abstracts over different hardware hookups, allowing the
/// [`Display`](crate::display::Display) to work with anything that can
/// move a control byte plus payload to the controller as one atomic bus
/// transaction.
///
/// ## Implementing
///
/// For most cases, use the provided [`I2cInterface`]. Implement this trait
/// on your own type if the bus needs custom handling (e.g. a DMA queue or
/// an SPI hookup with a D/C pin).
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a command stream to the controller
    ///
    /// The implementation must deliver the command control byte followed by
    /// `commands` atomically as one bus transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write is rejected or times out.
    fn send_commands(&mut self, commands: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Send a GDDRAM data stream to the controller
    ///
    /// The implementation must deliver the data control byte followed by
    /// `data` atomically as one bus transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write is rejected or times out.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Hand control back to the scheduler
    ///
    /// Called once after each full-frame transfer so bulk writes cannot
    /// monopolize a cooperative scheduler slice. Must not touch the bus.
    /// Implementations without a scheduler hook may treat this as a no-op;
    /// ones that cannot service it at all should return
    /// [`InterfaceError::Unsupported`] (or their equivalent).
    ///
    /// # Errors
    ///
    /// Returns an error if the operation is unsupported.
    fn yield_now(&mut self) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over the underlying bus error type.
#[derive(Debug)]
pub enum InterfaceError<BusErr> {
    /// I2C communication error
    I2c(BusErr),
    /// The interface cannot service the requested operation
    Unsupported,
}

impl<BusErr: Debug> core::fmt::Display for InterfaceError<BusErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::I2c(e) => write!(f, "I2C error: {e:?}"),
            Self::Unsupported => write!(f, "Unsupported interface operation"),
        }
    }
}

impl<BusErr: Debug> core::error::Error for InterfaceError<BusErr> {}

/// Cooperative-yield hook for [`I2cInterface`]
///
/// Bridges the driver's once-per-frame yield point to whatever scheduler
/// the application runs under (RTOS task yield, executor wake, nothing).
pub trait CoopYield {
    /// Relinquish control to the scheduler
    fn yield_now(&mut self);
}

/// No-op [`CoopYield`] for bare-metal or single-task setups
#[derive(Debug, Default, Clone, Copy)]
pub struct NoYield;

impl CoopYield for NoYield {
    fn yield_now(&mut self) {}
}

impl<F: FnMut()> CoopYield for F {
    fn yield_now(&mut self) {
        self();
    }
}

/// Hardware interface implementation for SSD1306 over I2C
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 I2C buses. Each
/// send becomes a single I2C write transaction of control byte plus
/// payload, so the controller always sees the two together.
///
/// ## Type Parameters
///
/// * `I2C` - I2C bus implementing [`I2c`]
/// * `Y` - Scheduler hook implementing [`CoopYield`] (defaults to [`NoYield`])
pub struct I2cInterface<I2C, Y = NoYield> {
    /// I2C bus
    i2c: I2C,
    /// 7-bit device address
    address: u8,
    /// Scheduler hook for the per-frame yield point
    yielder: Y,
}

impl<I2C> I2cInterface<I2C, NoYield>
where
    I2C: I2c,
{
    /// Create a new interface with no scheduler hook
    ///
    /// # Arguments
    ///
    /// * `i2c` - I2C bus (must implement [`I2c`])
    /// * `address` - 7-bit device address, usually [`DEFAULT_ADDRESS`]
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            yielder: NoYield,
        }
    }
}

impl<I2C, Y> I2cInterface<I2C, Y>
where
    I2C: I2c,
    Y: CoopYield,
{
    /// Create a new interface with a scheduler hook
    ///
    /// The hook runs once per full-frame transfer; closures work directly:
    ///
    /// ```rust,no_run
    /// # use core::convert::Infallible;
    /// # use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
    /// # use ssd1306_i2c::{I2cInterface, interface::DEFAULT_ADDRESS};
    /// # struct MockI2c;
    /// # impl ErrorType for MockI2c { type Error = Infallible; }
    /// # impl I2c for MockI2c {
    /// #     fn transaction(
    /// #         &mut self,
    /// #         _address: SevenBitAddress,
    /// #         _operations: &mut [Operation<'_>],
    /// #     ) -> Result<(), Self::Error> {
    /// #         Ok(())
    /// #     }
    /// # }
    /// let interface = I2cInterface::with_yield(MockI2c, DEFAULT_ADDRESS, || {
    ///     // e.g. rtos::task_yield()
    /// });
    /// ```
    pub fn with_yield(i2c: I2C, address: u8, yielder: Y) -> Self {
        Self {
            i2c,
            address,
            yielder,
        }
    }

    /// Get the configured 7-bit device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Consume the interface and release the I2C bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn write_stream(&mut self, control: u8, payload: &[u8]) -> Result<(), I2C::Error> {
        // Adjacent writes in one transaction share a single START/STOP,
        // so control byte and payload reach the controller atomically.
        self.i2c.transaction(
            self.address,
            &mut [Operation::Write(&[control]), Operation::Write(payload)],
        )
    }
}

impl<I2C, Y> DisplayInterface for I2cInterface<I2C, Y>
where
    I2C: I2c,
    I2C::Error: Debug,
    Y: CoopYield,
{
    type Error = InterfaceError<I2C::Error>;

    fn send_commands(&mut self, commands: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.write_stream(CONTROL_CMD_STREAM, commands)
            .map_err(InterfaceError::I2c)
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.write_stream(CONTROL_DATA_STREAM, data)
            .map_err(InterfaceError::I2c)
    }

    fn yield_now(&mut self) -> InterfaceResult<(), Self::Error> {
        self.yielder.yield_now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorType, SevenBitAddress};

    /// Records each I2C transaction as the flattened written bytes.
    #[derive(Debug, Default)]
    struct RecordingI2c {
        transactions: alloc::vec::Vec<alloc::vec::Vec<u8>>,
    }

    impl ErrorType for RecordingI2c {
        type Error = core::convert::Infallible;
    }

    impl I2c for RecordingI2c {
        fn transaction(
            &mut self,
            _address: SevenBitAddress,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            let mut written = alloc::vec::Vec::new();
            for op in operations.iter() {
                if let Operation::Write(bytes) = op {
                    written.extend_from_slice(bytes);
                }
            }
            self.transactions.push(written);
            Ok(())
        }
    }

    #[test]
    fn commands_are_prefixed_with_command_control_byte() {
        let mut interface = I2cInterface::new(RecordingI2c::default(), DEFAULT_ADDRESS);
        interface.send_commands(&[0xAE, 0xAF]).unwrap();

        let i2c = interface.release();
        assert_eq!(i2c.transactions, [[CONTROL_CMD_STREAM, 0xAE, 0xAF]]);
    }

    #[test]
    fn data_is_prefixed_with_data_control_byte() {
        let mut interface = I2cInterface::new(RecordingI2c::default(), DEFAULT_ADDRESS);
        interface.send_data(&[0x12, 0x34]).unwrap();

        let i2c = interface.release();
        assert_eq!(i2c.transactions, [[CONTROL_DATA_STREAM, 0x12, 0x34]]);
    }

    #[test]
    fn yield_invokes_hook_without_bus_traffic() {
        let mut count = 0u32;
        let mut interface =
            I2cInterface::with_yield(RecordingI2c::default(), DEFAULT_ADDRESS, || {
                count += 1;
            });
        interface.yield_now().unwrap();
        interface.yield_now().unwrap();

        let i2c = interface.release();
        assert!(i2c.transactions.is_empty());
        assert_eq!(count, 2);
    }
}
