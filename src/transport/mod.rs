//! # Printer Transport Layer
//!
//! This module provides byte-stream backends the driver writes to.
//!
//! ## Available Transports
//!
//! - [`serial`]: TTY serial device in raw mode (USB-TTL adapter, UART)
//! - [`writer`]: Any [`std::io::Write`], e.g. a file dump or stdout
//! - [`mock`]: In-memory recorder for tests
//!
//! A transport must deliver bytes in order and unmodified, and is assumed to
//! be the only writer on the line while the driver owns it.

pub mod mock;
#[cfg(unix)]
pub mod serial;
pub mod writer;

pub use mock::MockTransport;
#[cfg(unix)]
pub use serial::SerialTransport;
pub use writer::WriterTransport;

use crate::error::ThermalError;

/// Default serial device path
pub const DEFAULT_DEVICE: &str = "/dev/ttyUSB0";

/// Byte sink for printer data.
pub trait Transport {
    /// Send `bytes` in order as a single write.
    fn transmit(&mut self, bytes: &[u8]) -> Result<(), ThermalError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn transmit(&mut self, bytes: &[u8]) -> Result<(), ThermalError> {
        (**self).transmit(bytes)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn transmit(&mut self, bytes: &[u8]) -> Result<(), ThermalError> {
        (**self).transmit(bytes)
    }
}
