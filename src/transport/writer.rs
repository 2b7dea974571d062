//! Transport over any [`std::io::Write`].
//!
//! Useful for capturing the exact byte stream to a file, or piping it to
//! another program that owns the serial line.

use std::io::Write;

use super::Transport;
use crate::error::ThermalError;

/// Writes and flushes each transmit to the wrapped writer.
#[derive(Debug)]
pub struct WriterTransport<W> {
    inner: W,
}

impl<W: Write> WriterTransport<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Transport for WriterTransport<W> {
    fn transmit(&mut self, bytes: &[u8]) -> Result<(), ThermalError> {
        self.inner
            .write_all(bytes)
            .map_err(|e| ThermalError::Transport(format!("Write failed: {}", e)))?;
        self.inner
            .flush()
            .map_err(|e| ThermalError::Transport(format!("Flush failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_writes_to_vec() {
        let mut transport = WriterTransport::new(Vec::new());
        transport.transmit(&[0x1B, 0x40]).unwrap();
        transport.transmit(b"hi").unwrap();
        assert_eq!(transport.into_inner(), vec![0x1B, 0x40, b'h', b'i']);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_is_transport_error() {
        let mut transport = WriterTransport::new(BrokenPipe);
        let err = transport.transmit(b"x").unwrap_err();
        assert!(matches!(err, ThermalError::Transport(msg) if msg.contains("gone")));
    }
}
