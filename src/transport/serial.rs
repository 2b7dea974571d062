//! # Serial TTY Transport
//!
//! This module drives a thermal printer wired to a TTY device: a USB-TTL
//! adapter (`/dev/ttyUSB0`), a board's UART (`/dev/ttyAMA0`, `/dev/serial0`)
//! or anything else that shows up as a character device.
//!
//! ## TTY Configuration
//!
//! The device is opened in raw mode so bytes reach the printer unmodified:
//!
//! - **No input processing**: IGNBRK, BRKINT, PARMRK, ISTRIP, INLCR, IGNCR, ICRNL off
//! - **No software flow control**: IXON, IXOFF, IXANY off
//! - **No output processing**: OPOST off (no CR/LF translation)
//! - **8N1**: CS8, no parity, one stop bit
//! - **No echo, non-canonical**: ECHO, ECHONL, ICANON, ISIG, IEXTEN off
//!
//! Output and input speed are both set to the requested baud rate.
//!
//! ## Wiring
//!
//! ```text
//! printer RX  <-  adapter TX
//! printer GND --  adapter GND
//! ```
//!
//! The printer's TX line is not needed; it never acknowledges anything.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::io::AsRawFd;
use std::path::Path;

use super::{DEFAULT_DEVICE, Transport};
use crate::error::ThermalError;

/// Baud rates the TTY layer can be configured for
pub const SUPPORTED_BAUD_RATES: &[u32] = &[2400, 4800, 9600, 19200, 38400, 57600, 115200];

/// # Serial Printer Transport
///
/// ## Example
///
/// ```no_run
/// use thermal_ttl::transport::{SerialTransport, Transport};
/// use thermal_ttl::protocol::commands;
///
/// let mut transport = SerialTransport::open("/dev/ttyUSB0", 19200)?;
/// transport.transmit(&commands::reset())?;
/// # Ok::<(), thermal_ttl::ThermalError>(())
/// ```
pub struct SerialTransport {
    file: File,
    baud_rate: u32,
}

impl SerialTransport {
    /// Open a serial device and configure it for raw 8N1 at `baud_rate`.
    ///
    /// ## Errors
    ///
    /// - [`ThermalError::UnsupportedBaud`] if `baud_rate` is not in
    ///   [`SUPPORTED_BAUD_RATES`]
    /// - [`ThermalError::Transport`] if the device can't be opened (missing,
    ///   or permission denied: the user may need the dialout group) or the
    ///   TTY configuration fails
    pub fn open<P: AsRef<Path>>(device: P, baud_rate: u32) -> Result<Self, ThermalError> {
        let path = device.as_ref();
        let speed = speed_for_baud(baud_rate)?;

        let file = OpenOptions::new().write(true).open(path).map_err(|e| {
            ThermalError::Transport(format!("Failed to open {}: {}", path.display(), e))
        })?;

        configure_tty_raw(file.as_raw_fd(), speed)?;
        tracing::debug!(device = %path.display(), baud_rate, "serial device opened");

        Ok(Self { file, baud_rate })
    }

    /// Open the default device (/dev/ttyUSB0)
    pub fn open_default(baud_rate: u32) -> Result<Self, ThermalError> {
        Self::open(DEFAULT_DEVICE, baud_rate)
    }

    pub fn baud_rate(&self) -> u32 {
        self.baud_rate
    }
}

impl Transport for SerialTransport {
    fn transmit(&mut self, bytes: &[u8]) -> Result<(), ThermalError> {
        self.file
            .write_all(bytes)
            .map_err(|e| ThermalError::Transport(format!("Write failed: {}", e)))?;
        self.file
            .flush()
            .map_err(|e| ThermalError::Transport(format!("Flush failed: {}", e)))
    }
}

/// Map a numeric baud rate to its termios speed constant.
fn speed_for_baud(baud_rate: u32) -> Result<libc::speed_t, ThermalError> {
    let speed = match baud_rate {
        2400 => libc::B2400,
        4800 => libc::B4800,
        9600 => libc::B9600,
        19200 => libc::B19200,
        38400 => libc::B38400,
        57600 => libc::B57600,
        115200 => libc::B115200,
        other => return Err(ThermalError::UnsupportedBaud(other)),
    };
    Ok(speed)
}

/// Configure a file descriptor for raw 8N1 TTY mode at `speed`.
///
/// IXON/IXOFF/IXANY must be off: with software flow control enabled the
/// line discipline would swallow 0x11 and 0x13 bytes in command parameters.
fn configure_tty_raw(fd: i32, speed: libc::speed_t) -> Result<(), ThermalError> {
    use std::mem::MaybeUninit;

    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(ThermalError::Transport(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);

    termios.c_oflag &= !libc::OPOST;

    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);

    // 8N1, receiver on, ignore modem control lines
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB | libc::CSTOPB);
    termios.c_cflag |= libc::CS8 | libc::CREAD | libc::CLOCAL;

    let result = unsafe {
        libc::cfsetispeed(&mut termios, speed) | libc::cfsetospeed(&mut termios, speed)
    };
    if result != 0 {
        return Err(ThermalError::Transport(format!(
            "cfsetspeed failed: {}",
            io::Error::last_os_error()
        )));
    }

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(ThermalError::Transport(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_device_path() {
        assert_eq!(DEFAULT_DEVICE, "/dev/ttyUSB0");
    }

    #[test]
    fn test_supported_baud_rates_map() {
        for &baud in SUPPORTED_BAUD_RATES {
            assert!(speed_for_baud(baud).is_ok(), "baud {} should map", baud);
        }
        assert_eq!(speed_for_baud(19200).unwrap(), libc::B19200);
    }

    #[test]
    fn test_unsupported_baud() {
        assert!(matches!(
            speed_for_baud(12345),
            Err(ThermalError::UnsupportedBaud(12345))
        ));
    }

    #[test]
    fn test_open_unsupported_baud_fails_before_open() {
        let err = SerialTransport::open("/nonexistent/tty", 1).err().unwrap();
        assert!(matches!(err, ThermalError::UnsupportedBaud(1)));
    }

    #[test]
    fn test_open_missing_device() {
        let err = SerialTransport::open("/nonexistent/tty", 19200).err().unwrap();
        assert!(matches!(err, ThermalError::Transport(_)));
    }

    // Writing to a real printer requires hardware; exercise it manually.
}
