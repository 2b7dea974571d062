//! # Printer Driver
//!
//! Paces bytes onto the transport so a printer without flow control never
//! receives data faster than it can print it.
//!
//! ## Timing Model
//!
//! Every write first blocks for `pending_delay`, the time the hardware still
//! needs for whatever it was sent last, then transmits, then computes the
//! next `pending_delay`:
//!
//! | Last write | Next delay |
//! |------------|------------|
//! | raw command bytes | `byte_time * len` |
//! | printable byte mid-line | `byte_time` |
//! | line end after text | `byte_time + char_height * dot_print_time + line_spacing * dot_feed_time` |
//! | line end after a line end | `byte_time + (char_height + line_spacing) * dot_feed_time` |
//! | wake no-op | 500ms |
//!
//! A line ends on `LF` or when the byte fills the last column. Either way
//! the column returns to 0 and the line end is remembered as `LF`, so a run
//! of wraps is timed like a run of newlines.
//!
//! ## Errors
//!
//! Transport failures propagate unchanged and nothing is rolled back. After
//! an error the timing state no longer matches the hardware; call
//! [`PrinterDriver::reset`] to resynchronise.

use std::time::Duration;

use tracing::{debug, trace};

use super::config::{HeatingConfig, PrinterConfig};
use super::delay::{Delay, SleepDelay};
use super::state::PrinterState;
use crate::error::ThermalError;
use crate::protocol::commands::{self, LF, MIN_LINE_HEIGHT, WAKE_NOP_COUNT};
use crate::transport::Transport;

/// Delay the driver starts from when beginning the heating handshake
pub const STARTUP_DELAY: Duration = Duration::from_millis(500);

/// Spacing between wake no-op bytes
pub const WAKE_INCREMENT: Duration = Duration::from_millis(500);

/// # Thermal Printer Driver
///
/// Owns the transport exclusively. All operations block the calling thread;
/// callers who need non-blocking printing should run the driver on its own
/// worker thread.
///
/// ## Example
///
/// ```no_run
/// use thermal_ttl::printer::{HeatingConfig, PrinterDriver};
/// use thermal_ttl::transport::SerialTransport;
///
/// let transport = SerialTransport::open("/dev/ttyUSB0", 19200)?;
/// let mut printer = PrinterDriver::new(transport);
///
/// printer.configure_heating(&HeatingConfig::default())?;
/// printer.println("Hello, world!")?;
/// printer.feed(3)?;
/// # Ok::<(), thermal_ttl::ThermalError>(())
/// ```
pub struct PrinterDriver<T, D = SleepDelay> {
    transport: T,
    delay: D,
    config: PrinterConfig,
    state: PrinterState,
}

impl<T: Transport> PrinterDriver<T> {
    /// Driver for the default 19200 baud printer. Sends nothing.
    pub fn new(transport: T) -> Self {
        let config = PrinterConfig::default();
        Self {
            transport,
            delay: SleepDelay,
            state: PrinterState::new(&config),
            config,
        }
    }

    /// Driver for a printer at `baud_rate`, other settings default.
    pub fn with_baud(transport: T, baud_rate: u32) -> Result<Self, ThermalError> {
        Self::with_config(
            transport,
            PrinterConfig {
                baud_rate,
                ..PrinterConfig::default()
            },
        )
    }

    pub fn with_config(transport: T, config: PrinterConfig) -> Result<Self, ThermalError> {
        PrinterDriver::with_delay(transport, config, SleepDelay)
    }
}

impl<T: Transport, D: Delay> PrinterDriver<T, D> {
    /// Driver with a custom delay primitive, e.g. [`super::SimulatedDelay`].
    pub fn with_delay(transport: T, config: PrinterConfig, delay: D) -> Result<Self, ThermalError> {
        config.validate()?;
        Ok(Self {
            transport,
            delay,
            state: PrinterState::new(&config),
            config,
        })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn state(&self) -> &PrinterState {
        &self.state
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    #[inline]
    pub fn byte_time(&self) -> Duration {
        self.state.byte_time
    }

    #[inline]
    pub fn pending_delay(&self) -> Duration {
        self.state.pending_delay
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    pub fn into_parts(self) -> (T, D) {
        (self.transport, self.delay)
    }

    // ========================================================================
    // PRIMITIVES
    // ========================================================================

    /// Send raw bytes, typically commands.
    ///
    /// Waits out the pending delay, transmits `bytes` as one write, then
    /// leaves a pending delay equal to the time the line needs to clock
    /// them out. Bytes are sent verbatim, including `0x13`.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), ThermalError> {
        self.delay.delay(self.state.pending_delay);
        self.transport.transmit(bytes)?;

        self.state.pending_delay = u32::try_from(bytes.len())
            .map_or(Duration::MAX, |n| self.state.byte_time.saturating_mul(n));
        trace!(
            len = bytes.len(),
            pending_us = self.state.pending_delay.as_micros() as u64,
            "bytes written"
        );
        Ok(())
    }

    /// Print one byte, tracking column and line timing.
    ///
    /// `0x13` is silently dropped: nothing is sent and no state changes.
    pub fn write(&mut self, byte: u8) -> Result<(), ThermalError> {
        if commands::is_reserved(byte) {
            trace!("dropping reserved byte 0x13");
            return Ok(());
        }

        self.write_bytes(&[byte])?;

        let mut byte = byte;
        let wait = if byte == LF || self.state.column + 1 >= self.state.max_column {
            let wait = self.state.line_end_wait();
            if byte != LF {
                debug!(column = self.state.column, "line full, wrapping");
            }
            self.state.column = 0;
            byte = LF;
            wait
        } else {
            self.state.column += 1;
            Duration::ZERO
        };

        self.state.pending_delay = self.state.byte_time + wait;
        self.state.prev_byte = byte;
        Ok(())
    }

    // ========================================================================
    // HARDWARE SEQUENCES
    // ========================================================================

    /// Wake the printer from sleep.
    ///
    /// Sends `0xFF`, then ten `ESC` no-ops spaced [`WAKE_INCREMENT`] apart,
    /// about five seconds in total.
    pub fn wake(&mut self) -> Result<(), ThermalError> {
        debug!("waking printer");
        self.state.pending_delay = Duration::ZERO;
        self.write_bytes(&commands::wake())?;
        for _ in 0..WAKE_NOP_COUNT {
            self.write_bytes(&commands::nop())?;
            self.state.pending_delay = WAKE_INCREMENT;
        }
        Ok(())
    }

    /// Restore the configured defaults and send `ESC @`.
    pub fn reset(&mut self) -> Result<(), ThermalError> {
        debug!("resetting printer");
        self.state.restore_defaults(&self.config);
        self.write_bytes(&commands::reset())
    }

    /// Startup handshake: wake, reset, heating parameters, print density.
    ///
    /// Byte layout on the wire:
    ///
    /// ```text
    /// FF 1B*10          wake
    /// 1B 40             reset
    /// 1B 37 | dots | heat_time | interval
    /// 12 23 | (break_time << 5) | density
    /// ```
    pub fn configure_heating(&mut self, heating: &HeatingConfig) -> Result<(), ThermalError> {
        self.state.pending_delay = STARTUP_DELAY;
        self.wake()?;
        self.reset()?;

        debug!(
            dots = heating.dots,
            heat_time = heating.heat_time,
            interval = heating.interval,
            "configuring heating"
        );
        self.write_bytes(&commands::heating_prefix())?;
        self.write_bytes(&[heating.dots])?;
        self.write_bytes(&[heating.heat_time])?;
        self.write_bytes(&[heating.interval])?;

        debug!(
            density = heating.density,
            break_time = heating.break_time,
            "configuring print density"
        );
        self.write_bytes(&commands::density_prefix())?;
        self.write_bytes(&[commands::density_byte(heating.density, heating.break_time)])?;

        self.state.dot_feed_time = self.config.dot_feed_time;
        self.state.dot_print_time = self.config.dot_print_time;
        Ok(())
    }

    // ========================================================================
    // TEXT AND LAYOUT
    // ========================================================================

    /// Print every byte of `text` through [`Self::write`].
    pub fn print_text(&mut self, text: &str) -> Result<(), ThermalError> {
        text.bytes().try_for_each(|b| self.write(b))
    }

    pub fn println(&mut self, text: &str) -> Result<(), ThermalError> {
        self.print_text(text)?;
        self.write(LF)
    }

    /// Advance the paper by `lines` line feeds.
    pub fn feed(&mut self, lines: u8) -> Result<(), ThermalError> {
        (0..lines).try_for_each(|_| self.write(LF))
    }

    /// Set the full line height in dots (minimum 24).
    pub fn set_line_height(&mut self, height: u8) -> Result<(), ThermalError> {
        let height = height.max(MIN_LINE_HEIGHT);
        self.state.line_spacing = height.saturating_sub(self.state.char_height);
        self.write_bytes(&commands::line_height(height))
    }

    /// Set the barcode height in dots (minimum 1).
    pub fn set_barcode_height(&mut self, height: u8) -> Result<(), ThermalError> {
        let height = height.max(1);
        self.state.barcode_height = height;
        self.write_bytes(&commands::barcode_height(height))
    }
}

// ============================================================================
// TESTS
// ============================================================================
