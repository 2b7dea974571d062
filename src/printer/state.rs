//! Mutable printer state tracked by the driver.

use std::time::Duration;

use super::config::PrinterConfig;
use crate::protocol::commands::LF;

/// Everything the driver knows about where the print head is and how long
/// the hardware still needs before it can take another byte.
///
/// Owned by [`super::PrinterDriver`]; callers only ever see it through a
/// shared reference.
#[derive(Debug, Clone, PartialEq)]
pub struct PrinterState {
    /// Time to clock out one byte. Fixed for the driver's lifetime.
    pub byte_time: Duration,
    /// Time to wait before the next transport write
    pub pending_delay: Duration,
    /// Last byte printed, with wraps recorded as `LF`
    pub prev_byte: u8,
    /// Current column, always in `0..=max_column`
    pub column: u8,
    pub max_column: u8,
    pub char_height: u8,
    pub line_spacing: u8,
    pub barcode_height: u8,
    /// Microseconds per printed dot-row
    pub dot_print_time: u32,
    /// Microseconds per fed dot-row
    pub dot_feed_time: u32,
}

impl PrinterState {
    pub fn new(config: &PrinterConfig) -> Self {
        Self {
            byte_time: config.byte_time(),
            pending_delay: Duration::ZERO,
            prev_byte: LF,
            column: 0,
            max_column: config.max_column,
            char_height: config.char_height,
            line_spacing: config.line_spacing,
            barcode_height: config.barcode_height,
            dot_print_time: config.dot_print_time,
            dot_feed_time: config.dot_feed_time,
        }
    }

    /// Return to the configured defaults. `byte_time` and `pending_delay`
    /// are left alone: the first is fixed and the second still describes
    /// the hardware.
    pub fn restore_defaults(&mut self, config: &PrinterConfig) {
        *self = Self {
            byte_time: self.byte_time,
            pending_delay: self.pending_delay,
            ..Self::new(config)
        };
    }

    /// Extra time the hardware needs after a line ends, on top of the byte
    /// itself.
    ///
    /// A line ending right after another line ending is blank and only
    /// feeds paper; otherwise the whole character height is printed first.
    pub fn line_end_wait(&self) -> Duration {
        let micros = if self.prev_byte == LF {
            (self.char_height as u64 + self.line_spacing as u64) * self.dot_feed_time as u64
        } else {
            self.char_height as u64 * self.dot_print_time as u64
                + self.line_spacing as u64 * self.dot_feed_time as u64
        };
        Duration::from_micros(micros)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_config() {
        let state = PrinterState::new(&PrinterConfig::ADAFRUIT);
        assert_eq!(state.prev_byte, LF);
        assert_eq!(state.column, 0);
        assert_eq!(state.max_column, 32);
        assert_eq!(state.char_height, 24);
        assert_eq!(state.line_spacing, 8);
        assert_eq!(state.barcode_height, 50);
        assert_eq!(state.pending_delay, Duration::ZERO);
    }

    #[test]
    fn test_restore_defaults_keeps_timing() {
        let config = PrinterConfig::ADAFRUIT;
        let mut state = PrinterState::new(&config);
        state.column = 17;
        state.prev_byte = b'x';
        state.dot_feed_time = 1;
        state.dot_print_time = 1;
        state.pending_delay = Duration::from_millis(3);

        state.restore_defaults(&config);

        assert_eq!(state.column, 0);
        assert_eq!(state.prev_byte, LF);
        assert_eq!(state.dot_feed_time, 2100);
        assert_eq!(state.dot_print_time, 30000);
        assert_eq!(state.pending_delay, Duration::from_millis(3));
        assert_eq!(state.byte_time, config.byte_time());
    }

    #[test]
    fn test_blank_line_wait() {
        let state = PrinterState::new(&PrinterConfig::ADAFRUIT);
        // (24 + 8) * 2100µs
        assert_eq!(state.line_end_wait(), Duration::from_micros(67_200));
    }

    #[test]
    fn test_printed_line_wait() {
        let mut state = PrinterState::new(&PrinterConfig::ADAFRUIT);
        state.prev_byte = b'A';
        // 24 * 30000µs + 8 * 2100µs
        assert_eq!(state.line_end_wait(), Duration::from_micros(736_800));
    }
}
