//! # Printer Configuration
//!
//! This module defines the timing and layout characteristics of a TTL
//! thermal printer, plus the heating parameters sent at startup.
//!
//! ## Supported Printers
//!
//! | Model | Baud | Columns | Char height | Line spacing |
//! |-------|------|---------|-------------|--------------|
//! | Adafruit 597 (CSN-A2) | 19200 | 32 | 24 dots | 8 dots |
//!
//! A few units ship configured for 9600 baud; set `baud_rate` accordingly.
//!
//! ## Usage
//!
//! ```
//! use thermal_ttl::printer::PrinterConfig;
//!
//! let config = PrinterConfig::ADAFRUIT;
//! assert_eq!(config.max_column, 32);
//! assert!((config.byte_time().as_secs_f64() - 11.0 / 19200.0).abs() < 1e-9);
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ThermalError;

/// Bits clocked per byte: start, 8 data, stop, plus one idle bit
pub const BITS_PER_BYTE: f64 = 11.0;

/// # Printer Configuration
///
/// Timing constants are in microseconds:
///
/// - **dot_print_time**: time to heat and print one dot-row
/// - **dot_feed_time**: time to feed one blank dot-row
///
/// ## Line Timing
///
/// ```text
/// printed line = char_height * dot_print_time + line_spacing * dot_feed_time
///              = 24 * 30000µs + 8 * 2100µs ≈ 737ms
/// blank line   = (char_height + line_spacing) * dot_feed_time
///              = 32 * 2100µs ≈ 67ms
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterConfig {
    /// Serial line speed
    pub baud_rate: u32,

    /// Characters per line before the printer wraps
    pub max_column: u8,

    /// Character height in dot-rows
    pub char_height: u8,

    /// Gap between lines in dot-rows
    pub line_spacing: u8,

    /// Barcode height in dots
    pub barcode_height: u8,

    /// Microseconds to print one dot-row
    pub dot_print_time: u32,

    /// Microseconds to feed one blank dot-row
    pub dot_feed_time: u32,
}

impl PrinterConfig {
    /// # Adafruit Mini Thermal Printer
    ///
    /// 58mm paper, 384 dots, 32 columns of the default 12x24 font.
    pub const ADAFRUIT: Self = Self {
        baud_rate: 19200,
        max_column: 32,
        char_height: 24,
        line_spacing: 8,
        barcode_height: 50,
        dot_print_time: 30000,
        dot_feed_time: 2100,
    };

    /// Time to clock one byte out at `baud_rate`.
    #[inline]
    pub fn byte_time(&self) -> Duration {
        Duration::from_secs_f64(BITS_PER_BYTE / self.baud_rate as f64)
    }

    /// Check the values the driver's arithmetic depends on.
    pub fn validate(&self) -> Result<(), ThermalError> {
        if self.baud_rate == 0 {
            return Err(ThermalError::Config("baud_rate must be non-zero".into()));
        }
        if self.max_column == 0 {
            return Err(ThermalError::Config("max_column must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::ADAFRUIT
    }
}

// ============================================================================
// HEATING
// ============================================================================

/// Heating and density parameters sent once at startup.
///
/// See [`crate::protocol::commands::heating_prefix`] for units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatingConfig {
    pub heat_time: u8,
    pub dots: u8,
    pub interval: u8,
    pub density: u8,
    pub break_time: u8,
}

impl Default for HeatingConfig {
    fn default() -> Self {
        Self {
            heat_time: 255,
            dots: 20,
            interval: 250,
            density: 14,
            break_time: 4,
        }
    }
}

// ============================================================================
// PROFILE
// ============================================================================

/// A printer profile as stored on disk.
///
/// ```json
/// {
///   "printer": { "baud_rate": 9600 },
///   "heating": { "heat_time": 120, "density": 10 }
/// }
/// ```
///
/// Missing fields take their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterProfile {
    pub printer: PrinterConfig,
    pub heating: HeatingConfig,
}

impl PrinterProfile {
    /// Parse and validate a profile from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ThermalError> {
        let profile: Self = serde_json::from_str(json)?;
        profile.printer.validate()?;
        Ok(profile)
    }

    /// Load a profile from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ThermalError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
