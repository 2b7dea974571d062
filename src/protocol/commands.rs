//! # Thermal Printer Commands
//!
//! This module implements the command bytes used by TTL serial thermal
//! printers (Adafruit 597 / CSN-A2 and compatibles).
//!
//! ## Protocol Overview
//!
//! Commands are short byte sequences beginning with a prefix byte:
//! - Single byte: `LF`, the wake byte `0xFF`
//! - Two bytes: `ESC @`, `ESC 7`, `DC2 #`
//! - Prefix plus parameter: `ESC 3 n`, `GS h n`
//!
//! Parameters of the heating command (`ESC 7`) and the density command
//! (`DC2 #`) are sent as separate writes by the driver so that each one is
//! paced by the byte timing discipline.
//!
//! ## Reserved Byte
//!
//! `0x13` (DC3 / XOFF) collides with a printer control code. The driver
//! never transmits it as printable data; see [`is_reserved`].

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte, also used as a no-op during wake
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Barcode command prefix
pub const GS: u8 = 0x1D;

/// DC2 (Device Control 2) - Print density command prefix
pub const DC2: u8 = 0x12;

/// DC3 (Device Control 3) - Reserved, dropped when printed as data
pub const DC3: u8 = 0x13;

/// LF (Line Feed) - Print the line buffer and advance one line
pub const LF: u8 = 0x0A;

/// Wake byte sent before the no-op train of the wake sequence
pub const WAKE: u8 = 0xFF;

/// Number of no-op bytes following the wake byte
pub const WAKE_NOP_COUNT: usize = 10;

/// Minimum line height in dots (one character row)
pub const MIN_LINE_HEIGHT: u8 = 24;

// ============================================================================
// WAKE / RESET
// ============================================================================

/// # Wake Byte (0xFF)
///
/// First byte of the wake-from-sleep sequence.
///
/// ```
/// use thermal_ttl::protocol::commands;
///
/// assert_eq!(commands::wake(), vec![0xFF]);
/// ```
#[inline]
pub fn wake() -> Vec<u8> {
    vec![WAKE]
}

/// # No-op (ESC)
///
/// A lone ESC is ignored by the printer. The wake sequence sends ten of
/// these, spaced out, to give the print mechanism time to power up.
#[inline]
pub fn nop() -> Vec<u8> {
    vec![ESC]
}

/// # Reset Printer (ESC @)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ```
/// use thermal_ttl::protocol::commands;
///
/// assert_eq!(commands::reset(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn reset() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// HEATING / DENSITY
// ============================================================================

/// # Heating Configuration Prefix (ESC 7)
///
/// | Format  | Bytes                             |
/// |---------|-----------------------------------|
/// | ASCII   | ESC 7 n1 n2 n3                    |
/// | Hex     | 1B 37 n1 n2 n3                    |
///
/// Followed by three single-byte parameters, in order:
///
/// - `n1` dots: maximum heating dots, in units of 8 dots (default 20 = 160 dots)
/// - `n2` heat time: in units of 10µs (default 255)
/// - `n3` interval: heating interval in units of 10µs (default 250)
///
/// More heating dots prints faster but draws more current; longer heat
/// time gives darker output at lower speed.
#[inline]
pub fn heating_prefix() -> Vec<u8> {
    vec![ESC, b'7']
}

/// # Print Density Prefix (DC2 #)
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | DC2 # n  |
/// | Hex     | 12 23 n  |
///
/// Followed by one byte built by [`density_byte`].
#[inline]
pub fn density_prefix() -> Vec<u8> {
    vec![DC2, b'#']
}

/// Pack the print density parameter byte.
///
/// Bits 5-7 hold the break time, bits 0-4 the density. Break time bits
/// beyond the byte are discarded.
///
/// ```
/// use thermal_ttl::protocol::commands::density_byte;
///
/// assert_eq!(density_byte(14, 4), 0x8E); // (4 << 5) | 14
/// ```
#[inline]
pub const fn density_byte(density: u8, break_time: u8) -> u8 {
    (break_time << 5) | density
}

// ============================================================================
// LAYOUT
// ============================================================================

/// # Set Line Height (ESC 3 n)
///
/// Sets the full line height in dots. Values below [`MIN_LINE_HEIGHT`] are
/// raised to it, since a line can't be shorter than a character.
#[inline]
pub fn line_height(n: u8) -> Vec<u8> {
    vec![ESC, b'3', n.max(MIN_LINE_HEIGHT)]
}

/// # Set Barcode Height (GS h n)
///
/// Barcode height in dots, minimum 1.
#[inline]
pub fn barcode_height(n: u8) -> Vec<u8> {
    vec![GS, b'h', n.max(1)]
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Whether a byte must never be printed as data
#[inline]
pub const fn is_reserved(byte: u8) -> bool {
    byte == DC3
}

// ============================================================================
// TESTS
// ============================================================================
