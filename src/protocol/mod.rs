//! # TTL Thermal Printer Protocol
//!
//! This module provides low-level command builders for the ESC/POS-style
//! command set spoken by small TTL serial thermal printers (the Adafruit
//! "mini thermal receipt printer" family and its CSN-A2 clones).
//!
//! ## Module Structure
//!
//! - [`commands`]: Wake, reset, heating and density configuration, line and
//!   barcode height
//!
//! ## Usage Example
//!
//! ```
//! use thermal_ttl::protocol::commands;
//!
//! let mut data = Vec::new();
//! data.extend(commands::reset());
//! data.extend(commands::heating_prefix());
//! data.extend([20u8, 255, 250]);
//! assert_eq!(data, vec![0x1B, 0x40, 0x1B, 0x37, 20, 255, 250]);
//! ```
//!
//! Builders only produce bytes. Pacing them onto the wire is the job of
//! [`crate::printer::PrinterDriver`], since these printers have no flow
//! control acknowledgment.

pub mod commands;
