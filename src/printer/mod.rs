//! # Printer Module
//!
//! This module provides the printer driver and its configuration.
//!
//! ## Modules
//!
//! - [`config`]: Printer timing, layout and heating settings
//! - [`state`]: Column and timing state tracked between writes
//! - [`delay`]: Blocking delay primitive
//! - [`driver`]: The paced byte writer

pub mod config;
pub mod delay;
pub mod driver;
pub mod state;

pub use config::{HeatingConfig, PrinterConfig, PrinterProfile};
pub use delay::{Delay, SimulatedDelay, SleepDelay};
pub use driver::PrinterDriver;
pub use state::PrinterState;
