//! # thermal-ttl - TTL Thermal Printer Driver
//!
//! thermal-ttl drives small TTL serial thermal receipt printers (Adafruit
//! mini thermal printer, CSN-A2 and clones) from a host program. It
//! provides:
//!
//! - **Protocol implementation**: wake, reset, heating and density commands
//! - **Paced driver**: blocks between writes so the printer, which has no
//!   flow control, is never sent data faster than it can print
//! - **Transport**: raw-mode serial TTY, any `io::Write`, and a mock
//!
//! ## Quick Start
//!
//! ```no_run
//! use thermal_ttl::{
//!     printer::{HeatingConfig, PrinterDriver},
//!     transport::SerialTransport,
//! };
//!
//! // Open connection to printer
//! let transport = SerialTransport::open("/dev/ttyUSB0", 19200)?;
//! let mut printer = PrinterDriver::new(transport);
//!
//! // Wake, reset and send heating parameters (takes ~5 seconds)
//! printer.configure_heating(&HeatingConfig::default())?;
//!
//! printer.println("Hello from Rust")?;
//! printer.feed(2)?;
//!
//! # Ok::<(), thermal_ttl::error::ThermalError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | Command byte builders |
//! | [`printer`] | Driver, state and configuration |
//! | [`transport`] | Communication backends |
//! | [`error`] | Error types |
//!
//! ## Supported Printers
//!
//! Currently tested with:
//! - Adafruit Mini Thermal Receipt Printer (product 597, 58mm, 19200 baud)

pub mod error;
pub mod printer;
pub mod protocol;
pub mod transport;

// Re-exports for convenience
pub use error::ThermalError;
pub use printer::{PrinterConfig, PrinterDriver};
pub use transport::Transport;
