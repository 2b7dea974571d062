//! # thermal-ttl CLI
//!
//! Command-line interface for TTL thermal receipt printers.
//!
//! ## Usage
//!
//! ```bash
//! # Wake, reset and configure heating (run once after power-up)
//! thermal-ttl init
//!
//! # Darker, slower printing
//! thermal-ttl init --heat-time 200 --density 20
//!
//! # Print a line of text
//! thermal-ttl print "Hello, world!"
//!
//! # Feed three lines
//! thermal-ttl feed 3
//!
//! # Capture the byte stream instead of printing
//! thermal-ttl --dump out.bin print --init "test"
//! ```
//!
//! Logging is controlled by `RUST_LOG` (default `info`).

use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use thermal_ttl::{
    ThermalError,
    printer::{Delay, HeatingConfig, PrinterDriver, PrinterProfile, SimulatedDelay},
    transport::{DEFAULT_DEVICE, Transport, WriterTransport},
};

/// thermal-ttl - TTL thermal receipt printer utility
#[derive(Parser, Debug)]
#[command(name = "thermal-ttl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Printer serial device path
    #[arg(long, global = true, default_value = DEFAULT_DEVICE)]
    device: PathBuf,

    /// Baud rate (overrides the profile)
    #[arg(long, global = true)]
    baud: Option<u32>,

    /// JSON printer profile
    #[arg(long, global = true, value_name = "FILE")]
    profile: Option<PathBuf>,

    /// Write the byte stream to a file instead of the printer
    #[arg(long, global = true, value_name = "FILE")]
    dump: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Wake, reset and send heating and density settings
    Init(HeatingArgs),

    /// Wake the printer from sleep
    Wake,

    /// Reset the printer to its defaults
    Reset,

    /// Print a line of text
    Print {
        /// Text to print
        text: String,

        /// Run the init handshake first
        #[arg(long)]
        init: bool,
    },

    /// Feed blank lines
    Feed {
        /// Number of lines
        #[arg(default_value = "1")]
        lines: u8,
    },
}

/// Heating overrides; unset values come from the profile
#[derive(Args, Debug, Default)]
struct HeatingArgs {
    /// Heating time, units of 10µs
    #[arg(long)]
    heat_time: Option<u8>,

    /// Max heating dots, units of 8 dots
    #[arg(long)]
    dots: Option<u8>,

    /// Heating interval, units of 10µs
    #[arg(long)]
    interval: Option<u8>,

    /// Print density (0-31)
    #[arg(long)]
    density: Option<u8>,

    /// Print break time (0-7)
    #[arg(long)]
    break_time: Option<u8>,
}

impl HeatingArgs {
    fn apply(&self, base: HeatingConfig) -> HeatingConfig {
        HeatingConfig {
            heat_time: self.heat_time.unwrap_or(base.heat_time),
            dots: self.dots.unwrap_or(base.dots),
            interval: self.interval.unwrap_or(base.interval),
            density: self.density.unwrap_or(base.density),
            break_time: self.break_time.unwrap_or(base.break_time),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ThermalError> {
    let mut profile = match &cli.profile {
        Some(path) => PrinterProfile::from_json_file(path)?,
        None => PrinterProfile::default(),
    };
    if let Some(baud) = cli.baud {
        profile.printer.baud_rate = baud;
    }

    if let Some(path) = &cli.dump {
        let file = File::create(path)?;
        let mut printer = PrinterDriver::with_delay(
            WriterTransport::new(file),
            profile.printer,
            SimulatedDelay::new(),
        )?;
        execute(&mut printer, &cli.command, &profile)?;
        info!(
            path = %path.display(),
            printer_time_ms = printer.delay().total().as_millis() as u64,
            "byte stream written"
        );
    } else {
        print_to_device(&cli, &profile)?;
    }

    Ok(())
}

/// Run the command against the real serial device.
#[cfg(unix)]
fn print_to_device(cli: &Cli, profile: &PrinterProfile) -> Result<(), ThermalError> {
    use thermal_ttl::transport::SerialTransport;

    let transport = SerialTransport::open(&cli.device, profile.printer.baud_rate)?;
    let mut printer = PrinterDriver::with_config(transport, profile.printer)?;
    execute(&mut printer, &cli.command, profile)?;
    info!("done");
    Ok(())
}

#[cfg(not(unix))]
fn print_to_device(_cli: &Cli, _profile: &PrinterProfile) -> Result<(), ThermalError> {
    Err(ThermalError::Transport(
        "Serial devices are not supported on this platform; use --dump".to_string(),
    ))
}

fn execute<T: Transport, D: Delay>(
    printer: &mut PrinterDriver<T, D>,
    command: &Commands,
    profile: &PrinterProfile,
) -> Result<(), ThermalError> {
    match command {
        Commands::Init(args) => {
            info!("initializing printer...");
            printer.configure_heating(&args.apply(profile.heating))?;
        }
        Commands::Wake => {
            info!("waking printer...");
            printer.wake()?;
        }
        Commands::Reset => printer.reset()?,
        Commands::Print { text, init } => {
            if *init {
                info!("initializing printer...");
                printer.configure_heating(&profile.heating)?;
            }
            printer.println(text)?;
        }
        Commands::Feed { lines } => printer.feed(*lines)?,
    }
    Ok(())
}
