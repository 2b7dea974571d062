//! # Driver Wire Tests
//!
//! These tests drive the public API against a [`MockTransport`] and check
//! the exact sequence of writes the printer would receive, plus the delays
//! requested between them.
//!
//! Nothing here sleeps: [`SimulatedDelay`] records delays instead.

use pretty_assertions::assert_eq;
use std::time::Duration;

use thermal_ttl::ThermalError;
use thermal_ttl::printer::{HeatingConfig, PrinterConfig, PrinterDriver, SimulatedDelay};
use thermal_ttl::protocol::commands::LF;
use thermal_ttl::transport::{MockTransport, WriterTransport};

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

type TestDriver = PrinterDriver<MockTransport, SimulatedDelay>;

fn driver_with(config: PrinterConfig) -> TestDriver {
    PrinterDriver::with_delay(MockTransport::new(), config, SimulatedDelay::new()).unwrap()
}

fn driver() -> TestDriver {
    driver_with(PrinterConfig::default())
}

/// The eleven writes of the wake sequence.
fn wake_writes() -> Vec<Vec<u8>> {
    let mut writes = vec![vec![0xFF]];
    writes.extend(std::iter::repeat_n(vec![0x1B], 10));
    writes
}

const PRINTED_LINE: Duration = Duration::from_micros(24 * 30000 + 8 * 2100);
const BLANK_LINE: Duration = Duration::from_micros((24 + 8) * 2100);

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_byte_time_and_first_write() {
    let mut printer = driver();
    assert!((printer.byte_time().as_secs_f64() - 0.000573).abs() < 1e-6);

    printer.write_bytes(&[65]).unwrap();

    assert_eq!(printer.transport().writes(), &[vec![65]]);
    assert!((printer.pending_delay().as_secs_f64() - 0.000573).abs() < 1e-6);
}

#[test]
fn test_every_byte_but_dc3_is_forwarded_once() {
    let mut printer = driver();
    for b in 0..=255u8 {
        printer.write(b).unwrap();
    }

    let expected: Vec<Vec<u8>> = (0..=255u8)
        .filter(|&b| b != 0x13)
        .map(|b| vec![b])
        .collect();
    assert_eq!(printer.transport().writes(), expected.as_slice());
}

#[test]
fn test_dc3_leaves_state_untouched() {
    let mut printer = driver();
    printer.print_text("ab").unwrap();
    let state = printer.state().clone();

    printer.write(0x13).unwrap();

    assert_eq!(printer.state(), &state);
    assert_eq!(printer.transport().bytes(), b"ab".to_vec());
}

#[test]
fn test_thirty_two_columns_wrap() {
    let mut printer = driver();
    for i in 1..=31u8 {
        printer.write(b'A').unwrap();
        assert_eq!(printer.state().column, i);
    }

    printer.write(b'A').unwrap();

    assert_eq!(printer.state().column, 0);
    assert_eq!(printer.state().prev_byte, LF);
    assert_eq!(printer.pending_delay(), printer.byte_time() + PRINTED_LINE);
    assert_eq!(printer.transport().writes().len(), 32);
}

#[test]
fn test_consecutive_wraps_time_like_newlines() {
    let mut printer = driver_with(PrinterConfig {
        max_column: 1,
        ..PrinterConfig::default()
    });

    // With one column every byte ends a line; prev_byte starts as LF
    printer.write(b'A').unwrap();
    assert_eq!(printer.pending_delay(), printer.byte_time() + BLANK_LINE);
    printer.write(b'B').unwrap();
    assert_eq!(printer.pending_delay(), printer.byte_time() + BLANK_LINE);
    assert_eq!(printer.state().column, 0);
}

#[test]
fn test_println_then_blank_line_delays() {
    let mut printer = driver();
    printer.println("Hi").unwrap();
    printer.feed(1).unwrap();
    printer.write(b'x').unwrap();

    let byte = printer.byte_time();
    assert_eq!(
        printer.delay().requests(),
        &[
            Duration::ZERO,
            byte,
            byte,
            byte + PRINTED_LINE,
            byte + BLANK_LINE,
        ]
    );
    assert_eq!(printer.transport().bytes(), b"Hi\n\nx".to_vec());
}

#[test]
fn test_reset_from_any_state() {
    let mut printer = driver();
    printer.print_text("some text").unwrap();
    printer.set_line_height(48).unwrap();
    printer.set_barcode_height(100).unwrap();
    printer.transport_mut().clear();

    printer.reset().unwrap();

    let state = printer.state();
    assert_eq!(state.column, 0);
    assert_eq!(state.prev_byte, LF);
    assert_eq!(state.line_spacing, 8);
    assert_eq!(state.barcode_height, 50);
    assert_eq!(state.dot_feed_time, 2100);
    assert_eq!(state.dot_print_time, 30000);
    assert_eq!(printer.transport().writes(), &[vec![0x1B, 0x40]]);
}

#[test]
fn test_wake_emits_eleven_writes() {
    let mut printer = driver();
    printer.wake().unwrap();

    assert_eq!(printer.transport().writes(), wake_writes().as_slice());
    // Nine full increments between no-ops, plus the byte time after 0xFF
    assert_eq!(
        printer.delay().total(),
        printer.byte_time() + Duration::from_millis(500) * 9
    );
}

#[test]
fn test_configure_heating_defaults_wire_order() {
    let mut printer = driver();
    printer.configure_heating(&HeatingConfig::default()).unwrap();

    let mut expected = wake_writes();
    expected.extend([
        vec![0x1B, 0x40],
        vec![0x1B, 0x37],
        vec![20],
        vec![0xFF],
        vec![0xFA],
        vec![0x12, 0x23],
        vec![(4 << 5) | 14],
    ]);
    assert_eq!(printer.transport().writes(), expected.as_slice());
}

#[test]
fn test_configure_heating_custom_values() {
    let mut printer = driver();
    let heating = HeatingConfig {
        heat_time: 120,
        dots: 11,
        interval: 40,
        density: 10,
        break_time: 2,
    };
    printer.configure_heating(&heating).unwrap();

    let writes = printer.transport().writes();
    assert_eq!(
        &writes[12..],
        &[
            vec![0x1B, 0x37],
            vec![11],
            vec![120],
            vec![40],
            vec![0x12, 0x23],
            vec![(2 << 5) | 10],
        ]
    );
}

#[test]
fn test_custom_baud_changes_byte_time() {
    let printer = PrinterDriver::with_delay(
        MockTransport::new(),
        PrinterConfig {
            baud_rate: 9600,
            ..PrinterConfig::default()
        },
        SimulatedDelay::new(),
    )
    .unwrap();
    assert!((printer.byte_time().as_secs_f64() - 11.0 / 9600.0).abs() < 1e-9);
}

// ============================================================================
// ERRORS
// ============================================================================

#[test]
fn test_transport_failure_stops_sequence() {
    let mut printer = PrinterDriver::with_delay(
        MockTransport::failing_after(3),
        PrinterConfig::default(),
        SimulatedDelay::new(),
    )
    .unwrap();

    let err = printer.wake().unwrap_err();

    assert!(matches!(err, ThermalError::Transport(_)));
    assert_eq!(printer.transport().writes().len(), 3);
}

#[test]
fn test_writer_transport_captures_stream() {
    let mut printer = PrinterDriver::with_delay(
        WriterTransport::new(Vec::new()),
        PrinterConfig::default(),
        SimulatedDelay::new(),
    )
    .unwrap();

    printer.reset().unwrap();
    printer.println("ok").unwrap();

    let (transport, _) = printer.into_parts();
    assert_eq!(transport.into_inner(), vec![0x1B, 0x40, b'o', b'k', b'\n']);
}
