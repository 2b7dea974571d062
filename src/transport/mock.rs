//! In-memory transport that records every write.

use super::Transport;
use crate::error::ThermalError;

/// Records each `transmit` call as a separate entry.
///
/// ```
/// use thermal_ttl::transport::{MockTransport, Transport};
///
/// let mut mock = MockTransport::new();
/// mock.transmit(&[0x1B, 0x40])?;
/// mock.transmit(b"A")?;
/// assert_eq!(mock.writes(), &[vec![0x1B, 0x40], vec![b'A']]);
/// assert_eq!(mock.bytes(), vec![0x1B, 0x40, b'A']);
/// # Ok::<(), thermal_ttl::ThermalError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    writes: Vec<Vec<u8>>,
    fail_after: Option<usize>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport that accepts `count` writes and fails every one after.
    pub fn failing_after(count: usize) -> Self {
        Self {
            writes: Vec::new(),
            fail_after: Some(count),
        }
    }

    /// Successful writes, one entry per `transmit` call.
    pub fn writes(&self) -> &[Vec<u8>] {
        &self.writes
    }

    /// All successfully written bytes, concatenated.
    pub fn bytes(&self) -> Vec<u8> {
        self.writes.concat()
    }

    pub fn clear(&mut self) {
        self.writes.clear();
    }
}

impl Transport for MockTransport {
    fn transmit(&mut self, bytes: &[u8]) -> Result<(), ThermalError> {
        if self.fail_after.is_some_and(|limit| self.writes.len() >= limit) {
            return Err(ThermalError::Transport("Write failed: mock line down".into()));
        }
        self.writes.push(bytes.to_vec());
        Ok(())
    }
}
