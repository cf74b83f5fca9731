use std::collections::VecDeque;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serialport::SerialPort;

use crate::drivers::ScopeError;

/// Trait representing something that can yield raw sample frames on demand.
pub trait SampleTransport {
    /// One bounded read attempt. `Ok(Some(frame))` is a complete 2-byte
    /// record; `Ok(None)` means the line went quiet first (timeout or
    /// partial read) and there is no sample this cycle.
    fn read_frame(&mut self) -> Result<Option<[u8; 2]>, ScopeError>;

    /// Releases the underlying device. Later calls are no-ops.
    fn close(&mut self) -> Result<(), ScopeError>;
}

/// Transport over a real serial device.
///
/// The device sends a bare stream of 2-byte little-endian records with no
/// handshake and no framing beyond "every 2 bytes is one sample".
pub struct SerialTransport {
    port_name: String,
    port: Option<Box<dyn SerialPort>>,
}

impl SerialTransport {
    pub fn open(port_name: &str, baud_rate: u32, timeout: Duration) -> Result<Self, ScopeError> {
        let port = serialport::new(port_name, baud_rate)
            .timeout(timeout)
            .open()
            .map_err(|source| ScopeError::Open {
                port: port_name.to_string(),
                source,
            })?;
        log::info!("opened {port_name} at {baud_rate} baud");
        Ok(Self {
            port_name: port_name.to_string(),
            port: Some(port),
        })
    }

    pub fn port_name(&self) -> &str {
        &self.port_name
    }
}

impl SampleTransport for SerialTransport {
    fn read_frame(&mut self) -> Result<Option<[u8; 2]>, ScopeError> {
        let Some(port) = self.port.as_mut() else {
            return Ok(None);
        };
        let mut frame = [0u8; 2];
        match port.read(&mut frame) {
            Ok(2) => Ok(Some(frame)),
            Ok(n) => {
                // Partial frames are dropped; the next full record realigns
                // the stream on its own.
                log::trace!("short read ({n} of 2 bytes), skipping cycle");
                Ok(None)
            }
            Err(err) if err.kind() == std::io::ErrorKind::TimedOut => Ok(None),
            Err(err) => Err(ScopeError::Read(err)),
        }
    }

    fn close(&mut self) -> Result<(), ScopeError> {
        if let Some(port) = self.port.take() {
            drop(port);
            log::info!("closed {}", self.port_name);
        }
        Ok(())
    }
}

impl Drop for SerialTransport {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

/// In-memory transport useful for tests and deterministic playback.
///
/// Each queued chunk is what one read attempt yields; chunks shorter than a
/// full frame reproduce timeouts and partial reads. An exhausted queue
/// behaves like a quiet line.
pub struct ManualTransport {
    reads: VecDeque<Vec<u8>>,
    close_calls: Arc<AtomicUsize>,
}

impl ManualTransport {
    pub fn new(reads: impl IntoIterator<Item = Vec<u8>>) -> Self {
        Self {
            reads: reads.into_iter().collect(),
            close_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared counter of `close` calls, observable after the transport has
    /// been moved into the acquisition thread.
    pub fn close_calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.close_calls)
    }
}

impl SampleTransport for ManualTransport {
    fn read_frame(&mut self) -> Result<Option<[u8; 2]>, ScopeError> {
        match self.reads.pop_front() {
            Some(chunk) if chunk.len() == 2 => Ok(Some([chunk[0], chunk[1]])),
            Some(_) => Ok(None),
            None => {
                // Stand in for the serial read timeout without stalling
                // tests for a full second.
                std::thread::sleep(Duration::from_millis(1));
                Ok(None)
            }
        }
    }

    fn close(&mut self) -> Result<(), ScopeError> {
        self.close_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
