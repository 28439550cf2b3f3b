//! Single-open loopback byte buffer.
//!
//! A fixed-capacity in-memory scratch device: a write replaces the entire
//! contents (silently truncated to capacity) and records the length; a
//! read drains up to the recorded length once and then reports zero bytes
//! until the next write.  Opening is exclusive — a second concurrent open
//! is rejected as busy, which is the only concurrency protection the
//! device needs.
//!
//! Used at boot as a self-test of the diagnostic path (see `main`).

use core::sync::atomic::{AtomicBool, Ordering};

use crate::error::DeviceError;

/// Fixed buffer capacity in bytes.
pub const LOOPBACK_CAPACITY: usize = 1024;

/// The loopback device.
pub struct LoopbackBuffer {
    open: AtomicBool,
    buf: [u8; LOOPBACK_CAPACITY],
    len: usize,
}

impl LoopbackBuffer {
    pub const fn new() -> Self {
        Self {
            open: AtomicBool::new(false),
            buf: [0; LOOPBACK_CAPACITY],
            len: 0,
        }
    }

    /// Claim the device.  Fails with [`DeviceError::Busy`] while another
    /// holder has it open.
    pub fn open(&self) -> Result<(), DeviceError> {
        self.open
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ())
            .map_err(|_| DeviceError::Busy)
    }

    /// Release the device for the next opener.
    pub fn release(&self) {
        self.open.store(false, Ordering::Release);
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }

    /// Replace the contents with `data`, truncating silently beyond
    /// capacity.  Returns the number of bytes stored.
    pub fn write(&mut self, data: &[u8]) -> usize {
        let n = data.len().min(LOOPBACK_CAPACITY);
        self.buf[..n].copy_from_slice(&data[..n]);
        self.len = n;
        n
    }

    /// Drain up to the recorded length into `out`.  The recorded length
    /// resets to zero afterwards, so a second read before the next write
    /// returns 0 (end of data).
    pub fn read(&mut self, out: &mut [u8]) -> usize {
        let n = self.len.min(out.len());
        out[..n].copy_from_slice(&self.buf[..n]);
        self.len = 0;
        n
    }
}
