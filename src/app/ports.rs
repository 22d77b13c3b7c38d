//! Port traits — the hexagonal boundary between the record logic and the
//! platform's retention memory.
//!
//! ```text
//!   RtcMemoryAdapter ──▶ RetentionPort ──▶ RetentionStore (domain)
//! ```
//!
//! The vendor primitive is a pair of free functions on the device. Here it
//! is an injected capability so the store can run against an in-memory
//! fake on the host.

use core::fmt;

// ───────────────────────────────────────────────────────────────
// Retention port (driven adapter: domain ↔ RTC memory)
// ───────────────────────────────────────────────────────────────

/// Raw bucket-addressed access to retention memory.
///
/// Calls are synchronous and best effort. Offsets are in 4-byte buckets;
/// lengths are in bytes.
pub trait RetentionPort {
    /// Copy `buf.len()` bytes starting at `bucket` into `buf`.
    fn read(&mut self, bucket: u16, buf: &mut [u8]) -> Result<(), RtcMemError>;

    /// Copy `data` into retention memory starting at `bucket`.
    fn write(&mut self, bucket: u16, data: &[u8]) -> Result<(), RtcMemError>;

    /// Hand control back to the platform scheduler after a blocking call.
    ///
    /// Without this the task watchdog can fire on single-core parts.
    fn yield_now(&mut self) {}
}

impl<P: RetentionPort + ?Sized> RetentionPort for &mut P {
    fn read(&mut self, bucket: u16, buf: &mut [u8]) -> Result<(), RtcMemError> {
        (**self).read(bucket, buf)
    }

    fn write(&mut self, bucket: u16, data: &[u8]) -> Result<(), RtcMemError> {
        (**self).write(bucket, data)
    }

    fn yield_now(&mut self) {
        (**self).yield_now();
    }
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`RetentionPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RtcMemError {
    /// The request runs past the end of the region.
    OutOfBounds { bucket: u16, len: usize },
    /// The request touches the system-reserved low buckets.
    Reserved { bucket: u16 },
    /// The platform primitive reported a failure code.
    Platform(i32),
}

impl fmt::Display for RtcMemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { bucket, len } => {
                write!(f, "{len} bytes at bucket {bucket} overrun RTC region")
            }
            Self::Reserved { bucket } => write!(f, "bucket {bucket} is system-reserved"),
            Self::Platform(code) => write!(f, "platform error {code}"),
        }
    }
}
