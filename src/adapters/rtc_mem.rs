//! RTC retention-memory adapter.
//!
//! Implements [`RetentionPort`] over the bucket-addressed retention region.
//!
//! - **`target_os = "espidf"`** — a 768-byte static placed in `.rtc_noinit`
//!   (RTC slow memory). The startup code neither loads nor zeroes that
//!   section, so whatever was there before deep sleep is still there on
//!   wake. After power-on it holds garbage. Accesses are volatile byte
//!   copies; yielding goes through `esp_idf_hal::task::do_yield`.
//! - **`not(target_os = "espidf")`** — an owned byte array for host tests,
//!   with helpers to pre-fill garbage, model a power cycle, and optionally
//!   reproduce the unreliable tail past [`VERIFIED_LIMIT_BUCKET`].

use core::ops::Range;

use log::info;

use crate::app::ports::{RetentionPort, RtcMemError};
use crate::memory_map::{RESERVED_BUCKETS, RTC_BYTES, byte_offset};
#[cfg(not(target_os = "espidf"))]
use crate::memory_map::VERIFIED_LIMIT_BUCKET;

/// Byte range covered by `len` bytes at `bucket`, if the platform allows it.
fn span(bucket: u16, len: usize) -> Result<Range<usize>, RtcMemError> {
    if bucket < RESERVED_BUCKETS {
        return Err(RtcMemError::Reserved { bucket });
    }
    let start = byte_offset(bucket);
    match start.checked_add(len) {
        Some(end) if end <= RTC_BYTES => Ok(start..end),
        _ => Err(RtcMemError::OutOfBounds { bucket, len }),
    }
}

// ───────────────────────────────────────────────────────────────
// ESP-IDF backend
// ───────────────────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
mod region {
    use core::sync::atomic::{AtomicBool, Ordering};

    use crate::memory_map::RTC_BYTES;

    #[repr(C, align(4))]
    pub(super) struct Region([u8; RTC_BYTES]);

    // SAFETY: `.rtc_noinit` is reserved by the ESP-IDF linker script for
    // RTC slow memory that survives deep sleep and is skipped at startup.
    // The initialiser is never applied; it only gives the static a type.
    #[unsafe(link_section = ".rtc_noinit")]
    pub(super) static mut RTC_REGION: Region = Region([0; RTC_BYTES]);

    static TAKEN: AtomicBool = AtomicBool::new(false);

    pub(super) fn claim() -> bool {
        !TAKEN.swap(true, Ordering::AcqRel)
    }

    pub(super) fn base() -> *mut u8 {
        // No reference to the static mut is ever formed.
        (&raw mut RTC_REGION).cast::<u8>()
    }
}

/// Retention memory on the ESP32 RTC slow-memory domain.
#[cfg(target_os = "espidf")]
pub struct RtcMemoryAdapter {
    _claimed: (),
}

#[cfg(target_os = "espidf")]
impl RtcMemoryAdapter {
    /// Claim the RTC region. Returns `None` if it was already claimed.
    pub fn take() -> Option<Self> {
        if !region::claim() {
            log::warn!("RtcMemoryAdapter: region already claimed");
            return None;
        }
        info!("RtcMemoryAdapter: .rtc_noinit region, {} bytes", RTC_BYTES);
        Some(Self { _claimed: () })
    }
}

#[cfg(target_os = "espidf")]
impl RetentionPort for RtcMemoryAdapter {
    fn read(&mut self, bucket: u16, buf: &mut [u8]) -> Result<(), RtcMemError> {
        let range = span(bucket, buf.len())?;
        let base = region::base();
        for (dst, at) in buf.iter_mut().zip(range) {
            // SAFETY: `span` keeps `at` inside the region; this adapter is
            // the only accessor once claimed.
            *dst = unsafe { core::ptr::read_volatile(base.add(at)) };
        }
        Ok(())
    }

    fn write(&mut self, bucket: u16, data: &[u8]) -> Result<(), RtcMemError> {
        let range = span(bucket, data.len())?;
        let base = region::base();
        for (src, at) in data.iter().zip(range) {
            // SAFETY: as in `read`.
            unsafe { core::ptr::write_volatile(base.add(at), *src) };
        }
        Ok(())
    }

    fn yield_now(&mut self) {
        esp_idf_hal::task::do_yield();
    }
}

// ───────────────────────────────────────────────────────────────
// Host simulation backend
// ───────────────────────────────────────────────────────────────

/// In-memory stand-in for the RTC region.
#[cfg(not(target_os = "espidf"))]
pub struct RtcMemoryAdapter {
    memory: [u8; RTC_BYTES],
    unreliable_tail: bool,
    reads: usize,
    writes: usize,
    yields: usize,
}

#[cfg(not(target_os = "espidf"))]
impl Default for RtcMemoryAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_os = "espidf"))]
impl RtcMemoryAdapter {
    /// Zero-filled region.
    pub fn new() -> Self {
        info!("RtcMemoryAdapter: simulation backend");
        Self::from_bytes([0; RTC_BYTES])
    }

    /// Region holding exactly `memory`, e.g. cold-boot garbage.
    pub fn from_bytes(memory: [u8; RTC_BYTES]) -> Self {
        Self {
            memory,
            unreliable_tail: false,
            reads: 0,
            writes: 0,
            yields: 0,
        }
    }

    /// Drop every byte written at or past the verified limit, the way the
    /// hardware has been seen to.
    #[must_use]
    pub fn with_unreliable_tail(mut self) -> Self {
        self.unreliable_tail = true;
        self
    }

    /// Model a deep-sleep cycle: contents are kept, I/O counters restart.
    pub fn wake(&mut self) {
        self.reads = 0;
        self.writes = 0;
        self.yields = 0;
    }

    /// Model a power loss: the whole region comes back as `fill`.
    pub fn power_cycle(&mut self, fill: u8) {
        self.memory = [fill; RTC_BYTES];
    }

    /// Raw view of the region.
    pub fn bytes(&self) -> &[u8; RTC_BYTES] {
        &self.memory
    }

    pub fn reads(&self) -> usize {
        self.reads
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn yields(&self) -> usize {
        self.yields
    }
}

#[cfg(not(target_os = "espidf"))]
impl RetentionPort for RtcMemoryAdapter {
    fn read(&mut self, bucket: u16, buf: &mut [u8]) -> Result<(), RtcMemError> {
        let range = span(bucket, buf.len())?;
        self.reads += 1;
        buf.copy_from_slice(&self.memory[range]);
        Ok(())
    }

    fn write(&mut self, bucket: u16, data: &[u8]) -> Result<(), RtcMemError> {
        let range = span(bucket, data.len())?;
        self.writes += 1;
        let mut end = range.end;
        if self.unreliable_tail {
            end = end.min(byte_offset(VERIFIED_LIMIT_BUCKET)).max(range.start);
        }
        let kept = end - range.start;
        self.memory[range.start..end].copy_from_slice(&data[..kept]);
        Ok(())
    }

    fn yield_now(&mut self) {
        self.yields += 1;
    }
}
