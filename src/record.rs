//! The retained record and its raw byte layout.
//!
//! ```text
//!   byte  0        4        8            12       16
//!         ┌────────┬────────┬────────────┬────────┐
//!         │ count  │ thing  │ error_code │ dummy  │   i32 LE each
//!         └────────┴────────┴────────────┴────────┘
//! ```
//!
//! The block is copied to and from retention memory verbatim. There is no
//! version tag and no checksum: on cold boot the fields hold whatever the
//! memory held.

use core::fmt;

/// Size of one retention-memory addressing unit in bytes.
pub const BUCKET_SIZE: usize = 4;

/// Size of the serialised record in bytes.
pub const RECORD_LEN: usize = 16;

/// Number of buckets the record spans.
pub const RECORD_BUCKETS: u16 = (RECORD_LEN / BUCKET_SIZE) as u16;

const _: () = assert!(core::mem::size_of::<RtcRecord>() == RECORD_LEN);

/// State carried across deep-sleep cycles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(C)]
pub struct RtcRecord {
    /// Usage counter. Meaning is up to the caller.
    pub count: i32,
    /// Unused placeholder.
    pub thing: i32,
    /// Running total of error signals reported by the caller.
    pub error_code: i32,
    /// Reserved.
    pub dummy: i32,
}

impl RtcRecord {
    /// Reinterpret a raw block as a record. No field is validated.
    pub fn from_bytes(raw: &[u8; RECORD_LEN]) -> Self {
        let field = |i: usize| {
            let at = i * BUCKET_SIZE;
            i32::from_le_bytes([raw[at], raw[at + 1], raw[at + 2], raw[at + 3]])
        };
        Self {
            count: field(0),
            thing: field(1),
            error_code: field(2),
            dummy: field(3),
        }
    }

    /// Serialise in declaration order.
    pub fn to_bytes(&self) -> [u8; RECORD_LEN] {
        let mut raw = [0u8; RECORD_LEN];
        let fields = [self.count, self.thing, self.error_code, self.dummy];
        for (chunk, value) in raw.chunks_exact_mut(BUCKET_SIZE).zip(fields) {
            chunk.copy_from_slice(&value.to_le_bytes());
        }
        raw
    }
}

impl fmt::Display for RtcRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "count={} thing={} err={} dummy={}",
            self.count, self.thing, self.error_code, self.dummy
        )
    }
}
