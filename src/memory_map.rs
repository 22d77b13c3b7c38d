//! RTC retention memory map.
//!
//! All offsets are in 4-byte buckets, the addressing unit of the raw
//! read/write primitive.
//!
//! ```text
//!  bucket 0            65                       184          192
//!         ┌────────────┬────────────────────────┬────────────┐
//!         │  reserved  │   user, verified       │ unreliable │
//!         │  (system)  │                        │            │
//!         └────────────┴────────────────────────┴────────────┘
//! ```
//!
//! The region nominally offers 128 user buckets after the reserved block,
//! but writes past bucket 184 have been observed to corrupt. Keep data
//! inside the verified span and never let a value straddle a bucket edge.
//! Contents survive deep sleep; they do not survive power-off.

/// Total size of the retention region in buckets.
pub const RTC_BUCKETS: u16 = 192;

/// Size of the retention region in bytes.
pub const RTC_BYTES: usize = RTC_BUCKETS as usize * crate::record::BUCKET_SIZE;

/// First bucket available to user data. Everything below belongs to the system.
pub const RESERVED_BUCKETS: u16 = 65;

/// First bucket past the range that has been verified to retain data.
pub const VERIFIED_LIMIT_BUCKET: u16 = 184;

/// Bucket the record is placed at unless configured otherwise.
pub const DEFAULT_RECORD_BUCKET: u16 = RESERVED_BUCKETS;

/// Byte offset of a bucket within the region.
pub const fn byte_offset(bucket: u16) -> usize {
    bucket as usize * crate::record::BUCKET_SIZE
}
