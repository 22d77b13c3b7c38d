//! Retention configuration.
//!
//! Where the record lives and how the store treats the platform scheduler.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::memory_map::{
    DEFAULT_RECORD_BUCKET, RESERVED_BUCKETS, RTC_BUCKETS, VERIFIED_LIMIT_BUCKET,
};
use crate::record::RECORD_BUCKETS;

/// Placement of the record and the store's yield policy.
///
/// Checked by [`RetentionConfig::validate`] before a store is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionConfig {
    /// First bucket of the record inside the RTC region.
    pub record_bucket: u16,
    /// Yield to the scheduler after every raw read/write.
    pub yield_after_io: bool,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            record_bucket: DEFAULT_RECORD_BUCKET,
            yield_after_io: true,
        }
    }
}

impl RetentionConfig {
    /// Config with the record at `bucket` and default yield policy.
    pub fn at_bucket(bucket: u16) -> Self {
        Self {
            record_bucket: bucket,
            ..Self::default()
        }
    }

    /// Reject placements the hardware cannot honour at all.
    ///
    /// Placements past the verified limit are accepted: the platform takes
    /// the write, it just may not keep it. See [`Self::is_verified`].
    pub fn validate(self) -> Result<()> {
        if self.record_bucket < RESERVED_BUCKETS {
            return Err(Error::Config("record_bucket must be >= 65 (system-reserved below)"));
        }
        if self.end_bucket() > u32::from(RTC_BUCKETS) {
            return Err(Error::Config("record overruns the RTC region (192 buckets)"));
        }
        Ok(())
    }

    /// Whether the whole record sits inside the range known to retain data.
    pub fn is_verified(self) -> bool {
        self.end_bucket() <= u32::from(VERIFIED_LIMIT_BUCKET)
    }

    /// One past the last bucket the record occupies.
    fn end_bucket(self) -> u32 {
        u32::from(self.record_bucket) + u32::from(RECORD_BUCKETS)
    }
}
