//! rtcstore library.
//!
//! Keeps a 16-byte record in RTC retention memory across deep sleep.
//! All ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! within each module; the rest runs on the host for testing.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod memory_map;
pub mod record;

pub use adapters::rtc_mem::RtcMemoryAdapter;
pub use app::boot::{ResetCause, record_boot};
pub use app::ports::{RetentionPort, RtcMemError};
pub use app::store::RetentionStore;
pub use config::RetentionConfig;
pub use error::{Error, Result};
pub use record::RtcRecord;
