//! Fuzz target: `RetentionStore` over arbitrary RTC contents
//!
//! The first two bytes pick the record bucket, the rest seed the region
//! (repeated to fill it). Verifies:
//! - No panics for any placement or memory contents
//! - Invalid placements are rejected before any I/O
//! - Loaded fields are the raw little-endian bytes at the record offset
//! - A store/load cycle at a valid placement reproduces the record
//!
//! cargo fuzz run fuzz_cold_boot

#![no_main]

use libfuzzer_sys::fuzz_target;
use rtcstore::memory_map::{RTC_BYTES, byte_offset};
use rtcstore::record::{RECORD_LEN, RtcRecord};
use rtcstore::{RetentionConfig, RetentionStore, RtcMemoryAdapter};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    let bucket = u16::from_le_bytes([data[0], data[1]]);
    let seed = &data[2..];
    let mut memory = [0u8; RTC_BYTES];
    for (i, b) in memory.iter_mut().enumerate() {
        *b = seed[i % seed.len()];
    }

    let config = RetentionConfig::at_bucket(bucket);
    let store = match RetentionStore::open(RtcMemoryAdapter::from_bytes(memory), config) {
        Ok(s) => s,
        Err(_) => {
            assert!(config.validate().is_err());
            return;
        }
    };

    let at = byte_offset(bucket);
    let mut raw = [0u8; RECORD_LEN];
    raw.copy_from_slice(&memory[at..at + RECORD_LEN]);
    assert_eq!(*store.record(), RtcRecord::from_bytes(&raw));

    let mut store = store;
    store.increment_count();
    store.set_error(i32::from(data[2]));
    let expected = *store.record();
    store.store();

    let fresh = RetentionStore::open(store.into_port(), config).unwrap();
    assert_eq!(*fresh.record(), expected, "store/load must round-trip");
});
