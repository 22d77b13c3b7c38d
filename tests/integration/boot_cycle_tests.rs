//! Integration tests: cold boot and repeated deep-sleep wake cycles.

use rtcstore::memory_map::{RTC_BYTES, byte_offset};
use rtcstore::{RetentionConfig, RetentionStore};

use crate::mock_rtc::SharedRtc;

/// One wake: load, count, persist. What the firmware does every cycle.
fn wake_once(rtc: &SharedRtc) -> RetentionStore<SharedRtc> {
    let mut store = RetentionStore::open(rtc.clone(), RetentionConfig::default()).unwrap();
    store.increment_count();
    store.store();
    store
}

#[test]
fn cold_boot_garbage_is_reinterpreted_verbatim() {
    let mut memory = [0u8; RTC_BYTES];
    for (i, b) in memory.iter_mut().enumerate() {
        *b = (i as u8).wrapping_mul(31).wrapping_add(7);
    }
    let at = byte_offset(65);
    let expected_count = i32::from_le_bytes(memory[at..at + 4].try_into().unwrap());
    let expected_thing = i32::from_le_bytes(memory[at + 4..at + 8].try_into().unwrap());
    let expected_err = i32::from_le_bytes(memory[at + 8..at + 12].try_into().unwrap());
    let expected_dummy = i32::from_le_bytes(memory[at + 12..at + 16].try_into().unwrap());

    let rtc = SharedRtc::with_contents(memory);
    let store = RetentionStore::open(rtc, RetentionConfig::default()).unwrap();

    assert_eq!(store.count(), expected_count);
    assert_eq!(store.error(), expected_err);
    assert_eq!(store.record().thing, expected_thing);
    assert_eq!(store.record().dummy, expected_dummy);
}

#[test]
fn all_ones_memory_reads_as_minus_one() {
    let rtc = SharedRtc::with_contents([0xFF; RTC_BYTES]);
    let store = RetentionStore::open(rtc, RetentionConfig::default()).unwrap();
    assert_eq!(store.count(), -1);
    assert_eq!(store.error(), -1);
}

#[test]
fn new_store_is_zeroed_until_loaded() {
    let rtc = SharedRtc::with_contents([0xAB; RTC_BYTES]);
    let mut store = RetentionStore::new(rtc, RetentionConfig::default()).unwrap();
    assert_eq!(store.count(), 0);
    store.load();
    assert_eq!(store.count(), 0xABAB_ABAB_u32 as i32);
}

#[test]
fn counter_advances_across_wake_cycles() {
    let rtc = SharedRtc::new();
    RetentionStore::new(rtc.clone(), RetentionConfig::default())
        .unwrap()
        .set_count(0);

    for expected in 1..=5 {
        rtc.wake();
        let store = wake_once(&rtc);
        assert_eq!(store.count(), expected);
    }
}

#[test]
fn power_loss_loses_the_record() {
    let rtc = SharedRtc::new();
    let mut store = RetentionStore::new(rtc.clone(), RetentionConfig::default()).unwrap();
    store.set_count(42);

    rtc.power_cycle(0x00);
    let after = RetentionStore::open(rtc, RetentionConfig::default()).unwrap();
    assert_eq!(after.count(), 0);
}
