//! Integration tests: RetentionStore accessors against shared RTC memory.

use rtcstore::{RetentionConfig, RetentionStore, RtcRecord};

use crate::mock_rtc::{PortCall, SharedRtc};

fn make_store() -> (RetentionStore<SharedRtc>, SharedRtc) {
    let rtc = SharedRtc::new();
    let store = RetentionStore::new(rtc.clone(), RetentionConfig::default()).unwrap();
    (store, rtc)
}

/// A second store over the same memory, as if the device had just woken.
fn fresh_boot(rtc: &SharedRtc) -> RetentionStore<SharedRtc> {
    RetentionStore::open(rtc.clone(), RetentionConfig::default()).unwrap()
}

// ── Round trip ────────────────────────────────────────────────

#[test]
fn store_then_load_round_trips() {
    let (mut store, rtc) = make_store();
    store.set_count(12);
    store.set_error(-4);
    store.store();

    let woke = fresh_boot(&rtc);
    assert_eq!(woke.count(), 12);
    assert_eq!(woke.error(), -4);
    assert_eq!(woke.record(), store.record());
}

#[test]
fn load_reads_full_record_at_offset() {
    let (mut store, rtc) = make_store();
    store.load();
    assert_eq!(rtc.calls(), [PortCall::Read { bucket: 65, len: 16 }, PortCall::Yield]);
}

#[test]
fn store_writes_full_record_at_offset() {
    let (mut store, rtc) = make_store();
    store.store();
    assert_eq!(
        rtc.calls(),
        [PortCall::Write { bucket: 65, len: 16 }, PortCall::Yield]
    );
    assert_eq!(rtc.bytes_at(65, 16), RtcRecord::default().to_bytes());
}

// ── Increments are not persisted ──────────────────────────────

#[test]
fn increments_without_store_leave_memory_unchanged() {
    let (mut store, rtc) = make_store();
    store.set_count(5);
    let before = rtc.bytes_at(65, 16);
    rtc.clear_calls();

    for _ in 0..10 {
        store.increment_count();
    }
    assert_eq!(store.count(), 15);
    assert!(rtc.calls().is_empty(), "increment must not touch memory");
    assert_eq!(rtc.bytes_at(65, 16), before);

    store.load();
    assert_eq!(store.count(), 5, "load must discard unsaved increments");
}

// ── set_count flushes ─────────────────────────────────────────

#[test]
fn set_count_is_visible_to_fresh_boot() {
    let (mut store, rtc) = make_store();
    store.set_count(777);
    assert_eq!(fresh_boot(&rtc).count(), 777);
}

#[test]
fn set_count_flushes_pending_error_too() {
    let (mut store, rtc) = make_store();
    store.set_error(9);
    store.set_count(1);
    let woke = fresh_boot(&rtc);
    assert_eq!(woke.error(), 9);
    assert_eq!(woke.count(), 1);
}

// ── Error accumulation ────────────────────────────────────────

#[test]
fn set_error_accumulates() {
    let (mut store, rtc) = make_store();
    store.set_error(3);
    store.set_error(-1);
    assert_eq!(store.error(), 2);
    assert!(rtc.calls().is_empty(), "set_error must not persist");
}

#[test]
fn error_total_survives_sleep_when_stored() {
    let (mut store, rtc) = make_store();
    store.set_error(2);
    store.store();

    let mut woke = fresh_boot(&rtc);
    woke.set_error(3);
    assert_eq!(woke.error(), 5);
}

// ── Silent failure ────────────────────────────────────────────

#[test]
fn failed_io_is_silent_and_keeps_record() {
    let (mut store, rtc) = make_store();
    store.set_count(3);
    rtc.set_failing(true);

    store.increment_count();
    store.store();
    store.load();
    assert_eq!(store.count(), 4);

    rtc.set_failing(false);
    assert_eq!(fresh_boot(&rtc).count(), 3);
}

#[test]
fn try_variants_surface_port_errors() {
    let (mut store, rtc) = make_store();
    rtc.set_failing(true);
    assert!(store.try_load().is_err());
    assert!(store.try_store().is_err());
    rtc.set_failing(false);
    assert!(store.try_store().is_ok());
}
