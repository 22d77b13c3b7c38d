//! rtcstore — wake-cycle entry point.
//!
//! Each boot loads the retained record, reconciles it with the reset
//! reason, counts the boot, persists, and goes back to deep sleep.
//!
//! ```text
//!  boot ──▶ load ──▶ record_boot ──▶ deep sleep ──┐
//!   ▲                                             │
//!   └─────────────────── timer wake ──────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Result, anyhow};
use log::info;

use esp_idf_sys::{
    esp_deep_sleep, esp_reset_reason, esp_reset_reason_t, esp_reset_reason_t_ESP_RST_BROWNOUT,
    esp_reset_reason_t_ESP_RST_DEEPSLEEP, esp_reset_reason_t_ESP_RST_INT_WDT,
    esp_reset_reason_t_ESP_RST_PANIC, esp_reset_reason_t_ESP_RST_POWERON,
    esp_reset_reason_t_ESP_RST_TASK_WDT, esp_reset_reason_t_ESP_RST_WDT,
};

use rtcstore::{RetentionConfig, RetentionStore, ResetCause, RtcMemoryAdapter, record_boot};

const SLEEP_SECS: u64 = 10;

/// Map the ESP-IDF reset reason onto what it means for RTC memory.
fn reset_cause(reason: esp_reset_reason_t) -> ResetCause {
    match reason {
        esp_reset_reason_t_ESP_RST_POWERON | esp_reset_reason_t_ESP_RST_BROWNOUT => {
            ResetCause::PowerOn
        }
        esp_reset_reason_t_ESP_RST_DEEPSLEEP => ResetCause::DeepSleepWake,
        esp_reset_reason_t_ESP_RST_PANIC
        | esp_reset_reason_t_ESP_RST_TASK_WDT
        | esp_reset_reason_t_ESP_RST_INT_WDT
        | esp_reset_reason_t_ESP_RST_WDT => ResetCause::Abnormal,
        _ => ResetCause::Other,
    }
}

#[allow(unreachable_code)]
fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("rtcstore v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Retained record ────────────────────────────────────
    let rtc = RtcMemoryAdapter::take().ok_or_else(|| anyhow!("RTC region already claimed"))?;
    let mut store = RetentionStore::open(rtc, RetentionConfig::default())?;

    // SAFETY: plain status query, valid at any point after startup.
    let reason = unsafe { esp_reset_reason() };
    record_boot(&mut store, reset_cause(reason));

    // ── 3. Sleep ──────────────────────────────────────────────
    info!("Entering deep sleep for {}s", SLEEP_SECS);
    // SAFETY: does not return; RTC slow memory stays powered.
    unsafe { esp_deep_sleep(SLEEP_SECS * 1_000_000) };
    Ok(())
}
