//! Per-boot bookkeeping on the retained record.
//!
//! Retention memory survives deep sleep and every reset that keeps the RTC
//! domain powered (panic, watchdogs, software restart). Only a power-on or
//! brownout reset leaves it holding garbage, so only those discard it.
//!
//! | Reset            | count          | error_code     |
//! |------------------|----------------|----------------|
//! | power-on/brownout| reset to 0, +1 | reset to 0     |
//! | deep-sleep wake  | +1             | kept           |
//! | panic / watchdog | +1             | +1             |
//! | other            | +1             | kept           |

use log::{info, warn};

use super::ports::RetentionPort;
use super::store::RetentionStore;

/// Why the chip came out of reset, as far as the record cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetCause {
    /// Power applied or supply dipped; retention memory is garbage.
    PowerOn,
    /// Timer or external wake from deep sleep.
    DeepSleepWake,
    /// Panic, task/interrupt watchdog, or RTC watchdog.
    Abnormal,
    /// Software restart or anything else that keeps RTC memory intact.
    Other,
}

/// Apply one boot to the store: reconcile the record with `cause`, count the
/// boot and persist.
///
/// The record is expected to be loaded already.
pub fn record_boot<P: RetentionPort>(store: &mut RetentionStore<P>, cause: ResetCause) {
    match cause {
        ResetCause::PowerOn => {
            warn!("Cold boot, discarding retained record ({})", store.record());
            let stale = store.error();
            store.set_error(stale.wrapping_neg());
            store.set_count(0);
        }
        ResetCause::Abnormal => {
            warn!("Abnormal reset, recording error");
            store.set_error(1);
        }
        ResetCause::DeepSleepWake | ResetCause::Other => {}
    }

    store.increment_count();
    store.store();
    info!("Boot #{} ({:?}) | errors={}", store.count(), cause, store.error());
}
