//! Retention store — the hexagonal core.
//!
//! [`RetentionStore`] owns the in-process copy of the [`RtcRecord`] and the
//! injected [`RetentionPort`]. Accessors operate on the copy only; the
//! record reaches retention memory when [`store`](RetentionStore::store) or
//! [`set_count`](RetentionStore::set_count) runs.
//!
//! ```text
//!  count() / error() ──▶ ┌──────────────────┐
//!  increment_count()     │  RetentionStore  │ ── load()/store() ──▶ RetentionPort
//!  set_error(delta)  ──▶ │    RtcRecord     │
//!  set_count(v) ───────▶ └──────────────────┘ ── (implicit store)
//! ```
//!
//! `load`/`store` are fire-and-forget: a failed raw call is logged and
//! otherwise ignored, and record-level corruption is never detected. Use
//! the `try_` variants to observe port errors.

use log::{debug, info, warn};

use crate::config::RetentionConfig;
use crate::error::Result;
use crate::record::{RECORD_LEN, RtcRecord};

use super::ports::RetentionPort;

/// Typed access to the record held in retention memory.
pub struct RetentionStore<P: RetentionPort> {
    port: P,
    config: RetentionConfig,
    record: RtcRecord,
}

impl<P: RetentionPort> RetentionStore<P> {
    /// Build the store without touching retention memory.
    ///
    /// The in-process record starts zeroed; call [`load`](Self::load) to
    /// pick up what survived sleep.
    pub fn new(port: P, config: RetentionConfig) -> Result<Self> {
        config.validate()?;
        if config.is_verified() {
            info!("RetentionStore: record at bucket {}", config.record_bucket);
        } else {
            warn!(
                "RetentionStore: record at bucket {} extends past the verified range; contents may not survive sleep",
                config.record_bucket
            );
        }
        Ok(Self {
            port,
            config,
            record: RtcRecord::default(),
        })
    }

    /// Build the store and immediately [`load`](Self::load).
    pub fn open(port: P, config: RetentionConfig) -> Result<Self> {
        let mut store = Self::new(port, config)?;
        store.load();
        Ok(store)
    }

    // ── Raw I/O ───────────────────────────────────────────────

    /// Replace the in-process record with what retention memory holds.
    ///
    /// Failures are logged and dropped; the record is left as it was.
    pub fn load(&mut self) {
        if let Err(e) = self.try_load() {
            warn!("RetentionStore: load failed: {}", e);
        }
    }

    /// Flush the in-process record to retention memory.
    ///
    /// Failures are logged and dropped.
    pub fn store(&mut self) {
        if let Err(e) = self.try_store() {
            warn!("RetentionStore: store failed: {}", e);
        }
    }

    /// [`load`](Self::load) with the port result surfaced.
    pub fn try_load(&mut self) -> Result<()> {
        let mut raw = [0u8; RECORD_LEN];
        let result = self.port.read(self.config.record_bucket, &mut raw);
        self.relinquish();
        result?;
        self.record = RtcRecord::from_bytes(&raw);
        debug!("RetentionStore: loaded {}", self.record);
        Ok(())
    }

    /// [`store`](Self::store) with the port result surfaced.
    pub fn try_store(&mut self) -> Result<()> {
        let raw = self.record.to_bytes();
        let result = self.port.write(self.config.record_bucket, &raw);
        self.relinquish();
        result?;
        debug!("RetentionStore: stored {}", self.record);
        Ok(())
    }

    fn relinquish(&mut self) {
        if self.config.yield_after_io {
            self.port.yield_now();
        }
    }

    // ── Accessors ─────────────────────────────────────────────

    /// Current in-process counter. No I/O.
    pub fn count(&self) -> i32 {
        self.record.count
    }

    /// Bump the counter in-process. Not persisted until the next store.
    pub fn increment_count(&mut self) {
        self.record.count = self.record.count.wrapping_add(1);
    }

    /// Overwrite the counter and persist the whole record at once.
    pub fn set_count(&mut self, value: i32) {
        self.record.count = value;
        self.store();
    }

    /// Accumulated error code. No I/O.
    pub fn error(&self) -> i32 {
        self.record.error_code
    }

    /// Add `delta` to the accumulated error code. In-process only.
    ///
    /// This accumulates; it never assigns.
    pub fn set_error(&mut self, delta: i32) {
        self.record.error_code = self.record.error_code.wrapping_add(delta);
    }

    /// The whole in-process record, `thing` and `dummy` included.
    pub fn record(&self) -> &RtcRecord {
        &self.record
    }

    /// Placement and yield policy this store was built with.
    pub fn config(&self) -> &RetentionConfig {
        &self.config
    }

    /// The injected retention-memory capability.
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Mutable access to the injected capability.
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    /// Give the port back, dropping the in-process record.
    pub fn into_port(self) -> P {
        self.port
    }
}
