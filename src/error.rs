//! Unified error type for the crate.
//!
//! Port failures and configuration problems both funnel into [`Error`].
//! All variants are `Copy`.

use core::fmt;

use crate::app::ports::RtcMemError;

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The retention-memory primitive rejected or failed a request.
    RtcMem(RtcMemError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RtcMem(e) => write!(f, "rtc memory: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl From<RtcMemError> for Error {
    fn from(e: RtcMemError) -> Self {
        Self::RtcMem(e)
    }
}

impl core::error::Error for Error {}

impl core::error::Error for RtcMemError {}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
