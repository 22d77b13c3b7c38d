//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter   | Implements    | Connects to                          |
//! |-----------|---------------|--------------------------------------|
//! | `rtc_mem` | RetentionPort | `.rtc_noinit` RTC memory / in-memory |

pub mod rtc_mem;
