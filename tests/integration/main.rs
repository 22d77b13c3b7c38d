//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the retention store
//! against the simulated RTC region or the shared mock.  All tests run on
//! the host (x86_64) with no real hardware required.

#![cfg(not(target_os = "espidf"))]

mod boot_cycle_tests;
mod store_tests;
