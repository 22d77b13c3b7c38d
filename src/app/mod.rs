//! Application core — record logic with zero direct I/O.
//!
//! All access to retention memory goes through the port trait defined in
//! [`ports`], keeping [`store`] fully testable without a device.

pub mod boot;
pub mod ports;
pub mod store;
