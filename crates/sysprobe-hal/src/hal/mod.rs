//! HAL trait definitions and implementations.
//!
//! This module defines the probing traits the reports run against and
//! provides both real (LinuxHal) and fake (FakeHal) implementations.

pub mod block_ops;
pub mod fake_hal;
pub mod linux_hal;
pub mod net_ops;

pub use block_ops::BlockOps;
pub use fake_hal::{FakeDrive, FakeHal, Operation};
pub use linux_hal::LinuxHal;
pub use net_ops::NetOps;
