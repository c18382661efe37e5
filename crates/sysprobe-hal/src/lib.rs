//! sysprobe hardware abstraction layer.
//!
//! Read-only probing of Linux block devices (`/dev` + `/sys/class/block`) and
//! network interfaces (`if_nameindex` + wireless extensions), plus the two
//! reports built on top of them.

pub mod devfs;
pub mod error;
pub mod hal;
pub mod logging;
pub mod net;
pub mod report;
pub mod sysfs;
pub mod units;

pub use error::{HalError, HalResult};
pub use hal::{BlockOps, FakeDrive, FakeHal, LinuxHal, NetOps, Operation};
pub use sysfs::block::DriveKind;
pub use units::{format_size, FormattedSize};
