//! Block device probing operations (`/dev` + sysfs).

use crate::sysfs::block::DriveKind;
use crate::HalResult;

/// Read-only queries the drive report needs.
///
/// Only [`BlockOps::block_device_nodes`] can fail. The per-device queries
/// return their documented default instead of an error.
pub trait BlockOps {
    /// Names of block-special nodes in the device directory, in directory order.
    fn block_device_nodes(&self) -> HalResult<Vec<String>>;

    /// `Partition` if the device has a partition marker, otherwise `Disk`.
    fn drive_kind(&self, name: &str) -> DriveKind;

    /// Device size in bytes, or 0 if unknown.
    fn drive_size_bytes(&self, name: &str) -> u64;

    /// Trimmed model string, or `"Unknown"`.
    fn drive_model(&self, name: &str) -> String;
}
