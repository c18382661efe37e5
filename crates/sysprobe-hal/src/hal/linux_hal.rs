//! Linux HAL implementation reading the live system.

use super::{BlockOps, NetOps};
use crate::sysfs::block::{self, DriveKind};
use crate::{devfs, net, HalResult};
use std::path::{Path, PathBuf};

pub const DEFAULT_DEV_DIR: &str = "/dev";
pub const DEFAULT_SYS_BLOCK_DIR: &str = "/sys/class/block";

/// Real HAL implementation for Linux systems.
#[derive(Debug, Clone)]
pub struct LinuxHal {
    dev_dir: PathBuf,
    sys_block_dir: PathBuf,
}

impl Default for LinuxHal {
    fn default() -> Self {
        Self::new()
    }
}

impl LinuxHal {
    pub fn new() -> Self {
        Self::with_roots(DEFAULT_DEV_DIR, DEFAULT_SYS_BLOCK_DIR)
    }

    /// Reads device nodes from `dev_dir` and per-device attributes from
    /// `sys_block_dir/<name>/` instead of the standard locations.
    pub fn with_roots(dev_dir: impl Into<PathBuf>, sys_block_dir: impl Into<PathBuf>) -> Self {
        Self {
            dev_dir: dev_dir.into(),
            sys_block_dir: sys_block_dir.into(),
        }
    }

    pub fn dev_dir(&self) -> &Path {
        &self.dev_dir
    }

    pub fn sys_block_dir(&self) -> &Path {
        &self.sys_block_dir
    }

    fn sysfs_dir(&self, name: &str) -> PathBuf {
        self.sys_block_dir.join(name)
    }
}

impl BlockOps for LinuxHal {
    fn block_device_nodes(&self) -> HalResult<Vec<String>> {
        devfs::block_device_nodes_in(&self.dev_dir)
    }

    fn drive_kind(&self, name: &str) -> DriveKind {
        block::drive_kind(&self.sysfs_dir(name))
    }

    fn drive_size_bytes(&self, name: &str) -> u64 {
        block::block_device_size_bytes(&self.sysfs_dir(name))
    }

    fn drive_model(&self, name: &str) -> String {
        block::drive_model(&self.sysfs_dir(name))
    }
}

impl NetOps for LinuxHal {
    fn interface_names(&self) -> HalResult<Vec<String>> {
        net::interface_names()
    }

    fn is_wireless(&self, ifname: &str) -> HalResult<bool> {
        net::is_wireless(ifname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn default_roots() {
        let hal = LinuxHal::new();
        assert_eq!(hal.dev_dir(), Path::new("/dev"));
        assert_eq!(hal.sys_block_dir(), Path::new("/sys/class/block"));
    }

    #[test]
    fn reads_attributes_under_custom_sysfs_root() {
        let tmp = tempdir().unwrap();
        let sys = tmp.path().join("sys");
        fs::create_dir_all(sys.join("sda/device")).unwrap();
        fs::write(sys.join("sda/size"), "2097152\n").unwrap();
        fs::write(sys.join("sda/device/model"), "Samsung SSD\n").unwrap();
        fs::create_dir_all(sys.join("sda1")).unwrap();
        fs::write(sys.join("sda1/partition"), "1\n").unwrap();

        let hal = LinuxHal::with_roots(tmp.path().join("dev"), &sys);
        assert_eq!(hal.drive_kind("sda"), DriveKind::Disk);
        assert_eq!(hal.drive_kind("sda1"), DriveKind::Partition);
        assert_eq!(hal.drive_size_bytes("sda"), 1_073_741_824);
        assert_eq!(hal.drive_size_bytes("sda1"), 0);
        assert_eq!(hal.drive_model("sda"), "Samsung SSD");
        assert_eq!(hal.drive_model("sda1"), "Unknown");
    }

    #[test]
    fn missing_dev_dir_fails_enumeration() {
        let tmp = tempdir().unwrap();
        let hal = LinuxHal::with_roots(tmp.path().join("dev"), tmp.path());
        assert!(hal.block_device_nodes().is_err());
    }
}
