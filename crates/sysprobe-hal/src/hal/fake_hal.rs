//! Fake HAL implementation for testing.
//!
//! Devices and interfaces are described in memory and every query is
//! recorded, allowing CI-safe testing without root privileges or real
//! hardware.

use super::{BlockOps, NetOps};
use crate::sysfs::block::{DriveKind, UNKNOWN_MODEL};
use crate::{HalError, HalResult};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Operation records for testing and verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    ListBlockDevices,
    DriveKind { name: String },
    DriveSize { name: String },
    DriveModel { name: String },
    ListInterfaces,
    WirelessQuery { ifname: String },
}

/// A block device node as the fake device directory exposes it.
#[derive(Debug, Clone)]
pub struct FakeDrive {
    pub name: String,
    /// Non-block nodes (tty, null, ...) are listed but filtered out.
    pub is_block: bool,
    pub is_partition: bool,
    pub size_bytes: u64,
    /// `None` behaves like an unreadable `device/model`.
    pub model: Option<String>,
}

impl FakeDrive {
    pub fn disk(name: &str, size_bytes: u64, model: &str) -> Self {
        Self {
            name: name.to_string(),
            is_block: true,
            is_partition: false,
            size_bytes,
            model: Some(model.to_string()),
        }
    }

    pub fn partition(name: &str, size_bytes: u64) -> Self {
        Self {
            name: name.to_string(),
            is_block: true,
            is_partition: true,
            size_bytes,
            model: None,
        }
    }

    pub fn char_device(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_block: false,
            is_partition: false,
            size_bytes: 0,
            model: None,
        }
    }
}

#[derive(Debug, Clone)]
enum FakeWireless {
    Wired,
    Wireless,
    ChannelFailure,
}

/// Shared state for FakeHal operations.
#[derive(Debug, Default)]
struct FakeHalState {
    /// All operations that were recorded
    operations: Vec<Operation>,
    drives: Vec<FakeDrive>,
    interfaces: Vec<(String, FakeWireless)>,
    dev_dir_missing: bool,
    interface_table_missing: bool,
}

/// Fake HAL implementation that answers from fixtures and records queries.
#[derive(Debug, Clone, Default)]
pub struct FakeHal {
    state: Arc<Mutex<FakeHalState>>,
}

impl FakeHal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_drive(self, drive: FakeDrive) -> Self {
        self.state.lock().unwrap().drives.push(drive);
        self
    }

    pub fn with_interface(self, ifname: &str, wireless: bool) -> Self {
        let kind = if wireless {
            FakeWireless::Wireless
        } else {
            FakeWireless::Wired
        };
        self.state
            .lock()
            .unwrap()
            .interfaces
            .push((ifname.to_string(), kind));
        self
    }

    /// Adds an interface whose control socket cannot be opened.
    pub fn with_broken_interface(self, ifname: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .interfaces
            .push((ifname.to_string(), FakeWireless::ChannelFailure));
        self
    }

    /// Makes device enumeration fail as if `/dev` could not be opened.
    pub fn without_dev_dir(self) -> Self {
        self.state.lock().unwrap().dev_dir_missing = true;
        self
    }

    /// Makes interface enumeration fail.
    pub fn without_interface_table(self) -> Self {
        self.state.lock().unwrap().interface_table_missing = true;
        self
    }

    /// Get all recorded operations.
    pub fn operations(&self) -> Vec<Operation> {
        self.state.lock().unwrap().operations.clone()
    }

    /// Get the number of operations recorded.
    pub fn operation_count(&self) -> usize {
        self.state.lock().unwrap().operations.len()
    }

    /// Check if a specific operation was recorded.
    pub fn has_operation(&self, check: impl Fn(&Operation) -> bool) -> bool {
        self.state.lock().unwrap().operations.iter().any(check)
    }

    fn record_operation(&self, op: Operation) {
        self.state.lock().unwrap().operations.push(op);
    }

    fn find_drive(&self, name: &str) -> Option<FakeDrive> {
        self.state
            .lock()
            .unwrap()
            .drives
            .iter()
            .find(|d| d.name == name)
            .cloned()
    }
}

impl BlockOps for FakeHal {
    fn block_device_nodes(&self) -> HalResult<Vec<String>> {
        self.record_operation(Operation::ListBlockDevices);
        let state = self.state.lock().unwrap();
        if state.dev_dir_missing {
            return Err(HalError::DeviceDirUnavailable {
                path: PathBuf::from("/dev"),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        Ok(state
            .drives
            .iter()
            .filter(|d| d.is_block)
            .map(|d| d.name.clone())
            .collect())
    }

    fn drive_kind(&self, name: &str) -> DriveKind {
        self.record_operation(Operation::DriveKind {
            name: name.to_string(),
        });
        match self.find_drive(name) {
            Some(d) if d.is_partition => DriveKind::Partition,
            _ => DriveKind::Disk,
        }
    }

    fn drive_size_bytes(&self, name: &str) -> u64 {
        self.record_operation(Operation::DriveSize {
            name: name.to_string(),
        });
        self.find_drive(name).map(|d| d.size_bytes).unwrap_or(0)
    }

    fn drive_model(&self, name: &str) -> String {
        self.record_operation(Operation::DriveModel {
            name: name.to_string(),
        });
        self.find_drive(name)
            .and_then(|d| d.model)
            .map(|m| m.trim_end().to_string())
            .unwrap_or_else(|| UNKNOWN_MODEL.to_string())
    }
}

impl NetOps for FakeHal {
    fn interface_names(&self) -> HalResult<Vec<String>> {
        self.record_operation(Operation::ListInterfaces);
        let state = self.state.lock().unwrap();
        if state.interface_table_missing {
            return Err(HalError::InterfaceTable(nix::errno::Errno::ENOBUFS));
        }
        Ok(state.interfaces.iter().map(|(n, _)| n.clone()).collect())
    }

    fn is_wireless(&self, ifname: &str) -> HalResult<bool> {
        self.record_operation(Operation::WirelessQuery {
            ifname: ifname.to_string(),
        });
        let kind = self
            .state
            .lock()
            .unwrap()
            .interfaces
            .iter()
            .find(|(n, _)| n == ifname)
            .map(|(_, k)| k.clone());
        match kind {
            Some(FakeWireless::Wireless) => Ok(true),
            Some(FakeWireless::ChannelFailure) => Err(HalError::ControlChannel {
                iface: ifname.to_string(),
                source: nix::errno::Errno::EMFILE,
            }),
            Some(FakeWireless::Wired) | None => Ok(false),
        }
    }
}
