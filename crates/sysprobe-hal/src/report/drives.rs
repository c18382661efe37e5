//! Drive report: whole disks with type, model and size.

use crate::hal::BlockOps;
use crate::sysfs::block::DriveKind;
use crate::units::FormattedSize;
use crate::HalResult;
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDevice {
    pub name: String,
    pub kind: DriveKind,
    pub size_bytes: u64,
    pub model: String,
}

impl BlockDevice {
    /// Probes one device node. Never fails: each attribute has its own
    /// default (`Disk`, 0, `"Unknown"`) when the metadata is unreadable.
    pub fn probe<H: BlockOps + ?Sized>(hal: &H, name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: hal.drive_kind(name),
            size_bytes: hal.drive_size_bytes(name),
            model: hal.drive_model(name),
        }
    }

    /// Only whole disks with a known, nonzero size make it into the report.
    pub fn is_reportable(&self) -> bool {
        self.kind == DriveKind::Disk && self.size_bytes > 0
    }

    pub fn formatted_size(&self) -> FormattedSize {
        FormattedSize::from_bytes(self.size_bytes)
    }
}

/// Probes every block device node, in enumeration order.
///
/// Fails only if the device directory cannot be listed.
pub fn scan_block_devices<H: BlockOps + ?Sized>(hal: &H) -> HalResult<Vec<BlockDevice>> {
    let names = hal.block_device_nodes()?;
    Ok(names
        .iter()
        .map(|name| BlockDevice::probe(hal, name))
        .collect())
}

pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    let [drive, kind, model, size] = ["Drive", "Type", "Model", "Size"];
    writeln!(out, "{drive:<10} {kind:<6} {model:<20} {size:<10}")
}

pub fn write_row<W: Write>(out: &mut W, dev: &BlockDevice) -> io::Result<()> {
    writeln!(
        out,
        "{:<10} {:<6} {:<20} {:<10}",
        dev.name,
        dev.kind,
        dev.model,
        dev.formatted_size()
    )
}

/// Scans the device directory and keeps the reportable disks, in
/// enumeration order.
///
/// Fails only if the device directory cannot be listed.
pub fn reportable_drives<H: BlockOps + ?Sized>(hal: &H) -> HalResult<Vec<BlockDevice>> {
    let mut devices = scan_block_devices(hal)?;
    devices.retain(BlockDevice::is_reportable);
    Ok(devices)
}

/// Writes the header and one row per device.
pub fn write_drive_report<W: Write>(out: &mut W, devices: &[BlockDevice]) -> io::Result<()> {
    write_header(out)?;
    for dev in devices {
        write_row(out, dev)?;
    }
    Ok(())
}
