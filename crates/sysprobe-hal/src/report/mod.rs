//! Report pipelines, generic over the HAL and the output sink.
//!
//! Each report is split into a scan, which can only fail on enumeration
//! (`HalResult`), and a writer, which can only fail on output (`io::Result`).

pub mod drives;
pub mod network;

use std::io;

pub use drives::{reportable_drives, scan_block_devices, write_drive_report, BlockDevice};
pub use network::{classify_interfaces, write_network_report, NetworkInterface};

/// Treats a reader that went away (`drives | head -1`) as a successful write.
pub fn ignore_broken_pipe(res: io::Result<()>) -> io::Result<()> {
    match res {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
