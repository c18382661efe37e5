//! Helpers related to block devices in sysfs.
//!
//! Every reader here is best-effort: a missing or malformed attribute maps to
//! a fixed default instead of an error, so one odd device never stops a scan.

use std::fmt;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Sysfs reports block device sizes in 512-byte sectors regardless of the
/// device's logical block size.
pub const SECTOR_SIZE: u64 = 512;

/// Model string used when `device/model` cannot be read.
pub const UNKNOWN_MODEL: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveKind {
    Disk,
    Partition,
}

impl DriveKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DriveKind::Disk => "disk",
            DriveKind::Partition => "part",
        }
    }
}

impl fmt::Display for DriveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Classifies `<sys_block_dev_dir>` as a partition when its `partition`
/// attribute exists.
///
/// Anything else, including a failed lookup, counts as a whole disk.
pub fn drive_kind(sys_block_dev_dir: &Path) -> DriveKind {
    match fs::metadata(sys_block_dev_dir.join("partition")) {
        Ok(_) => DriveKind::Partition,
        Err(err) => {
            if err.kind() != std::io::ErrorKind::NotFound {
                log::debug!(
                    "partition marker lookup failed for {}: {}; assuming disk",
                    sys_block_dev_dir.display(),
                    err
                );
            }
            DriveKind::Disk
        }
    }
}

/// Reads the block device size from `/sys/class/block/<dev>/size`.
///
/// Returns 0 when the attribute is missing, empty or not a number.
pub fn block_device_size_bytes(sys_block_dev_dir: &Path) -> u64 {
    let path = sys_block_dev_dir.join("size");
    let sectors_str = match fs::read_to_string(&path) {
        Ok(s) => s,
        Err(err) => {
            log::debug!(
                "cannot read {}: {}; size defaults to 0",
                path.display(),
                err
            );
            return 0;
        }
    };
    parse_sectors(&sectors_str)
        .map(|sectors| sectors.saturating_mul(SECTOR_SIZE))
        .unwrap_or_else(|| {
            log::debug!(
                "unparsable sector count {:?} in {}; size defaults to 0",
                sectors_str.trim(),
                path.display()
            );
            0
        })
}

fn parse_sectors(content: &str) -> Option<u64> {
    content.trim().parse().ok()
}

/// Reads the first line of `device/model`, with trailing whitespace removed.
///
/// Falls back to [`UNKNOWN_MODEL`] if the file cannot be opened or has no
/// first line to read. Bytes that are not UTF-8 are replaced, not rejected.
pub fn drive_model(sys_block_dev_dir: &Path) -> String {
    let path = sys_block_dev_dir.join("device/model");
    let file = match fs::File::open(&path) {
        Ok(f) => f,
        Err(err) => {
            log::debug!("cannot open {}: {}", path.display(), err);
            return UNKNOWN_MODEL.to_string();
        }
    };

    let mut line = Vec::new();
    match BufReader::new(file).read_until(b'\n', &mut line) {
        Ok(0) => {
            log::debug!("{} is empty", path.display());
            UNKNOWN_MODEL.to_string()
        }
        Ok(_) => String::from_utf8_lossy(&line).trim_end().to_string(),
        Err(err) => {
            log::debug!("cannot read {}: {}", path.display(), err);
            UNKNOWN_MODEL.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn block_device_size_bytes_reads_sectors() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("size"), "8\n").unwrap();
        assert_eq!(block_device_size_bytes(tmp.path()), 4096);
    }

    #[test]
    fn block_device_size_bytes_defaults_to_zero() {
        let tmp = tempdir().unwrap();
        assert_eq!(block_device_size_bytes(tmp.path()), 0);

        fs::write(tmp.path().join("size"), "").unwrap();
        assert_eq!(block_device_size_bytes(tmp.path()), 0);

        fs::write(tmp.path().join("size"), "lots\n").unwrap();
        assert_eq!(block_device_size_bytes(tmp.path()), 0);

        fs::write(tmp.path().join("size"), "-4\n").unwrap();
        assert_eq!(block_device_size_bytes(tmp.path()), 0);
    }

    #[test]
    fn block_device_size_bytes_saturates() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("size"), format!("{}\n", u64::MAX)).unwrap();
        assert_eq!(block_device_size_bytes(tmp.path()), u64::MAX);
    }

    #[test]
    fn drive_kind_uses_partition_marker() {
        let tmp = tempdir().unwrap();
        assert_eq!(drive_kind(tmp.path()), DriveKind::Disk);

        fs::write(tmp.path().join("partition"), "1\n").unwrap();
        assert_eq!(drive_kind(tmp.path()), DriveKind::Partition);
    }

    #[test]
    fn drive_kind_treats_missing_device_as_disk() {
        let tmp = tempdir().unwrap();
        assert_eq!(drive_kind(&tmp.path().join("nope")), DriveKind::Disk);
    }

    #[test]
    fn drive_model_trims_trailing_whitespace() {
        let tmp = tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("device")).unwrap();
        fs::write(tmp.path().join("device/model"), "Samsung SSD 870   \t\n").unwrap();
        assert_eq!(drive_model(tmp.path()), "Samsung SSD 870");
    }

    #[test]
    fn drive_model_reads_first_line_only() {
        let tmp = tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("device")).unwrap();
        fs::write(tmp.path().join("device/model"), "WDC WD40\nsecond\n").unwrap();
        assert_eq!(drive_model(tmp.path()), "WDC WD40");
    }

    #[test]
    fn drive_model_keeps_non_utf8_models() {
        let tmp = tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("device")).unwrap();
        fs::write(tmp.path().join("device/model"), b"ACME \xff Disk\n").unwrap();
        assert_eq!(drive_model(tmp.path()), "ACME \u{FFFD} Disk");
    }

    #[test]
    fn drive_model_falls_back_to_unknown() {
        let tmp = tempdir().unwrap();
        assert_eq!(drive_model(tmp.path()), UNKNOWN_MODEL);

        fs::create_dir_all(tmp.path().join("device")).unwrap();
        fs::write(tmp.path().join("device/model"), "").unwrap();
        assert_eq!(drive_model(tmp.path()), UNKNOWN_MODEL);
    }

    #[test]
    fn drive_kind_display_pads() {
        assert_eq!(format!("{:<6}|", DriveKind::Disk), "disk  |");
        assert_eq!(DriveKind::Partition.to_string(), "part");
    }
}
