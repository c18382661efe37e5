//! Enumeration of device nodes under `/dev`.

use crate::{HalError, HalResult};
use std::fs;
use std::os::unix::fs::FileTypeExt;
use std::path::Path;

/// Returns the names of block-special nodes directly under `dev_dir`, in
/// directory order.
///
/// Symlinks are followed, like `stat(2)`. Entries that cannot be read or
/// stat'ed are skipped. Names are converted lossily, so a non-UTF-8 node name
/// would miss its sysfs attributes; udev and the kernel only create ASCII
/// names. Failing to open `dev_dir` itself is an error.
pub fn block_device_nodes_in(dev_dir: &Path) -> HalResult<Vec<String>> {
    let entries = fs::read_dir(dev_dir).map_err(|source| HalError::DeviceDirUnavailable {
        path: dev_dir.to_path_buf(),
        source,
    })?;

    let mut out = Vec::new();
    for entry in entries.flatten() {
        let is_block = fs::metadata(entry.path())
            .map(|meta| meta.file_type().is_block_device())
            .unwrap_or(false);
        if is_block {
            out.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    Ok(out)
}
