//! Kernel interface name/index table.

use crate::{HalError, HalResult};

/// Interface names in the order `if_nameindex(3)` returns them.
///
/// Names are converted lossily. A non-UTF-8 name would be queried under its
/// replaced spelling and come out wired; interface names are ASCII in
/// practice.
pub fn interface_names() -> HalResult<Vec<String>> {
    let table = nix::net::if_::if_nameindex().map_err(HalError::InterfaceTable)?;
    Ok(table
        .iter()
        .map(|iface| iface.name().to_string_lossy().into_owned())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_includes_loopback() {
        let names = interface_names().unwrap();
        assert!(names.iter().any(|n| n == "lo"), "{names:?}");
        assert!(names.iter().all(|n| !n.is_empty()));
    }
}
