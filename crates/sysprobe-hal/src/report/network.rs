//! Network report: each interface classified as wired or wireless.

use crate::hal::NetOps;
use crate::HalResult;
use std::fmt;
use std::io::{self, Write};

pub const HEADER: &str = "Network interfaces:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInterface {
    pub name: String,
    pub is_wireless: bool,
}

impl fmt::Display for NetworkInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.is_wireless {
            true => "Wireless",
            false => "Wired",
        };
        write!(f, "{} ({})", self.name, kind)
    }
}

/// Classifies every interface, in table order.
///
/// An interface whose wireless query cannot be issued is logged and
/// skipped. Only a missing interface table is an error.
pub fn classify_interfaces<H: NetOps + ?Sized>(hal: &H) -> HalResult<Vec<NetworkInterface>> {
    let names = hal.interface_names()?;
    let mut out = Vec::with_capacity(names.len());
    for name in names {
        match hal.is_wireless(&name) {
            Ok(is_wireless) => out.push(NetworkInterface { name, is_wireless }),
            Err(err) => log::error!("skipping {name}: {err}"),
        }
    }
    Ok(out)
}

/// Writes the header and one line per interface.
pub fn write_network_report<W: Write>(out: &mut W, ifaces: &[NetworkInterface]) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    for iface in ifaces {
        writeln!(out, "{iface}")?;
    }
    Ok(())
}
