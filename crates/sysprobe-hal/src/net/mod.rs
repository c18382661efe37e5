//! Network interface enumeration and wireless detection.

pub mod ifaces;
pub mod wireless;

pub use ifaces::interface_names;
pub use wireless::is_wireless;
