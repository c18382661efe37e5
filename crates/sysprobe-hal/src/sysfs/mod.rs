//! Readers for the sysfs tree.

pub mod block;
