//! Network interface probing operations.

use crate::HalResult;

pub trait NetOps {
    /// Interface names in kernel index-table order.
    fn interface_names(&self) -> HalResult<Vec<String>>;

    /// Whether the interface answers the wireless-extensions name query.
    ///
    /// `Err` means the query could not be issued at all.
    fn is_wireless(&self, ifname: &str) -> HalResult<bool>;
}
