use std::path::PathBuf;
use thiserror::Error;

pub type HalResult<T> = std::result::Result<T, HalError>;

#[derive(Error, Debug)]
pub enum HalError {
    #[error("cannot open device directory {}: {source}", path.display())]
    DeviceDirUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read network interface table: {0}")]
    InterfaceTable(#[source] nix::errno::Errno),

    #[error("cannot open control socket for {iface}: {source}")]
    ControlChannel {
        iface: String,
        #[source]
        source: nix::errno::Errno,
    },
}
