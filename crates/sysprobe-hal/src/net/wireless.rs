//! Wireless extension probe (`SIOCGIWNAME`).

use crate::{HalError, HalResult};
use nix::sys::socket::{socket, AddressFamily, SockFlag, SockType};
use std::os::fd::AsRawFd;

mod sys {
    pub const SIOCGIWNAME: u32 = 0x8B01;

    /// `struct iwreq` from `<linux/wireless.h>`: the interface name followed
    /// by a 16-byte union we never inspect.
    #[repr(C)]
    pub struct IwReq {
        pub ifr_name: [libc::c_char; libc::IFNAMSIZ],
        #[allow(dead_code)]
        pub data: [u8; 16],
    }

    impl IwReq {
        /// Builds a request for `ifname`, or `None` if the name plus its NUL
        /// terminator does not fit `IFNAMSIZ`.
        pub fn for_interface(ifname: &str) -> Option<Self> {
            let bytes = ifname.as_bytes();
            if bytes.len() >= libc::IFNAMSIZ || bytes.contains(&0) {
                return None;
            }
            let mut req = IwReq {
                ifr_name: [0; libc::IFNAMSIZ],
                data: [0; 16],
            };
            for (dst, src) in req.ifr_name.iter_mut().zip(bytes) {
                *dst = *src as libc::c_char;
            }
            Some(req)
        }
    }

    nix::ioctl_read_bad!(siocgiwname, SIOCGIWNAME, IwReq);
}

use sys::{siocgiwname, IwReq};

/// Asks the kernel whether `ifname` speaks wireless extensions.
///
/// A successful `SIOCGIWNAME` means wireless; any ioctl error means wired.
/// Only a failure to open the control socket is reported as an error. The
/// socket is an `OwnedFd` and is closed when this function returns.
pub fn is_wireless(ifname: &str) -> HalResult<bool> {
    let Some(mut req) = IwReq::for_interface(ifname) else {
        log::debug!("interface name {ifname:?} does not fit IFNAMSIZ; treating as wired");
        return Ok(false);
    };

    let sock = socket(
        AddressFamily::Inet,
        SockType::Stream,
        SockFlag::SOCK_CLOEXEC,
        None,
    )
    .map_err(|source| HalError::ControlChannel {
        iface: ifname.to_string(),
        source,
    })?;

    // SAFETY: `req` is a properly sized `iwreq` that outlives the call, and
    // `sock` is an open descriptor for the duration of the ioctl.
    match unsafe { siocgiwname(sock.as_raw_fd(), &mut req) } {
        Ok(_) => Ok(true),
        Err(errno) => {
            log::debug!("SIOCGIWNAME on {ifname}: {errno}; treating as wired");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iwreq_matches_kernel_layout() {
        assert_eq!(std::mem::size_of::<IwReq>(), 32);
    }

    #[test]
    fn request_name_is_nul_terminated() {
        let req = IwReq::for_interface("wlan0").unwrap();
        let name: Vec<u8> = req.ifr_name.iter().map(|&c| c as u8).collect();
        assert_eq!(&name[..5], b"wlan0");
        assert!(name[5..].iter().all(|&b| b == 0));
    }

    #[test]
    fn overlong_names_are_rejected() {
        assert!(IwReq::for_interface("abcdefghijklmno").is_some());
        assert!(IwReq::for_interface("abcdefghijklmnop").is_none());
        assert!(IwReq::for_interface("bad\0name").is_none());
    }

    #[test]
    fn overlong_name_is_wired_without_a_socket() {
        assert!(!is_wireless("this-name-is-far-too-long").unwrap());
    }

    #[test]
    fn loopback_is_never_wireless() {
        assert!(!matches!(is_wireless("lo"), Ok(true)));
    }
}
