//! Scan target validation.
//!
//! Only literal IP addresses are accepted as scan targets; hostname
//! resolution is left to the transport layer, where a lookup failure is
//! indistinguishable from a closed port.

use std::net::IpAddr;

/// Returns true when `s` parses as an IPv4 or IPv6 address literal.
pub fn is_valid_ip(s: &str) -> bool {
    s.parse::<IpAddr>().is_ok()
}
