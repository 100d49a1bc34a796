use serde::{Deserialize, Serialize};
use std::fmt;

const UNKNOWN: &str = "unknown";
const ETHERNET: &str = "ethernet";
const WIFI: &str = "wifi";
const CELLULAR: &str = "cellular";
const VPN: &str = "vpn";
const LOOPBACK: &str = "loopback";

/// Kind of network adapter a candidate was gathered on.
///
/// Only carried as a tag on `Candidate`; it never takes part in equivalence.
#[repr(u8)]
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdapterType {
    #[default]
    #[serde(rename = "unknown")]
    Unknown = 0,
    #[serde(rename = "ethernet")]
    Ethernet = 1 << 0,
    #[serde(rename = "wifi")]
    Wifi = 1 << 1,
    #[serde(rename = "cellular")]
    Cellular = 1 << 2,
    #[serde(rename = "vpn")]
    Vpn = 1 << 3,
    #[serde(rename = "loopback")]
    Loopback = 1 << 4,
}

impl fmt::Display for AdapterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            AdapterType::Unknown => UNKNOWN,
            AdapterType::Ethernet => ETHERNET,
            AdapterType::Wifi => WIFI,
            AdapterType::Cellular => CELLULAR,
            AdapterType::Vpn => VPN,
            AdapterType::Loopback => LOOPBACK,
        };
        write!(f, "{s}")
    }
}

impl From<&str> for AdapterType {
    fn from(raw: &str) -> Self {
        match raw {
            ETHERNET => Self::Ethernet,
            WIFI => Self::Wifi,
            CELLULAR => Self::Cellular,
            VPN => Self::Vpn,
            LOOPBACK => Self::Loopback,
            _ => Self::Unknown,
        }
    }
}
