use shared::error::{Error, Result};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::str::FromStr;

/// A transport address that is either a resolved IP or a host name, plus a port.
///
/// The default value has neither host name nor IP and renders as `:0`.
#[derive(Default, Debug, Clone)]
pub struct SocketAddress {
    hostname: String,
    ip: Option<IpAddr>,
    port: u16,
}

impl SocketAddress {
    /// Creates an address from a host name. A host name that is an IP literal
    /// also sets the IP.
    pub fn new(hostname: &str, port: u16) -> Self {
        Self {
            hostname: hostname.to_owned(),
            ip: hostname.parse().ok(),
            port,
        }
    }

    pub fn from_ip(ip: IpAddr, port: u16) -> Self {
        Self {
            hostname: String::new(),
            ip: Some(ip),
            port,
        }
    }

    pub fn hostname(&self) -> &str {
        self.hostname.as_str()
    }

    pub fn ip(&self) -> Option<IpAddr> {
        self.ip
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn set_port(&mut self, port: u16) {
        self.port = port;
    }

    /// Returns true when neither a host name nor an IP is set.
    pub fn is_nil(&self) -> bool {
        self.hostname.is_empty() && self.ip.is_none()
    }

    /// Returns true when only a host name is known.
    pub fn is_unresolved_ip(&self) -> bool {
        self.ip.is_none() && !self.hostname.is_empty()
    }

    pub fn to_socket_addr(&self) -> Option<SocketAddr> {
        self.ip.map(|ip| SocketAddr::new(ip, self.port))
    }

    /// Address precedence of the IP per RFC 3484-bis, section 2.1.
    ///
    /// Native IPv4 is preferred over 6to4 and Teredo. Unresolved addresses
    /// have precedence 0.
    pub fn ip_precedence(&self) -> i32 {
        match self.ip {
            None => 0,
            Some(IpAddr::V4(_)) => 30,
            Some(IpAddr::V6(ip)) => ipv6_precedence(&ip),
        }
    }

    /// Renders the address with the IP partially redacted so it can be logged.
    ///
    /// IPv4 keeps its first three octets, IPv6 its first three hextets. Host
    /// names are not redacted.
    pub fn to_sensitive_string(&self) -> String {
        format!("{}:{}", self.host_as_uri_string(true), self.port)
    }

    fn host_as_uri_string(&self, sensitive: bool) -> String {
        match self.ip {
            None => self.hostname.clone(),
            Some(IpAddr::V4(ip)) if sensitive => ipv4_sensitive_string(&ip),
            Some(IpAddr::V4(ip)) => ip.to_string(),
            Some(IpAddr::V6(ip)) if sensitive => format!("[{}]", ipv6_sensitive_string(&ip)),
            Some(IpAddr::V6(ip)) => format!("[{ip}]"),
        }
    }

    fn equal_ips(&self, other: &SocketAddress) -> bool {
        self.ip == other.ip
            && (self.ip.is_some_and(|ip| !ip.is_unspecified()) || self.hostname == other.hostname)
    }
}

fn ipv6_precedence(ip: &Ipv6Addr) -> i32 {
    let segments = ip.segments();
    let octets = ip.octets();

    if ip.is_loopback() {
        60
    } else if octets[0] & 0xfe == 0xfc {
        // ULA, fc00::/7
        50
    } else if ip.to_ipv4_mapped().is_some() {
        30
    } else if segments[0] == 0x2002 {
        // 6to4
        20
    } else if segments[0] == 0x2001 && segments[1] == 0 {
        // Teredo
        10
    } else if octets[..12].iter().all(|b| *b == 0)
        || (octets[0] == 0xfe && octets[1] & 0xc0 == 0xc0)
        || segments[0] == 0x3ffe
    {
        // v4-compatible, site-local and 6bone
        1
    } else {
        40
    }
}

fn ipv4_sensitive_string(ip: &Ipv4Addr) -> String {
    let [a, b, c, _] = ip.octets();
    format!("{a}.{b}.{c}.x")
}

fn ipv6_sensitive_string(ip: &Ipv6Addr) -> String {
    let segments = ip.segments();
    format!(
        "{:x}:{:x}:{:x}:x:x:x:x:x",
        segments[0], segments[1], segments[2]
    )
}

/// Two addresses are equal when IP and port match. Addresses without a
/// concrete IP must also agree on the host name.
impl PartialEq for SocketAddress {
    fn eq(&self, other: &Self) -> bool {
        self.equal_ips(other) && self.port == other.port
    }
}

impl Eq for SocketAddress {}

impl fmt::Display for SocketAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host_as_uri_string(false), self.port)
    }
}

impl From<SocketAddr> for SocketAddress {
    fn from(addr: SocketAddr) -> Self {
        Self::from_ip(addr.ip(), addr.port())
    }
}

/// Parses `host:port`, `a.b.c.d:port` or `[v6]:port`.
impl FromStr for SocketAddress {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        if let Some(rest) = raw.strip_prefix('[') {
            let (host, port) = rest.split_once("]:").ok_or(Error::ErrAddressParseFailed)?;
            let ip: Ipv6Addr = host.parse()?;
            Ok(Self::from_ip(IpAddr::V6(ip), port.parse()?))
        } else {
            let (host, port) = raw.split_once(':').ok_or(Error::ErrAddressParseFailed)?;
            if host.is_empty() {
                return Err(Error::ErrAddressParseFailed);
            }
            Ok(Self::new(host, port.parse()?))
        }
    }
}
