use super::*;
use shared::error::{Error, Result};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

#[test]
fn test_ip_precedence() -> Result<()> {
    let tests = vec![
        ("192.168.1.1", 30),
        ("::1", 60),
        ("fd00::1", 50),
        ("::ffff:10.0.0.1", 30),
        ("2002:c000:0204::1", 20),
        ("2001:0:4136:e378:8000:63bf:3fff:fdd2", 10),
        ("::10.0.0.1", 1),
        ("fec0::1", 1),
        ("3ffe::1", 1),
        ("2001:db8::1", 40),
        ("2607:f8b0:4005:80a::200e", 40),
    ];

    for (ip, expected) in tests {
        let addr = SocketAddress::from_ip(ip.parse()?, 1234);
        assert_eq!(addr.ip_precedence(), expected, "precedence of {ip}");
    }

    assert_eq!(SocketAddress::default().ip_precedence(), 0);
    assert_eq!(SocketAddress::new("example.org", 80).ip_precedence(), 0);

    Ok(())
}

#[test]
fn test_socket_address_to_string() {
    let v4 = SocketAddress::from_ip(IpAddr::V4(Ipv4Addr::new(1, 2, 3, 4)), 5678);
    assert_eq!(v4.to_string(), "1.2.3.4:5678");
    assert_eq!(v4.to_sensitive_string(), "1.2.3.x:5678");

    let v6 = SocketAddress::from_ip(
        IpAddr::V6(Ipv6Addr::new(0x2001, 0xdb8, 0x1, 0x2, 0x3, 0x4, 0x5, 0x6)),
        443,
    );
    assert_eq!(v6.to_string(), "[2001:db8:1:2:3:4:5:6]:443");
    assert_eq!(v6.to_sensitive_string(), "[2001:db8:1:x:x:x:x:x]:443");

    let host = SocketAddress::new("stun.example.org", 3478);
    assert_eq!(host.to_string(), "stun.example.org:3478");
    assert_eq!(host.to_sensitive_string(), "stun.example.org:3478");

    assert_eq!(SocketAddress::default().to_string(), ":0");
    assert_eq!(SocketAddress::default().to_sensitive_string(), ":0");
}

#[test]
fn test_socket_address_ip_literal_hostname() {
    let addr = SocketAddress::new("10.0.0.1", 9);
    assert_eq!(addr.ip(), Some(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1))));
    assert!(!addr.is_unresolved_ip());
    assert_eq!(addr.to_sensitive_string(), "10.0.0.x:9");
    assert_eq!(
        addr,
        SocketAddress::from_ip(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)), 9)
    );
}

#[test]
fn test_socket_address_equality() {
    let a = SocketAddress::from_ip(IpAddr::V4(Ipv4Addr::new(1, 2, 3, 4)), 5000);

    assert_eq!(a, a.clone());
    assert_ne!(a, SocketAddress::from_ip(IpAddr::V4(Ipv4Addr::new(1, 2, 3, 5)), 5000));

    let mut other_port = a.clone();
    other_port.set_port(5001);
    assert_ne!(a, other_port);

    // unresolved addresses fall back to the host name
    assert_eq!(
        SocketAddress::new("a.example", 1),
        SocketAddress::new("a.example", 1)
    );
    assert_ne!(
        SocketAddress::new("a.example", 1),
        SocketAddress::new("b.example", 1)
    );

    // so do unspecified IPs
    let any = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 1);
    assert_eq!(SocketAddress::from(any), SocketAddress::from(any));
    assert_ne!(SocketAddress::from(any), SocketAddress::new("0.0.0.0", 1));

    assert_eq!(SocketAddress::default(), SocketAddress::default());
    assert!(SocketAddress::default().is_nil());
}

#[test]
fn test_socket_address_from_str() -> Result<()> {
    let v4: SocketAddress = "192.168.0.1:3478".parse()?;
    assert_eq!(
        v4.to_socket_addr(),
        Some(SocketAddr::new(IpAddr::V4(Ipv4Addr::new(192, 168, 0, 1)), 3478))
    );

    let v6: SocketAddress = "[fe80::1]:9".parse()?;
    assert_eq!(v6.to_string(), "[fe80::1]:9");

    let host: SocketAddress = "turn.example.org:443".parse()?;
    assert!(host.is_unresolved_ip());
    assert_eq!(host.hostname(), "turn.example.org");
    assert_eq!(host.port(), 443);

    assert_eq!(
        "no-port".parse::<SocketAddress>(),
        Err(Error::ErrAddressParseFailed)
    );
    assert_eq!(
        "[::1".parse::<SocketAddress>(),
        Err(Error::ErrAddressParseFailed)
    );
    assert_eq!(
        ":80".parse::<SocketAddress>(),
        Err(Error::ErrAddressParseFailed)
    );
    assert!(matches!(
        "[zz::1]:80".parse::<SocketAddress>(),
        Err(Error::ParseIp(_))
    ));
    assert!(matches!(
        "1.2.3.4:70000".parse::<SocketAddress>(),
        Err(Error::ParseInt(_))
    ));

    Ok(())
}

#[test]
fn test_adapter_type() {
    assert_eq!(AdapterType::default(), AdapterType::Unknown);

    let tests = vec![
        (AdapterType::Unknown, "unknown", 0u8),
        (AdapterType::Ethernet, "ethernet", 1),
        (AdapterType::Wifi, "wifi", 2),
        (AdapterType::Cellular, "cellular", 4),
        (AdapterType::Vpn, "vpn", 8),
        (AdapterType::Loopback, "loopback", 16),
    ];

    for (adapter_type, name, value) in tests {
        assert_eq!(adapter_type.to_string(), name);
        assert_eq!(AdapterType::from(name), adapter_type);
        assert_eq!(adapter_type as u8, value);
    }

    assert_eq!(AdapterType::from("token-ring"), AdapterType::Unknown);
}
