//! IP and location rules

use std::net::Ipv4Addr;

use crate::lookup::Fields;

use super::Rule;

pub(super) const RULES: &[(&str, Rule)] = &[
    ("ipGeolocation", geolocation),
    ("ipReverseDnsLookup", reverse_dns),
    ("ipAsnIspDetection", asn_isp),
    ("ipToDomainHostname", ip_to_domain),
    ("ipBlacklistCheck", blacklist_check),
    ("portScanner", port_scanner),
    ("ipTraceroute", traceroute),
    ("subnetCalculator", subnet_calculator),
    ("localIpFinder", local_ip),
    ("vpnProxyTorDetector", vpn_detector),
];

/// Well-known public resolvers
const GOOGLE_DNS: &str = "8.8.8.8";
const CLOUDFLARE_DNS: &str = "1.1.1.1";

/// TEST-NET-1 address used as the listed example
const BLACKLISTED: &str = "192.0.2.1";
const LOOPBACK: &str = "127.0.0.1";
const KNOWN_VPN_EXIT: &str = "104.28.1.1";

fn geolocation(query: &str) -> Fields {
    let (country, city, region, lat, lon, isp, timezone, postal) = match query {
        GOOGLE_DNS => (
            "US",
            "Mountain View",
            "California",
            "37.4056",
            "-122.0775",
            "AS15169 Google LLC",
            "America/Los_Angeles",
            "94043",
        ),
        CLOUDFLARE_DNS => (
            "AU",
            "Brisbane",
            "Queensland",
            "-27.4820",
            "153.0136",
            "AS13335 Cloudflare, Inc.",
            "Australia/Brisbane",
            "4101",
        ),
        _ => (
            "US",
            "Anytown (simulated)",
            "N/A",
            "0.0000",
            "0.0000",
            "Simulated ISP",
            "UTC",
            "N/A",
        ),
    };

    Fields::new()
        .with("country", country)
        .with("city", city)
        .with("region", region)
        .with("latitude", lat)
        .with("longitude", lon)
        .with("isp", isp)
        .with("timezone", timezone)
        .with("postal", postal)
}

fn reverse_dns(query: &str) -> Fields {
    let host = if query == GOOGLE_DNS { "dns.google" } else { "Unknown Host" };
    Fields::new().with("reverseDns", host)
}

fn asn_isp(_query: &str) -> Fields {
    Fields::new()
        .with("asn", "AS15169")
        .with("isp", "Google LLC")
        .with("organization", "Google")
}

fn ip_to_domain(query: &str) -> Fields {
    let domain = if query == CLOUDFLARE_DNS { "cloudflare.com" } else { "Unknown" };
    Fields::new().with("domain", domain)
}

fn blacklist_check(query: &str) -> Fields {
    let listed = if query == BLACKLISTED { "Yes (Spamhaus, Barracuda)" } else { "No" };
    Fields::new().with("blacklisted", listed)
}

fn port_scanner(query: &str) -> Fields {
    let ports: Vec<&str> = if query == LOOPBACK {
        vec!["22 (SSH)", "80 (HTTP)", "443 (HTTPS)"]
    } else {
        vec!["No common ports open"]
    };
    Fields::new().with("openPorts", ports)
}

fn traceroute(_query: &str) -> Fields {
    Fields::new().with(
        "hops",
        vec![
            "1. Router (192.168.1.1)",
            "2. ISP Gateway (10.0.0.1)",
            "3. Next Hop (x.x.x.x)",
            "... (simulated)",
        ],
    )
}

/// Network details for an IPv4 CIDR such as `10.0.0.0/8`
struct Subnet {
    network: Ipv4Addr,
    broadcast: Ipv4Addr,
    netmask: Ipv4Addr,
    usable_hosts: i64,
}

fn parse_subnet(query: &str) -> Option<Subnet> {
    let (addr, prefix) = query.trim().split_once('/')?;
    let addr: Ipv4Addr = addr.trim().parse().ok()?;
    let prefix: u32 = prefix.trim().parse().ok()?;
    if prefix > 32 {
        return None;
    }

    let mask = if prefix == 0 { 0 } else { u32::MAX << (32 - prefix) };
    let network = u32::from(addr) & mask;
    let broadcast = network | !mask;
    let usable_hosts = match prefix {
        32 => 1,
        31 => 2,
        p => (1i64 << (32 - p)) - 2,
    };

    Some(Subnet {
        network: Ipv4Addr::from(network),
        broadcast: Ipv4Addr::from(broadcast),
        netmask: Ipv4Addr::from(mask),
        usable_hosts,
    })
}

fn subnet_calculator(query: &str) -> Fields {
    match parse_subnet(query) {
        Some(subnet) => Fields::new()
            .with("networkAddress", subnet.network.to_string())
            .with("broadcastAddress", subnet.broadcast.to_string())
            .with("netmask", subnet.netmask.to_string())
            .with("usableHosts", subnet.usable_hosts),
        None => Fields::new()
            .with("networkAddress", "192.168.1.0")
            .with("broadcastAddress", "192.168.1.255")
            .with("netmask", "255.255.255.0")
            .with("usableHosts", 254),
    }
}

fn local_ip(_query: &str) -> Fields {
    Fields::new().with("localIp", "192.168.1.100 (simulated)")
}

fn vpn_detector(query: &str) -> Fields {
    let detected = if query.contains(KNOWN_VPN_EXIT) {
        "VPN/Proxy Detected"
    } else {
        "No VPN/Proxy/TOR"
    };
    Fields::new().with("detected", detected)
}
