//! IP address and CIDR block validation

use std::net::{Ipv4Addr, Ipv6Addr};

use vela_core::diagnostic::{AttributePath, Diagnostic};

/// Address strictly in the IPv4 family
pub(super) fn check_ipv4_address(path: &AttributePath, value: &str) -> Option<Diagnostic> {
    if value.parse::<Ipv4Addr>().is_ok() {
        return None;
    }
    Some(Diagnostic::attribute_error(
        path.clone(),
        "Invalid IPv4 Address",
        format!("\"{}\" is not a valid IPv4 address", value),
    ))
}

/// Address strictly in the IPv6 family. A v4-mapped address
/// (`::ffff:a.b.c.d`) names an IPv4 endpoint and is rejected.
pub(super) fn check_ipv6_address(path: &AttributePath, value: &str) -> Option<Diagnostic> {
    match value.parse::<Ipv6Addr>() {
        Ok(addr) if addr.to_ipv4_mapped().is_none() => None,
        _ => Some(Diagnostic::attribute_error(
            path.clone(),
            "Invalid IPv6 Address",
            format!("\"{}\" is not a valid IPv6 address", value),
        )),
    }
}

/// IPv4 CIDR block whose host bits are all zero
pub(super) fn check_ipv4_cidr_network_address(
    path: &AttributePath,
    value: &str,
) -> Option<Diagnostic> {
    match parse_ipv4_cidr(value) {
        Ok(None) => None,
        Ok(Some(canonical)) => Some(Diagnostic::attribute_error(
            path.clone(),
            "Invalid CIDR Network Address",
            format!(
                "\"{}\" has host bits set; the network address is \"{}\"",
                value, canonical
            ),
        )),
        Err(()) => Some(Diagnostic::attribute_error(
            path.clone(),
            "Invalid CIDR Network Address",
            format!("\"{}\" is not a valid IPv4 CIDR block", value),
        )),
    }
}

/// IPv6 CIDR block whose host bits are all zero
pub(super) fn check_ipv6_cidr_network_address(
    path: &AttributePath,
    value: &str,
) -> Option<Diagnostic> {
    match parse_ipv6_cidr(value) {
        Ok(None) => None,
        Ok(Some(canonical)) => Some(Diagnostic::attribute_error(
            path.clone(),
            "Invalid CIDR Network Address",
            format!(
                "\"{}\" has host bits set; the network address is \"{}\"",
                value, canonical
            ),
        )),
        Err(()) => Some(Diagnostic::attribute_error(
            path.clone(),
            "Invalid CIDR Network Address",
            format!("\"{}\" is not a valid IPv6 CIDR block", value),
        )),
    }
}

/// Ok(None) when the block is its own network address, Ok(Some(canonical))
/// when host bits are set, Err on parse failure
fn parse_ipv4_cidr(value: &str) -> Result<Option<String>, ()> {
    let (addr, len) = split_cidr(value)?;
    let addr: Ipv4Addr = addr.parse().map_err(|_| ())?;
    if len > 32 {
        return Err(());
    }
    let bits = u32::from(addr);
    let mask = if len == 0 { 0 } else { u32::MAX << (32 - len) };
    if bits & !mask == 0 {
        Ok(None)
    } else {
        Ok(Some(format!("{}/{}", Ipv4Addr::from(bits & mask), len)))
    }
}

fn parse_ipv6_cidr(value: &str) -> Result<Option<String>, ()> {
    let (addr, len) = split_cidr(value)?;
    let addr: Ipv6Addr = addr.parse().map_err(|_| ())?;
    if len > 128 {
        return Err(());
    }
    let bits = u128::from(addr);
    let mask = if len == 0 { 0 } else { u128::MAX << (128 - len) };
    if bits & !mask == 0 {
        Ok(None)
    } else {
        Ok(Some(format!("{}/{}", Ipv6Addr::from(bits & mask), len)))
    }
}

fn split_cidr(value: &str) -> Result<(&str, u32), ()> {
    let (addr, len) = value.split_once('/').ok_or(())?;
    // Reject "+3", " 3" and other forms u32::from_str tolerates upstream
    if len.is_empty() || !len.bytes().all(|b| b.is_ascii_digit()) {
        return Err(());
    }
    Ok((addr, len.parse().map_err(|_| ())?))
}
