//! CIDR notation utilities for IPv4 and IPv6.
//!
//! Provides the [`Cidr`] struct for representing a network prefix (base
//! address + prefix length) along with the mask arithmetic used to test
//! address membership.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::net::IpAddr;
use std::str::FromStr;

/// Maximum prefix length for an IPv4 network (32 bits).
pub const MAX_LENGTH_V4: u8 = 32;
/// Maximum prefix length for an IPv6 network (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

/// Convert an IPv4 prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use aws_region_summary::models::v4_mask;
/// assert_eq!(v4_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn v4_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH_V4 {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH_V4 - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Convert an IPv6 prefix length to a subnet mask as u128.
pub fn v6_mask(len: u8) -> Result<u128, Box<dyn Error>> {
    if len > MAX_LENGTH_V6 {
        Err("Network length is too long".into())
    } else if len == 0 {
        // u128 has no wider type to borrow the shift trick from
        Ok(0)
    } else {
        let right_len = MAX_LENGTH_V6 - len;
        Ok((u128::MAX >> right_len) << right_len)
    }
}

/// A network prefix in CIDR notation, IPv4 or IPv6.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    /// The base address of the prefix.
    pub addr: IpAddr,
    /// The prefix length (0-32 for IPv4, 0-128 for IPv6).
    pub mask: u8,
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.mask);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::new(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}

impl Cidr {
    /// Create a new [`Cidr`] from a CIDR string (e.g. "10.0.0.0/24" or "2600:1f14::/35").
    pub fn new(addr_cidr: &str) -> Result<Cidr, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err("Invalid address/mask".into());
        }
        let addr = IpAddr::from_str(parts[0]).map_err(|_| format!("Invalid address {}", parts[0]))?;
        let mask: u8 = parts[1].parse()?;
        let max = match addr {
            IpAddr::V4(_) => MAX_LENGTH_V4,
            IpAddr::V6(_) => MAX_LENGTH_V6,
        };
        if mask > max {
            return Err("Network length is too long".into());
        }
        Ok(Cidr { addr, mask })
    }

    /// Maximum prefix length for this prefix's address family.
    pub fn max_length(&self) -> u8 {
        match self.addr {
            IpAddr::V4(_) => MAX_LENGTH_V4,
            IpAddr::V6(_) => MAX_LENGTH_V6,
        }
    }

    /// Check if an IP address is contained within this prefix.
    ///
    /// Addresses of the other family never match.
    pub fn contains(&self, ip: IpAddr) -> bool {
        match (self.addr, ip) {
            (IpAddr::V4(net), IpAddr::V4(ip)) => match v4_mask(self.mask) {
                Ok(mask) => u32::from(ip) & mask == u32::from(net) & mask,
                Err(_) => false,
            },
            (IpAddr::V6(net), IpAddr::V6(ip)) => match v6_mask(self.mask) {
                Ok(mask) => u128::from(ip) & mask == u128::from(net) & mask,
                Err(_) => false,
            },
            _ => false,
        }
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
