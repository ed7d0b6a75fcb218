use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use ipnet::IpNet;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SubnetError};
use crate::mask::{ipv4_mask, ipv6_masks, IPV4_BITS, IPV6_BITS};
use crate::matcher::{match_ipv4, match_ipv6, split_words};

/// IP address family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    /// Get the family of an address
    pub fn of(addr: &IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => AddressFamily::V4,
            IpAddr::V6(_) => AddressFamily::V6,
        }
    }

    /// Longest valid prefix length for this family
    pub fn max_prefix_len(&self) -> u8 {
        match self {
            AddressFamily::V4 => IPV4_BITS,
            AddressFamily::V6 => IPV6_BITS,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::V4 => f.write_str("IPv4"),
            AddressFamily::V6 => f.write_str("IPv6"),
        }
    }
}

/// What to do with a prefix length longer than the address width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefixPolicy {
    /// Fail with `SubnetError::InvalidPrefixLength`
    #[default]
    Reject,
    /// Use the family's maximum prefix length instead
    Clamp,
}

/// A pattern address and the number of leading bits a candidate must share with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPattern")]
pub struct SubnetPattern {
    address: IpAddr,
    prefix_len: u8,
}

#[derive(Deserialize)]
struct RawPattern {
    address: IpAddr,
    prefix_len: u8,
}

impl TryFrom<RawPattern> for SubnetPattern {
    type Error = SubnetError;

    fn try_from(raw: RawPattern) -> Result<Self> {
        SubnetPattern::new(raw.address, raw.prefix_len)
    }
}

impl SubnetPattern {
    /// Create a pattern, rejecting prefix lengths longer than the address.
    pub fn new(address: IpAddr, prefix_len: u8) -> Result<Self> {
        Self::with_policy(address, prefix_len, PrefixPolicy::Reject)
    }

    /// Create a pattern, handling an oversized prefix according to `policy`.
    pub fn with_policy(address: IpAddr, prefix_len: u8, policy: PrefixPolicy) -> Result<Self> {
        let family = AddressFamily::of(&address);
        let max = family.max_prefix_len();
        if prefix_len <= max {
            return Ok(Self {
                address,
                prefix_len,
            });
        }

        match policy {
            PrefixPolicy::Reject => Err(SubnetError::InvalidPrefixLength {
                family,
                prefix_len,
                max,
            }),
            PrefixPolicy::Clamp => {
                tracing::warn!(
                    %address,
                    prefix_len,
                    max,
                    "prefix length exceeds address width, clamping"
                );
                Ok(Self {
                    address,
                    prefix_len: max,
                })
            }
        }
    }

    /// Create a pattern that only matches `address` itself
    pub fn host(address: IpAddr) -> Self {
        Self {
            address,
            prefix_len: AddressFamily::of(&address).max_prefix_len(),
        }
    }

    pub fn address(&self) -> IpAddr {
        self.address
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub fn family(&self) -> AddressFamily {
        AddressFamily::of(&self.address)
    }

    /// The pattern address with all host bits cleared
    pub fn network(&self) -> IpAddr {
        match self.address {
            IpAddr::V4(v4) => IpAddr::V4(Ipv4Addr::from(
                u32::from(v4) & ipv4_mask(self.prefix_len),
            )),
            IpAddr::V6(v6) => {
                let (upper, lower) = split_words(&v6.octets());
                let (upper_mask, lower_mask) = ipv6_masks(self.prefix_len);
                let bits = (u128::from(upper & upper_mask) << 64) | u128::from(lower & lower_mask);
                IpAddr::V6(Ipv6Addr::from(bits))
            }
        }
    }

    /// Check whether `addr` lies in this subnet.
    ///
    /// Addresses of the other family never match.
    pub fn matches(&self, addr: &IpAddr) -> bool {
        match (self.address, addr) {
            (IpAddr::V4(pattern), IpAddr::V4(candidate)) => {
                match_ipv4(&candidate.octets(), &pattern.octets(), self.prefix_len)
            }
            (IpAddr::V6(pattern), IpAddr::V6(candidate)) => {
                match_ipv6(&candidate.octets(), &pattern.octets(), self.prefix_len)
            }
            _ => false,
        }
    }
}

impl From<IpNet> for SubnetPattern {
    fn from(net: IpNet) -> Self {
        Self {
            address: net.addr(),
            prefix_len: net.prefix_len(),
        }
    }
}

impl fmt::Display for SubnetPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix_len)
    }
}

/// A single filter rule as it appears in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Action name, resolved against the action map at compile time
    pub action: String,
    /// Pattern address; `None` matches every address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<IpAddr>,
    /// Prefix length; `None` means the full address width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix_len: Option<u8>,
}

impl RuleConfig {
    /// Rule matching every address
    pub fn all(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            address: None,
            prefix_len: None,
        }
    }

    /// Rule matching a single address
    pub fn host(action: impl Into<String>, address: IpAddr) -> Self {
        Self {
            action: action.into(),
            address: Some(address),
            prefix_len: None,
        }
    }

    /// Rule matching a subnet
    pub fn subnet(action: impl Into<String>, address: IpAddr, prefix_len: u8) -> Self {
        Self {
            action: action.into(),
            address: Some(address),
            prefix_len: Some(prefix_len),
        }
    }
}
