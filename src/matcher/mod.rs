mod subnet;
mod wildcard;

pub use subnet::SubnetMatcher;
pub use wildcard::{match_ipv4, match_ipv6};

pub(crate) use wildcard::split_words;

use std::net::IpAddr;

/// Trait for address matchers
pub trait AddressMatcher: Send + Sync {
    /// Check if the address matches this matcher
    fn matches(&self, addr: &IpAddr) -> bool;
}

/// All matcher - matches everything
#[derive(Debug, Clone)]
pub struct AllMatcher;

impl AddressMatcher for AllMatcher {
    fn matches(&self, _addr: &IpAddr) -> bool {
        true
    }
}

/// Enum wrapper for all matcher types
#[derive(Debug, Clone)]
pub enum Matcher {
    All(AllMatcher),
    Subnet(SubnetMatcher),
}

impl AddressMatcher for Matcher {
    fn matches(&self, addr: &IpAddr) -> bool {
        match self {
            Matcher::All(m) => m.matches(addr),
            Matcher::Subnet(m) => m.matches(addr),
        }
    }
}
