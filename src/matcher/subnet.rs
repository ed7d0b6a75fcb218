use std::net::IpAddr;

use ipnet::IpNet;

use super::AddressMatcher;
use crate::types::SubnetPattern;

/// Subnet matcher - matches addresses sharing a prefix with a pattern address
#[derive(Debug, Clone)]
pub struct SubnetMatcher {
    pattern: SubnetPattern,
}

impl SubnetMatcher {
    pub fn new(pattern: SubnetPattern) -> Self {
        Self { pattern }
    }

    pub fn pattern(&self) -> &SubnetPattern {
        &self.pattern
    }
}

impl From<IpNet> for SubnetMatcher {
    fn from(network: IpNet) -> Self {
        Self::new(SubnetPattern::from(network))
    }
}

impl AddressMatcher for SubnetMatcher {
    fn matches(&self, addr: &IpAddr) -> bool {
        self.pattern.matches(addr)
    }
}

#[cfg(test)]
mod tests {
    use std::net::{Ipv4Addr, Ipv6Addr};

    use super::*;

    #[test]
    fn test_host_matcher() {
        let v4 = Ipv4Addr::new(192, 168, 1, 1);
        let matcher = SubnetMatcher::new(SubnetPattern::host(IpAddr::V4(v4)));

        assert!(matcher.matches(&IpAddr::V4(v4)));

        let other_v4 = Ipv4Addr::new(192, 168, 1, 2);
        assert!(!matcher.matches(&IpAddr::V4(other_v4)));
    }

    #[test]
    fn test_subnet_matcher() {
        let network: IpNet = "192.168.0.0/16".parse().unwrap();
        let matcher = SubnetMatcher::from(network);

        assert!(matcher.matches(&IpAddr::V4(Ipv4Addr::new(192, 168, 1, 1))));
        assert!(matcher.matches(&IpAddr::V4(Ipv4Addr::new(192, 168, 255, 255))));
        assert!(!matcher.matches(&IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1))));
    }

    #[test]
    fn test_ipv6_subnet_matcher() {
        let network: IpNet = "2001:db8::/32".parse().unwrap();
        let matcher = SubnetMatcher::from(network);

        let v6_1 = Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1);
        assert!(matcher.matches(&IpAddr::V6(v6_1)));

        let v6_2 = Ipv6Addr::new(0x2001, 0xdb9, 0, 0, 0, 0, 0, 1);
        assert!(!matcher.matches(&IpAddr::V6(v6_2)));
    }

    #[test]
    fn test_subnet_matcher_ignores_other_family() {
        let network: IpNet = "::/0".parse().unwrap();
        let matcher = SubnetMatcher::from(network);

        assert!(matcher.matches(&IpAddr::V6(Ipv6Addr::LOCALHOST)));
        assert!(!matcher.matches(&IpAddr::V4(Ipv4Addr::LOCALHOST)));
    }
}
