//! Subnet Match - CIDR-style subnet membership checks for IPv4 and IPv6
//!
//! This library provides:
//! - Prefix length to bitmask derivation for 32-bit and 64-bit words
//! - Allocation-free wildcard matching of raw network-order addresses
//! - Validated subnet patterns built on `std::net::IpAddr`
//! - Ordered first-match subnet filters loaded from JSON configuration
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use std::net::IpAddr;
//! use subnet_match::{compile, match_ipv4, FilterOptions, RuleConfig};
//!
//! // Raw matching on network-order bytes
//! assert!(match_ipv4(&[192, 168, 1, 5], &[192, 168, 1, 0], 24));
//! assert!(!match_ipv4(&[192, 168, 2, 5], &[192, 168, 1, 0], 24));
//!
//! // Define actions
//! let mut actions = HashMap::new();
//! actions.insert("allow".to_string(), "ALLOW");
//! actions.insert("deny".to_string(), "DENY");
//!
//! // Compile rules
//! let rules = vec![
//!     RuleConfig::subnet("allow", "10.0.0.0".parse().unwrap(), 8),
//!     RuleConfig::all("deny"),
//! ];
//! let filter = compile(&rules, &actions, &FilterOptions::new()).unwrap();
//!
//! // Match addresses
//! let addr: IpAddr = "10.1.2.3".parse().unwrap();
//! assert_eq!(filter.match_addr(&addr), Some(&"ALLOW"));
//! ```
//!
//! # Prefix Lengths
//!
//! | Family | Valid range | `0` | Maximum |
//! |--------|-------------|-----|---------|
//! | IPv4 | `0..=32` | matches everything | exact address |
//! | IPv6 | `0..=128` | matches everything | exact address |
//!
//! The raw `match_ipv4` / `match_ipv6` functions treat a longer prefix as the
//! maximum. `SubnetPattern` rejects it unless built with `PrefixPolicy::Clamp`.

pub mod config;
pub mod error;
pub mod filter;
pub mod mask;
pub mod matcher;
pub mod types;

// Re-export commonly used items
pub use config::{parse_config, parse_config_from_file, FilterConfig};
pub use error::{Result, SubnetError};
pub use filter::{compile, FilterOptions, FilterRule, SubnetFilter};
pub use mask::{ipv4_mask, ipv6_masks, ipv6_word_mask};
pub use matcher::{match_ipv4, match_ipv6, AddressMatcher, AllMatcher, Matcher, SubnetMatcher};
pub use types::{AddressFamily, PrefixPolicy, RuleConfig, SubnetPattern};
