use std::collections::HashMap;
use std::net::IpAddr;

use crate::config::FilterConfig;
use crate::error::{Result, SubnetError};
use crate::matcher::{AddressMatcher, AllMatcher, Matcher, SubnetMatcher};
use crate::types::{AddressFamily, PrefixPolicy, RuleConfig, SubnetPattern};

/// Options controlling how rules are compiled.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterOptions {
    /// How to treat a prefix length longer than the address width
    pub prefix_policy: PrefixPolicy,
}

impl FilterOptions {
    /// Create new filter options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix policy.
    pub fn with_prefix_policy(mut self, policy: PrefixPolicy) -> Self {
        self.prefix_policy = policy;
        self
    }
}

/// A compiled rule ready for matching
#[derive(Debug, Clone)]
pub struct FilterRule<A> {
    /// The action for this rule
    pub action: A,
    /// Address matcher
    pub matcher: Matcher,
}

impl<A> FilterRule<A> {
    /// Check if this rule matches the given address
    pub fn matches(&self, addr: &IpAddr) -> bool {
        self.matcher.matches(addr)
    }
}

/// Ordered list of subnet rules; the first matching rule wins.
#[derive(Debug, Clone)]
pub struct SubnetFilter<A> {
    rules: Vec<FilterRule<A>>,
}

impl<A> SubnetFilter<A> {
    /// Create a new filter from compiled rules
    pub fn new(rules: Vec<FilterRule<A>>) -> Self {
        Self { rules }
    }

    /// Get the action of the first rule matching `addr`
    pub fn match_addr(&self, addr: &IpAddr) -> Option<&A> {
        self.matching_rule(addr).map(|rule| &rule.action)
    }

    /// Get the first rule matching `addr`
    pub fn matching_rule(&self, addr: &IpAddr) -> Option<&FilterRule<A>> {
        self.rules.iter().find(|rule| rule.matches(addr))
    }

    /// Get the number of rules
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<A: Clone> SubnetFilter<A> {
    /// Compile a filter from a decoded configuration document
    pub fn from_config(config: &FilterConfig, actions: &HashMap<String, A>) -> Result<Self> {
        compile(&config.rules, actions, &config.options())
    }
}

/// Compile rule configs into a SubnetFilter
pub fn compile<A: Clone>(
    rules: &[RuleConfig],
    actions: &HashMap<String, A>,
    options: &FilterOptions,
) -> Result<SubnetFilter<A>> {
    let mut compiled_rules = Vec::with_capacity(rules.len());

    for rule in rules {
        let compiled = compile_rule(rule, actions, options)?;
        compiled_rules.push(compiled);
    }

    tracing::debug!(
        rules = compiled_rules.len(),
        prefix_policy = ?options.prefix_policy,
        "compiled subnet filter"
    );

    Ok(SubnetFilter::new(compiled_rules))
}

/// Compile a single rule
fn compile_rule<A: Clone>(
    rule: &RuleConfig,
    actions: &HashMap<String, A>,
    options: &FilterOptions,
) -> Result<FilterRule<A>> {
    // Action map keys are expected in lowercase
    let action_key = rule.action.to_lowercase();
    let action = actions
        .get(&action_key)
        .cloned()
        .ok_or_else(|| SubnetError::UnknownAction(rule.action.clone()))?;

    let matcher = compile_matcher(rule, options)?;

    Ok(FilterRule { action, matcher })
}

/// Build the address matcher for a rule
fn compile_matcher(rule: &RuleConfig, options: &FilterOptions) -> Result<Matcher> {
    let address = match (rule.address, rule.prefix_len) {
        (None, None) => return Ok(Matcher::All(AllMatcher)),
        (None, Some(prefix_len)) => {
            return Err(SubnetError::ConfigError(format!(
                "rule '{}' has prefix length {} but no address",
                rule.action, prefix_len
            )))
        }
        (Some(address), _) => address,
    };

    let prefix_len = rule
        .prefix_len
        .unwrap_or_else(|| AddressFamily::of(&address).max_prefix_len());
    let pattern = SubnetPattern::with_policy(address, prefix_len, options.prefix_policy)?;

    Ok(Matcher::Subnet(SubnetMatcher::new(pattern)))
}
