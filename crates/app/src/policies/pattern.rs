//! Pattern-derived policy — looks up a role token extracted from the host name.
//!
//! With the default convention `<env>-<role><NN>-<site>`, the host
//! `p-servername01-dc1` is looked up as `servername`.

use std::collections::BTreeSet;

use hcloud_inventory_domain::error::PolicyError;
use hcloud_inventory_domain::mapping::GroupMapping;
use regex::Regex;

use crate::ports::GroupingPolicy;

/// Default naming convention: one-letter prefix, alphanumeric role token,
/// at least two trailing digits, then a site suffix.
pub const DEFAULT_PATTERN: &str = r"^[a-z]-([a-z0-9]+)[0-9]{2}[0-9]*-[a-z0-9]+$";

/// Extracts the first capture group of a naming pattern and returns every
/// group whose member list contains that token.
#[derive(Debug, Clone)]
pub struct PatternPolicy {
    pattern: Regex,
    mapping: GroupMapping,
}

impl PatternPolicy {
    /// Policy using [`DEFAULT_PATTERN`].
    ///
    /// # Errors
    ///
    /// See [`with_pattern`](Self::with_pattern).
    pub fn new(mapping: GroupMapping) -> Result<Self, PolicyError> {
        Self::with_pattern(mapping, DEFAULT_PATTERN)
    }

    /// Policy using a custom naming pattern. The first capture group is the
    /// token looked up in `mapping`.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidPattern`] if `pattern` does not compile
    /// or has no capture group.
    pub fn with_pattern(mapping: GroupMapping, pattern: &str) -> Result<Self, PolicyError> {
        let invalid = |reason: String| PolicyError::InvalidPattern {
            pattern: pattern.to_string(),
            reason,
        };
        let regex = Regex::new(pattern).map_err(|err| invalid(err.to_string()))?;
        if regex.captures_len() < 2 {
            return Err(invalid("no capture group for the role token".to_string()));
        }
        Ok(Self {
            pattern: regex,
            mapping,
        })
    }

    /// The naming pattern in use.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Extract the role token from `host`.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::NoMatch`] when `host` does not follow the
    /// naming pattern.
    pub fn extract_token<'h>(&self, host: &'h str) -> Result<&'h str, PolicyError> {
        self.pattern
            .captures(host)
            .and_then(|caps| caps.get(1))
            .map(|token| token.as_str())
            .ok_or_else(|| PolicyError::NoMatch {
                host: host.to_string(),
                pattern: self.pattern.as_str().to_string(),
            })
    }
}

impl GroupingPolicy for PatternPolicy {
    fn groups_for_host(&self, host: &str) -> Result<BTreeSet<String>, PolicyError> {
        let token = self.extract_token(host)?;
        Ok(self.mapping.groups_containing(token))
    }
}
