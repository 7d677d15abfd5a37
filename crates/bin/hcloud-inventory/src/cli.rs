//! Command-line interface following the dynamic-inventory protocol.
//!
//! `--list` prints the whole document, `--host <name>` prints one host's
//! variables. With neither flag the whole document is printed.

use std::path::PathBuf;

use clap::Parser;

use crate::config::PolicyKind;

/// Hetzner Cloud dynamic inventory.
#[derive(Debug, Parser)]
#[command(name = "hcloud-inventory")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print the full inventory document (default)
    #[arg(long, conflicts_with = "host")]
    pub list: bool,

    /// Print the variables of a single host
    #[arg(long, value_name = "HOSTNAME")]
    pub host: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Group mapping file (YAML)
    #[arg(short, long, value_name = "PATH")]
    pub groups: Option<PathBuf>,

    /// Grouping strategy
    #[arg(long, value_enum)]
    pub policy: Option<PolicyKind>,

    /// Naming pattern for the pattern policy; the first capture group is the role token
    #[arg(long, value_name = "REGEX")]
    pub pattern: Option<String>,
}

/// What the invocation asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Request<'a> {
    List,
    Host(&'a str),
}

impl Cli {
    #[must_use]
    pub fn request(&self) -> Request<'_> {
        match &self.host {
            Some(host) if !self.list => Request::Host(host),
            _ => Request::List,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_list() {
        let cli = Cli::parse_from(["hcloud-inventory"]);
        assert_eq!(cli.request(), Request::List);
    }

    #[test]
    fn should_accept_explicit_list() {
        let cli = Cli::parse_from(["hcloud-inventory", "--list"]);
        assert!(cli.list);
        assert_eq!(cli.request(), Request::List);
    }

    #[test]
    fn should_request_single_host() {
        let cli = Cli::parse_from(["hcloud-inventory", "--host", "p-web01-dc1"]);
        assert_eq!(cli.request(), Request::Host("p-web01-dc1"));
    }

    #[test]
    fn should_reject_list_together_with_host() {
        let result = Cli::try_parse_from(["hcloud-inventory", "--list", "--host", "a"]);
        assert!(result.is_err());
    }

    #[test]
    fn should_parse_policy_value() {
        let cli = Cli::parse_from(["hcloud-inventory", "--policy", "pattern"]);
        assert_eq!(cli.policy, Some(PolicyKind::Pattern));
    }

    #[test]
    fn should_reject_unknown_policy_value() {
        let result = Cli::try_parse_from(["hcloud-inventory", "--policy", "random"]);
        assert!(result.is_err());
    }
}
