//! Inventory — the aggregate assembled during one conversion run.
//!
//! Hosts and groups are only ever added. The implicit [`ALL_GROUP`] is
//! derived from the current state by [`Inventory::recompute_all`] and is
//! never populated directly.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

use crate::group::{Group, GroupTable};
use crate::host::{HostRecord, HostVariables};
use crate::mapping::{ALL_GROUP, GroupDefinition, is_reserved_namespace};

/// A host seen during the run together with the groups it resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    pub name: String,
    pub groups: BTreeSet<String>,
}

/// Top-level aggregate: groups, host variables, and the hosts seen so far.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    groups: GroupTable,
    hostvars: BTreeMap<String, HostVariables>,
    hosts: Vec<HostEntry>,
    all: Group,
    all_stale: bool,
}

impl Inventory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `record` and register it in each of `groups`.
    ///
    /// Variables are stored before the host joins any group. A host name
    /// seen twice keeps the last variables and the union of both group sets.
    pub fn add_host(&mut self, record: &HostRecord, groups: BTreeSet<String>) {
        let name = record.name();
        self.hostvars.insert(name.to_string(), record.variables());

        for group in &groups {
            self.groups.add_host_to_group(group, name);
        }

        match self.hosts.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.groups.extend(groups),
            None => self.hosts.push(HostEntry {
                name: name.to_string(),
                groups,
            }),
        }
        self.all_stale = true;
    }

    /// Ensure group `name` exists and carries the variables and child links
    /// declared in `definition`. Declared children are created as groups too.
    pub fn declare_group(&mut self, name: &str, definition: &GroupDefinition) {
        let group = self.groups.get_or_create(name);
        for (key, value) in &definition.vars {
            group.set_var(key.clone(), value.clone());
        }
        for child in &definition.children {
            self.groups.add_child_to_group(name, child);
            self.groups.get_or_create(child);
        }
        self.all_stale = true;
    }

    /// Rebuild the implicit `all` group from the current state.
    ///
    /// Every group outside the `_` namespace becomes a child; hosts with no
    /// resolved group become direct members. Calling this twice without an
    /// intervening mutation yields the same group.
    pub fn recompute_all(&mut self) {
        self.all = self.compute_all();
        self.all_stale = false;
    }

    fn compute_all(&self) -> Group {
        let mut all = Group::default();
        for name in self.groups.names() {
            if name == ALL_GROUP || is_reserved_namespace(name) {
                continue;
            }
            all.add_child(name);
        }
        for entry in &self.hosts {
            if entry.groups.is_empty() {
                all.add_host(entry.name.as_str());
            }
        }
        all
    }

    /// The `all` group. Computed on the fly when hosts or groups were added
    /// since the last [`recompute_all`](Self::recompute_all).
    #[must_use]
    pub fn all(&self) -> Cow<'_, Group> {
        if self.all_stale {
            Cow::Owned(self.compute_all())
        } else {
            Cow::Borrowed(&self.all)
        }
    }

    /// Whether a mutation happened after the last `all` recomputation.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.all_stale
    }

    #[must_use]
    pub fn groups(&self) -> &GroupTable {
        &self.groups
    }

    #[must_use]
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    #[must_use]
    pub fn host_variables(&self) -> &BTreeMap<String, HostVariables> {
        &self.hostvars
    }

    #[must_use]
    pub fn variables_for(&self, host: &str) -> Option<&HostVariables> {
        self.hostvars.get(host)
    }

    /// Hosts in the order they were first added.
    #[must_use]
    pub fn hosts(&self) -> &[HostEntry] {
        &self.hosts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::VarValue;

    fn record(name: &str) -> HostRecord {
        HostRecord::builder()
            .name(name)
            .address("10.0.0.1")
            .build()
            .unwrap()
    }

    fn groups(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn should_place_ungrouped_host_directly_in_all() {
        let mut inv = Inventory::new();
        inv.add_host(&record("standalone-box"), BTreeSet::new());
        inv.recompute_all();

        assert_eq!(inv.all().hosts(), ["standalone-box"]);
        assert!(inv.all().children().is_empty());
        assert!(inv.groups().is_empty());
    }

    #[test]
    fn should_reference_groups_as_children_instead_of_listing_host() {
        let mut inv = Inventory::new();
        inv.add_host(&record("web1"), groups(&["web", "monitoring"]));
        inv.recompute_all();

        let all = inv.all();
        assert!(all.hosts().is_empty());
        assert_eq!(all.children(), ["monitoring", "web"]);
    }

    #[test]
    fn should_list_shared_group_once_in_all_children() {
        let mut inv = Inventory::new();
        inv.add_host(&record("db1"), groups(&["db"]));
        inv.add_host(&record("db2"), groups(&["db"]));
        inv.recompute_all();

        assert_eq!(inv.group("db").unwrap().hosts(), ["db1", "db2"]);
        assert_eq!(inv.all().children(), ["db"]);
    }

    #[test]
    fn should_be_idempotent_when_recomputed_twice() {
        let mut inv = Inventory::new();
        inv.add_host(&record("a"), groups(&["web"]));
        inv.add_host(&record("b"), BTreeSet::new());
        inv.recompute_all();
        let first = inv.all().into_owned();
        inv.recompute_all();

        assert_eq!(*inv.all(), first);
        assert!(!inv.all().children().iter().any(|c| c == ALL_GROUP));
    }

    #[test]
    fn should_exclude_underscore_groups_from_all_children() {
        let mut inv = Inventory::new();
        inv.add_host(&record("a"), groups(&["_internal", "web"]));
        inv.recompute_all();

        assert_eq!(inv.all().children(), ["web"]);
        assert_eq!(inv.group("_internal").unwrap().hosts(), ["a"]);
    }

    #[test]
    fn should_describe_every_grouped_host() {
        let mut inv = Inventory::new();
        inv.add_host(&record("a"), groups(&["web"]));
        inv.add_host(&record("b"), groups(&["web", "db"]));

        for (_, group) in inv.groups() {
            for host in group.hosts() {
                assert!(inv.variables_for(host).is_some());
            }
        }
    }

    #[test]
    fn should_keep_last_variables_when_host_recurs() {
        let mut inv = Inventory::new();
        inv.add_host(&record("a"), groups(&["web"]));
        let replacement = HostRecord::builder()
            .name("a")
            .address("10.9.9.9")
            .build()
            .unwrap();
        inv.add_host(&replacement, BTreeSet::new());
        inv.recompute_all();

        assert_eq!(inv.variables_for("a").unwrap().ansible_host, "10.9.9.9");
        assert_eq!(inv.hosts().len(), 1);
        assert_eq!(inv.group("web").unwrap().hosts(), ["a"]);
        assert!(inv.all().hosts().is_empty());
    }

    #[test]
    fn should_report_stale_all_until_recomputed() {
        let mut inv = Inventory::new();
        inv.add_host(&record("a"), BTreeSet::new());
        assert!(inv.is_stale());
        assert_eq!(inv.all().hosts(), ["a"]);

        inv.recompute_all();
        assert!(!inv.is_stale());

        inv.add_host(&record("b"), groups(&["web"]));
        assert!(inv.is_stale());
        assert_eq!(inv.all().children(), ["web"]);
    }

    #[test]
    fn should_apply_declared_vars_and_children() {
        let mut inv = Inventory::new();
        let mut definition = GroupDefinition::default();
        definition
            .vars
            .insert("docker_swarm".to_string(), VarValue::Bool(true));
        definition.children.push("managers".to_string());
        inv.declare_group("swarm", &definition);
        inv.recompute_all();

        let swarm = inv.group("swarm").unwrap();
        assert_eq!(swarm.vars().get("docker_swarm"), Some(&VarValue::Bool(true)));
        assert_eq!(swarm.children(), ["managers"]);
        assert!(inv.group("managers").is_some());
        assert_eq!(inv.all().children(), ["managers", "swarm"]);
    }
}
