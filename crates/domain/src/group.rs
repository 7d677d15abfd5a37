//! Groups — named collections of hosts and child groups.

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::value::VarValue;

/// A named collection of hosts and/or child groups.
///
/// Member and child lists keep first-seen order and never hold the same
/// name twice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    hosts: Vec<String>,
    vars: BTreeMap<String, VarValue>,
    children: Vec<String>,
}

impl Group {
    #[must_use]
    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    #[must_use]
    pub fn vars(&self) -> &BTreeMap<String, VarValue> {
        &self.vars
    }

    #[must_use]
    pub fn children(&self) -> &[String] {
        &self.children
    }

    /// Append `host` unless it is already a member.
    ///
    /// Returns `true` when the host was added.
    pub fn add_host(&mut self, host: impl Into<String>) -> bool {
        push_unique(&mut self.hosts, host.into())
    }

    /// Append `child` unless it is already listed.
    ///
    /// Returns `true` when the child was added.
    pub fn add_child(&mut self, child: impl Into<String>) -> bool {
        push_unique(&mut self.children, child.into())
    }

    /// Set a group variable, replacing any previous value.
    pub fn set_var(&mut self, key: impl Into<String>, value: impl Into<VarValue>) {
        self.vars.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn contains_host(&self, host: &str) -> bool {
        self.hosts.iter().any(|h| h == host)
    }
}

fn push_unique(list: &mut Vec<String>, item: String) -> bool {
    if list.contains(&item) {
        return false;
    }
    list.push(item);
    true
}

/// Mutable collection of named groups, created lazily on first reference.
#[derive(Debug, Clone, Default)]
pub struct GroupTable {
    groups: BTreeMap<String, Group>,
}

impl GroupTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the group called `name`, creating an empty one on first use.
    pub fn get_or_create(&mut self, name: &str) -> &mut Group {
        self.groups.entry(name.to_string()).or_default()
    }

    /// Register `host` as a member of `group`.
    pub fn add_host_to_group(&mut self, group: &str, host: &str) {
        self.get_or_create(group).add_host(host);
    }

    /// Register `child` as a child of `group`.
    pub fn add_child_to_group(&mut self, group: &str, child: &str) {
        self.get_or_create(group).add_child(child);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Group names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Groups in lexicographic name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Group> {
        self.groups.iter()
    }
}

impl<'a> IntoIterator for &'a GroupTable {
    type Item = (&'a String, &'a Group);
    type IntoIter = btree_map::Iter<'a, String, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_empty_group_on_first_access() {
        let mut table = GroupTable::new();
        let group = table.get_or_create("web");
        assert!(group.hosts().is_empty());
        assert!(group.vars().is_empty());
        assert!(group.children().is_empty());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn should_return_same_group_on_repeated_access() {
        let mut table = GroupTable::new();
        table.get_or_create("web").add_host("a");
        table.get_or_create("web").add_host("b");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("web").unwrap().hosts(), ["a", "b"]);
    }

    #[test]
    fn should_keep_first_seen_order_and_skip_duplicate_hosts() {
        let mut table = GroupTable::new();
        table.add_host_to_group("db", "db2");
        table.add_host_to_group("db", "db1");
        table.add_host_to_group("db", "db2");
        assert_eq!(table.get("db").unwrap().hosts(), ["db2", "db1"]);
    }

    #[test]
    fn should_skip_duplicate_children() {
        let mut table = GroupTable::new();
        table.add_child_to_group("prod", "web");
        table.add_child_to_group("prod", "web");
        assert_eq!(table.get("prod").unwrap().children(), ["web"]);
    }

    #[test]
    fn should_treat_group_names_case_sensitively() {
        let mut table = GroupTable::new();
        table.get_or_create("Web");
        table.get_or_create("web");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn should_iterate_names_in_lexicographic_order() {
        let mut table = GroupTable::new();
        table.get_or_create("zeta");
        table.get_or_create("alpha");
        let names: Vec<&str> = table.names().collect();
        assert_eq!(names, ["alpha", "zeta"]);
    }

    #[test]
    fn should_replace_var_on_second_set() {
        let mut group = Group::default();
        group.set_var("env", "staging");
        group.set_var("env", "prod");
        assert_eq!(group.vars().get("env"), Some(&VarValue::from("prod")));
    }
}
