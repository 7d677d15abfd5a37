//! Rendering of an [`Inventory`] into the dynamic-inventory document.
//!
//! ```text
//! {
//!   "<group>": { "hosts": [..], "vars": {..}, "children": [..] },
//!   "all":     { "hosts": [..], "children": [..] },
//!   "_meta":   { "hostvars": { "<host>": { "ansible_host": .., .. } } }
//! }
//! ```
//!
//! `vars` and `children` are omitted when empty. Keys are ordered so the
//! output is byte-stable for a given inventory.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::InventoryError;
use crate::group::Group;
use crate::host::HostVariables;
use crate::inventory::Inventory;
use crate::mapping::{ALL_GROUP, META_KEY};
use crate::value::VarValue;

/// One group as it appears in the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupDocument {
    pub hosts: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub vars: BTreeMap<String, VarValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
}

impl From<&Group> for GroupDocument {
    fn from(group: &Group) -> Self {
        Self {
            hosts: group.hosts().to_vec(),
            vars: group.vars().clone(),
            children: group.children().to_vec(),
        }
    }
}

/// The `_meta` entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaDocument {
    pub hostvars: BTreeMap<String, HostVariables>,
}

/// A top-level value: either a group or the `_meta` entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Group(GroupDocument),
    Meta(MetaDocument),
}

/// The complete, serializable inventory document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct InventoryDocument(BTreeMap<String, Entry>);

impl InventoryDocument {
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&GroupDocument> {
        match self.0.get(name) {
            Some(Entry::Group(group)) => Some(group),
            _ => None,
        }
    }

    #[must_use]
    pub fn meta(&self) -> Option<&MetaDocument> {
        match self.0.get(META_KEY) {
            Some(Entry::Meta(meta)) => Some(meta),
            _ => None,
        }
    }

    /// Top-level keys in output order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Compact JSON encoding.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Serialization`] if encoding fails, which the
    /// closed value set rules out in practice.
    pub fn to_json(&self) -> Result<String, InventoryError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON encoding.
    ///
    /// # Errors
    ///
    /// See [`to_json`](Self::to_json).
    pub fn to_json_pretty(&self) -> Result<String, InventoryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Render the whole inventory.
#[must_use]
pub fn render(inventory: &Inventory) -> InventoryDocument {
    let mut entries: BTreeMap<String, Entry> = inventory
        .groups()
        .iter()
        .filter(|(name, _)| name.as_str() != ALL_GROUP)
        .map(|(name, group)| (name.clone(), Entry::Group(group.into())))
        .collect();

    entries.insert(
        ALL_GROUP.to_string(),
        Entry::Group(GroupDocument::from(&*inventory.all())),
    );
    entries.insert(
        META_KEY.to_string(),
        Entry::Meta(MetaDocument {
            hostvars: inventory.host_variables().clone(),
        }),
    );
    InventoryDocument(entries)
}

/// Variables of a single host, as answered to a `--host <name>` query.
///
/// Unknown hosts yield the default (empty) variables encoded as `{}`.
#[must_use]
pub fn render_host(inventory: &Inventory, host: &str) -> serde_json::Value {
    inventory
        .variables_for(host)
        .and_then(|vars| serde_json::to_value(vars).ok())
        .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()))
}
