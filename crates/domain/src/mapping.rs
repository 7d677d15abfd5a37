//! Group mapping — the grouping table loaded once from configuration.
//!
//! A [`GroupMapping`] is immutable after construction and is passed into the
//! grouping policies explicitly.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer};

use crate::error::ValidationError;
use crate::value::VarValue;

/// Name of the implicit aggregate group.
pub const ALL_GROUP: &str = "all";

/// Name of the top-level key holding host variables.
pub const META_KEY: &str = "_meta";

/// Whether `name` belongs to the reserved `_`-prefixed namespace.
#[must_use]
pub fn is_reserved_namespace(name: &str) -> bool {
    name.starts_with('_')
}

/// Declaration of one group in the mapping.
///
/// Deserializes from either a bare list of member identifiers or a table
/// with `hosts`, `vars` and `children`. A null value is an empty group.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Option<RawDefinition>")]
pub struct GroupDefinition {
    pub members: Vec<String>,
    pub vars: BTreeMap<String, VarValue>,
    pub children: Vec<String>,
}

impl GroupDefinition {
    /// Definition listing only member identifiers.
    #[must_use]
    pub fn with_members<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            members: members.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDefinition {
    Members(Vec<String>),
    Full {
        #[serde(default, deserialize_with = "null_as_default")]
        hosts: Vec<String>,
        #[serde(default, deserialize_with = "null_as_default")]
        vars: BTreeMap<String, VarValue>,
        #[serde(default, deserialize_with = "null_as_default")]
        children: Vec<String>,
    },
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<Option<RawDefinition>> for GroupDefinition {
    fn from(raw: Option<RawDefinition>) -> Self {
        match raw {
            None => Self::default(),
            Some(RawDefinition::Members(members)) => Self {
                members,
                ..Self::default()
            },
            Some(RawDefinition::Full {
                hosts,
                vars,
                children,
            }) => Self {
                members: hosts,
                vars,
                children,
            },
        }
    }
}

/// Validated mapping from group name to its definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupMapping {
    groups: BTreeMap<String, GroupDefinition>,
}

impl GroupMapping {
    /// Validate and wrap a raw group table.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyGroupName`] for an empty name and
    /// [`ValidationError::ReservedGroupName`] when a group (or a declared
    /// child) is called `all` or `_meta`.
    pub fn new(groups: BTreeMap<String, GroupDefinition>) -> Result<Self, ValidationError> {
        for (name, definition) in &groups {
            check_name(name)?;
            for child in &definition.children {
                check_name(child)?;
            }
        }
        Ok(Self { groups })
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&GroupDefinition> {
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

    /// Definitions in lexicographic group-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GroupDefinition)> {
        self.groups.iter().map(|(name, def)| (name.as_str(), def))
    }

    /// Every group whose member list contains `member` (exact match).
    #[must_use]
    pub fn groups_containing(&self, member: &str) -> BTreeSet<String> {
        self.groups
            .iter()
            .filter(|(_, def)| def.members.iter().any(|m| m == member))
            .map(|(name, _)| name.clone())
            .collect()
    }
}

fn check_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyGroupName);
    }
    if name == ALL_GROUP || name == META_KEY {
        return Err(ValidationError::ReservedGroupName(name.to_string()));
    }
    Ok(())
}
