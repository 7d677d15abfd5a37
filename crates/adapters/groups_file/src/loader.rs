//! Loading and parsing of the group-mapping document.

use std::collections::BTreeMap;
use std::path::Path;

use hcloud_inventory_domain::mapping::{GroupDefinition, GroupMapping};

use crate::error::GroupsFileError;

/// Parse a YAML group-mapping document. An empty document is an empty mapping.
///
/// # Errors
///
/// Returns [`GroupsFileError::Parse`] for malformed YAML and
/// [`GroupsFileError::Validation`] for reserved or empty group names.
pub fn parse(content: &str) -> Result<GroupMapping, GroupsFileError> {
    if content.trim().is_empty() {
        return Ok(GroupMapping::default());
    }
    let groups: BTreeMap<String, GroupDefinition> = serde_yaml::from_str(content)?;
    Ok(GroupMapping::new(groups)?)
}

/// Read and parse the group mapping at `path`.
///
/// # Errors
///
/// Returns [`GroupsFileError::Io`] if the file cannot be read, or any error
/// from [`parse`].
pub fn load(path: impl AsRef<Path>) -> Result<GroupMapping, GroupsFileError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| GroupsFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mapping = parse(&content)?;
    tracing::debug!(path = %path.display(), groups = mapping.len(), "loaded group mapping");
    Ok(mapping)
}

/// Like [`load`], but a missing file yields an empty mapping.
///
/// # Errors
///
/// Same as [`load`] for every failure other than "not found".
pub fn load_or_default(path: impl AsRef<Path>) -> Result<GroupMapping, GroupsFileError> {
    let path = path.as_ref();
    match load(path) {
        Err(GroupsFileError::Io { source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            tracing::warn!(path = %path.display(), "group mapping not found, no groups will be resolved");
            Ok(GroupMapping::default())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use hcloud_inventory_domain::error::ValidationError;
    use hcloud_inventory_domain::value::VarValue;

    use super::*;

    #[test]
    fn should_parse_member_lists() {
        let yaml = "
webservers:
  - servername
  - otherserver
tools: [tools]
";
        let mapping = parse(yaml).unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(
            mapping.get("webservers").unwrap().members,
            ["servername", "otherserver"]
        );
        assert_eq!(mapping.get("tools").unwrap().members, ["tools"]);
    }

    #[test]
    fn should_parse_extended_definitions() {
        let yaml = "
swarm:
  hosts: [swarmmanager, swarmworker]
  vars:
    docker_swarm: true
    replicas: 3
    labels: { tier: backend }
  children: [managers]
managers: [swarmmanager]
";
        let mapping = parse(yaml).unwrap();
        let swarm = mapping.get("swarm").unwrap();
        assert_eq!(swarm.members, ["swarmmanager", "swarmworker"]);
        assert_eq!(swarm.vars.get("docker_swarm"), Some(&VarValue::Bool(true)));
        assert_eq!(swarm.vars.get("replicas"), Some(&VarValue::Int(3)));
        assert!(matches!(swarm.vars.get("labels"), Some(VarValue::Map(_))));
        assert_eq!(swarm.children, ["managers"]);
    }

    #[test]
    fn should_accept_group_without_members() {
        let mapping = parse("webservers:\ntools: [tools]\n").unwrap();
        assert!(mapping.get("webservers").unwrap().members.is_empty());
        assert_eq!(mapping.get("tools").unwrap().members, ["tools"]);
    }

    #[test]
    fn should_accept_null_group_variable() {
        let mapping = parse("swarm:\n  hosts: [a]\n  vars:\n    foo: ~\n").unwrap();
        let swarm = mapping.get("swarm").unwrap();
        assert_eq!(swarm.members, ["a"]);
        assert_eq!(swarm.vars.get("foo"), Some(&VarValue::Null));
    }

    #[test]
    fn should_treat_empty_document_as_empty_mapping() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("  \n").unwrap().is_empty());
    }

    #[test]
    fn should_reject_reserved_group_name() {
        let err = parse("all: [servername]").unwrap_err();
        assert!(matches!(
            err,
            GroupsFileError::Validation(ValidationError::ReservedGroupName(_))
        ));
    }

    #[test]
    fn should_report_parse_error_for_malformed_yaml() {
        let err = parse("webservers: [unterminated").unwrap_err();
        assert!(matches!(err, GroupsFileError::Parse(_)));
    }

    #[test]
    fn should_report_parse_error_when_top_level_is_not_a_mapping() {
        let err = parse("- just\n- a list\n").unwrap_err();
        assert!(matches!(err, GroupsFileError::Parse(_)));
    }

    #[test]
    fn should_fail_when_required_file_missing() {
        let err = load("does/not/exist/groups.yml").unwrap_err();
        assert!(matches!(err, GroupsFileError::Io { .. }));
    }

    #[test]
    fn should_default_when_optional_file_missing() {
        let mapping = load_or_default("does/not/exist/groups.yml").unwrap();
        assert!(mapping.is_empty());
    }

    #[test]
    fn should_load_file_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "hcloud-inventory-groups-{}.yml",
            std::process::id()
        ));
        std::fs::write(&path, "db: [database]\n").unwrap();
        let mapping = load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(mapping.get("db").unwrap().members, ["database"]);
    }
}
