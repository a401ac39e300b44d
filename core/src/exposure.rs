#![deny(missing_docs)]

//! # Exposure Oracle
//!
//! Answers whether a relation field of a domain entity is explicitly exposed
//! as a plain attribute. Lookup failures are data (`Exposure::Unresolved`),
//! never errors, so the relation pruner has a single branch to take.

use crate::error::{AppError, AppResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Outcome of an exposure lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exposure {
    /// The field is marked as exposed on its entity.
    Exposed,
    /// The field is declared on the entity but not exposed.
    NotExposed,
    /// The entity or the field could not be resolved.
    Unresolved(String),
}

impl Exposure {
    /// Only `Exposed` keeps a relation alive.
    pub fn is_exposed(&self) -> bool {
        matches!(self, Exposure::Exposed)
    }
}

/// Capability queried by the relation pruner.
pub trait ExposureOracle {
    /// Looks up `property` on the entity type `entity`.
    fn exposure(&self, entity: &str, property: &str) -> Exposure;
}

impl<T: ExposureOracle + ?Sized> ExposureOracle for &T {
    fn exposure(&self, entity: &str, property: &str) -> Exposure {
        (**self).exposure(entity, property)
    }
}

/// Derives the entity type name from a definition name.
///
/// Definitions are named after their entity with a possibly lowercased
/// initial (`user` -> `User`).
pub fn entity_type_name(definition_name: &str) -> String {
    let mut chars = definition_name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Relation fields declared on one entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityExposure {
    /// Relations kept as attributes in JSON:API documents.
    #[serde(default)]
    pub exposed: Vec<String>,
    /// Relations known on the entity but left to relationship linkage.
    #[serde(default)]
    pub hidden: Vec<String>,
}

/// Static oracle keyed by entity type name.
///
/// File format (YAML or JSON):
///
/// ```yaml
/// User:
///   exposed: [groups]
///   hidden: [posts]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExposureRegistry {
    entities: IndexMap<String, EntityExposure>,
}

impl ExposureRegistry {
    /// Creates an empty registry. Every lookup is unresolved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) an entity declaration.
    pub fn with_entity(mut self, entity: impl Into<String>, exposure: EntityExposure) -> Self {
        self.entities.insert(entity.into(), exposure);
        self
    }

    /// Parses a registry from YAML. JSON is accepted as a YAML subset.
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::new());
        }
        serde_yaml::from_str(content)
            .map_err(|e| AppError::General(format!("Failed to parse exposure registry: {}", e)))
    }

    /// Reads a registry file.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::General(format!(
                "Failed to read exposure registry {:?}: {}",
                path, e
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Number of declared entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether no entity is declared.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl ExposureOracle for ExposureRegistry {
    fn exposure(&self, entity: &str, property: &str) -> Exposure {
        let Some(declared) = self.entities.get(entity) else {
            return Exposure::Unresolved(format!("unknown entity type '{}'", entity));
        };

        if declared.exposed.iter().any(|f| f == property) {
            Exposure::Exposed
        } else if declared.hidden.iter().any(|f| f == property) {
            Exposure::NotExposed
        } else {
            Exposure::Unresolved(format!(
                "property '{}' is not declared on '{}'",
                property, entity
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ExposureRegistry {
        ExposureRegistry::from_yaml_str(
            r#"
User:
  exposed: [groups]
  hidden: [posts]
Post: {}
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_entity_type_name_capitalizes() {
        assert_eq!(entity_type_name("user"), "User");
        assert_eq!(entity_type_name("User"), "User");
        assert_eq!(entity_type_name("blogPost"), "BlogPost");
        assert_eq!(entity_type_name("élan"), "Élan");
        assert_eq!(entity_type_name(""), "");
    }

    #[test]
    fn test_registry_tri_state() {
        let reg = registry();
        assert_eq!(reg.exposure("User", "groups"), Exposure::Exposed);
        assert_eq!(reg.exposure("User", "posts"), Exposure::NotExposed);
        assert!(matches!(
            reg.exposure("User", "avatar"),
            Exposure::Unresolved(_)
        ));
        assert!(matches!(
            reg.exposure("Comment", "author"),
            Exposure::Unresolved(_)
        ));
        assert!(matches!(reg.exposure("Post", "author"), Exposure::Unresolved(_)));
    }

    #[test]
    fn test_registry_accepts_json() {
        let reg = ExposureRegistry::from_yaml_str(r#"{"User": {"exposed": ["groups"]}}"#).unwrap();
        assert!(reg.exposure("User", "groups").is_exposed());
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_registry_empty_content() {
        let reg = ExposureRegistry::from_yaml_str("  \n").unwrap();
        assert!(reg.is_empty());
    }

    #[test]
    fn test_registry_invalid_content() {
        let err = ExposureRegistry::from_yaml_str("User: [groups").unwrap_err();
        assert!(err.to_string().contains("Failed to parse exposure registry"));
    }

    #[test]
    fn test_with_entity_builder() {
        let reg = ExposureRegistry::new().with_entity(
            "Team",
            EntityExposure {
                exposed: vec!["members".into()],
                hidden: vec![],
            },
        );
        assert!(reg.exposure("Team", "members").is_exposed());
        assert!(!reg.exposure("Team", "owner").is_exposed());
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ExposureRegistry::from_path(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read exposure registry"));
    }
}
