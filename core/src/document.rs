#![deny(missing_docs)]

//! # API Document
//!
//! Thin wrapper over the raw JSON tree produced by the document generator.
//! Passes mutate the tree in place through the accessors defined here.

use crate::error::{AppError, AppResult};
use serde_json::{Map, Value};

/// Media type advertised by documents served as JSON:API.
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// Top-level keys that list the media types an API produces or consumes.
const MEDIA_TYPE_KEYS: [&str; 2] = ["produces", "consumes"];

/// An OpenAPI (Swagger 2.0-ish) document under transformation.
///
/// Key order is preserved (`serde_json/preserve_order`), so a document
/// round-trips with its paths and definitions in generator order.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiDocument {
    root: Map<String, Value>,
}

impl ApiDocument {
    /// Wraps a raw generator output.
    ///
    /// # Errors
    ///
    /// * `InvalidDocument` if the root is not an object.
    /// * `MissingPaths` if there is no `paths` object.
    pub fn from_value(value: Value) -> AppResult<Self> {
        let root = match value {
            Value::Object(map) => map,
            other => {
                return Err(AppError::InvalidDocument(format!(
                    "expected an object at the document root, found {}",
                    kind_of(&other)
                )))
            }
        };

        if !root.get("paths").is_some_and(Value::is_object) {
            return Err(AppError::MissingPaths);
        }

        Ok(Self { root })
    }

    /// Mutable access to the `paths` object.
    pub fn paths_mut(&mut self) -> &mut Map<String, Value> {
        self.root
            .entry("paths")
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .expect("paths is validated as an object on construction")
    }

    /// Swaps in a rebuilt `paths` object.
    pub fn replace_paths(&mut self, paths: Map<String, Value>) {
        self.root.insert("paths".to_string(), Value::Object(paths));
    }

    /// Removes and returns the `paths` object, leaving an empty one behind.
    pub fn take_paths(&mut self) -> Map<String, Value> {
        std::mem::take(self.paths_mut())
    }

    /// Mutable access to the schema definitions.
    ///
    /// Swagger 2.0 keeps them under `definitions`; OpenAPI 3 documents are
    /// accepted through `components.schemas`. Returns `None` when neither
    /// section is present.
    pub fn definitions_mut(&mut self) -> Option<&mut Map<String, Value>> {
        if self.root.get("definitions").is_some_and(Value::is_object) {
            return self.root.get_mut("definitions").and_then(Value::as_object_mut);
        }

        self.root
            .get_mut("components")
            .and_then(|c| c.get_mut("schemas"))
            .and_then(Value::as_object_mut)
    }

    /// Whether the document has a definitions section.
    pub fn has_definitions(&self) -> bool {
        self.root.get("definitions").is_some_and(Value::is_object)
            || self
                .root
                .get("components")
                .and_then(|c| c.get("schemas"))
                .is_some_and(Value::is_object)
    }

    /// Media types listed under `produces` and `consumes`.
    ///
    /// Each key may hold a single string or a list of strings; anything else
    /// is ignored.
    pub fn media_types(&self) -> Vec<&str> {
        MEDIA_TYPE_KEYS
            .iter()
            .filter_map(|key| self.root.get(*key))
            .flat_map(|value| match value {
                Value::String(s) => vec![s.as_str()],
                Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
                _ => Vec::new(),
            })
            .collect()
    }

    /// Whether the document declares the given media type.
    pub fn declares_media_type(&self, media_type: &str) -> bool {
        self.media_types()
            .iter()
            .any(|m| m.eq_ignore_ascii_case(media_type))
    }

    /// Borrows the whole document as a JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    /// Consumes the wrapper, returning the JSON tree.
    pub fn into_value(self) -> Value {
        Value::Object(self.root)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_requires_paths() {
        let err = ApiDocument::from_value(json!({ "swagger": "2.0" })).unwrap_err();
        assert!(matches!(err, AppError::MissingPaths));

        let err = ApiDocument::from_value(json!({ "paths": [] })).unwrap_err();
        assert!(matches!(err, AppError::MissingPaths));
    }

    #[test]
    fn test_from_value_rejects_non_object_root() {
        let err = ApiDocument::from_value(json!(["paths"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid Document: expected an object at the document root, found an array"
        );
    }

    #[test]
    fn test_definitions_prefers_swagger_section() {
        let mut doc = ApiDocument::from_value(json!({
            "paths": {},
            "definitions": { "User": {} },
            "components": { "schemas": { "Other": {} } }
        }))
        .unwrap();

        let defs = doc.definitions_mut().unwrap();
        assert!(defs.contains_key("User"));
        assert!(!defs.contains_key("Other"));
    }

    #[test]
    fn test_definitions_falls_back_to_components() {
        let mut doc = ApiDocument::from_value(json!({
            "paths": {},
            "components": { "schemas": { "User": {} } }
        }))
        .unwrap();

        assert!(doc.has_definitions());
        assert!(doc.definitions_mut().unwrap().contains_key("User"));
    }

    #[test]
    fn test_definitions_absent() {
        let mut doc = ApiDocument::from_value(json!({ "paths": {} })).unwrap();
        assert!(!doc.has_definitions());
        assert!(doc.definitions_mut().is_none());
    }

    #[test]
    fn test_media_types_accepts_strings_and_lists() {
        let doc = ApiDocument::from_value(json!({
            "paths": {},
            "produces": ["application/json", JSON_API_MEDIA_TYPE],
            "consumes": "application/xml"
        }))
        .unwrap();

        assert_eq!(
            doc.media_types(),
            vec!["application/json", JSON_API_MEDIA_TYPE, "application/xml"]
        );
        assert!(doc.declares_media_type(JSON_API_MEDIA_TYPE));
        assert!(!doc.declares_media_type("text/plain"));
    }

    #[test]
    fn test_take_paths_leaves_empty_object() {
        let mut doc = ApiDocument::from_value(json!({ "paths": { "/a": {} } })).unwrap();
        let paths = doc.take_paths();
        assert_eq!(paths.len(), 1);
        assert!(doc.paths_mut().is_empty());
    }
}
