#![deny(missing_docs)]

//! # Transformation Passes
//!
//! - **paths**: drops private and root paths.
//! - **examples**: adds `x-example` values to required path parameters.
//! - **sanitize**: strips `pattern` from formatted properties.
//! - **jsonapi**: removes identifiers and unexposed relations for JSON:API documents.

pub mod examples;
pub mod jsonapi;
pub mod paths;
pub mod sanitize;

pub use examples::add_path_examples;
pub use jsonapi::{is_json_api, is_relation, prune_relations, remove_identifiers};
pub use paths::remove_private_paths;
pub use sanitize::remove_format_patterns;
