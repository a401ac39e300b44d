#![deny(missing_docs)]

//! # apidump Core
//!
//! Post-processing for generated OpenAPI documents: drops private paths,
//! adds path parameter examples, sanitizes definitions and prunes JSON:API
//! relations before the document is dumped to disk.

/// Shared error types.
pub mod error;

/// The document under transformation.
pub mod document;

/// Relation exposure lookups.
pub mod exposure;

/// Raw document providers.
pub mod source;

/// Transformation passes.
pub mod passes;

/// Pass orchestration and rendering.
pub mod pipeline;

/// File output.
pub mod sink;

pub use document::{ApiDocument, JSON_API_MEDIA_TYPE};
pub use error::{AppError, AppResult};
pub use exposure::{entity_type_name, EntityExposure, Exposure, ExposureOracle, ExposureRegistry};
pub use pipeline::{render, Pipeline, PipelineOptions, PipelineReport};
pub use sink::write_document;
pub use source::{DocumentSource, FileSource, ValueSource};
