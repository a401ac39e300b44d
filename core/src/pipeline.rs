#![deny(missing_docs)]

//! # Pipeline Driver
//!
//! Runs the transformation passes over a generated document, renders it and
//! hands the text to the sink.
//!
//! 1. **Path Filter**: private and root paths are dropped.
//! 2. **Example Enricher**: required path parameters get an `x-example`.
//! 3. **Definition Sanitizer**: redundant `pattern`s are stripped.
//! 4. **Relation Pruner**: JSON:API documents lose `id` attributes and unexposed relations.

use crate::document::ApiDocument;
use crate::error::AppResult;
use crate::exposure::ExposureOracle;
use crate::passes::{
    add_path_examples, is_json_api, prune_relations, remove_format_patterns, remove_identifiers,
    remove_private_paths,
};
use crate::sink::write_document;
use crate::source::DocumentSource;
use std::path::Path;
use tracing::{debug, info};

/// Switches for the optional passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Run the Definition Sanitizer.
    pub sanitize_patterns: bool,
    /// Run the Relation Pruner when the document is JSON:API.
    pub json_api: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            sanitize_patterns: true,
            json_api: true,
        }
    }
}

/// What a run changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    /// Paths removed by the Path Filter.
    pub paths_removed: usize,
    /// Path parameters given an example.
    pub examples_added: usize,
    /// Patterns stripped from formatted properties.
    pub patterns_removed: usize,
    /// Whether the Relation Pruner ran.
    pub json_api: bool,
    /// `id` attributes removed.
    pub identifiers_removed: usize,
    /// Relation properties pruned.
    pub relations_pruned: usize,
}

/// The document post-processing pipeline.
pub struct Pipeline<O> {
    oracle: O,
    options: PipelineOptions,
}

impl<O: ExposureOracle> Pipeline<O> {
    /// Creates a pipeline with every pass enabled.
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            options: PipelineOptions::default(),
        }
    }

    /// Replaces the pass switches.
    pub fn with_options(mut self, options: PipelineOptions) -> Self {
        self.options = options;
        self
    }

    /// Applies every enabled pass to `document` in place.
    pub fn transform(&self, document: &mut ApiDocument) -> PipelineReport {
        let mut report = PipelineReport::default();

        let paths = document.take_paths();
        let before = paths.len();
        let filtered = remove_private_paths(paths);
        report.paths_removed = before - filtered.len();
        document.replace_paths(filtered);

        report.examples_added = add_path_examples(document.paths_mut());

        if self.options.sanitize_patterns {
            if let Some(definitions) = document.definitions_mut() {
                report.patterns_removed = remove_format_patterns(definitions);
            }
        }

        if self.options.json_api && is_json_api(document) {
            report.json_api = true;
            if let Some(definitions) = document.definitions_mut() {
                report.identifiers_removed = remove_identifiers(definitions);
                report.relations_pruned = prune_relations(definitions, &self.oracle);
            }
        }

        debug!(?report, "document transformed");
        report
    }

    /// Pulls a document from `source`, transforms it and writes it to `output`.
    ///
    /// Nothing is written if the document is invalid or cannot be rendered.
    pub fn dump(&self, source: &dyn DocumentSource, output: &Path) -> AppResult<PipelineReport> {
        let mut document = ApiDocument::from_value(source.generate()?)?;
        let report = self.transform(&mut document);
        let text = render(&document)?;

        write_document(output, &text)?;
        info!(output = %output.display(), bytes = text.len(), "API documentation written");

        Ok(report)
    }
}

/// Renders a document as indented JSON.
///
/// Forward slashes are kept literal, so path templates stay readable.
pub fn render(document: &ApiDocument) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(document.as_map())?)
}
