#![deny(missing_docs)]

//! # Dump Command
//!
//! Reads the generator output, runs the post-processing pipeline and writes
//! the API documentation file.

use crate::error::{CliError, CliResult};
use apidump_core::{ExposureRegistry, FileSource, Pipeline, PipelineOptions, PipelineReport};
use std::path::PathBuf;
use tracing::info;

/// Arguments for the dump command.
#[derive(clap::Args, Debug, Clone)]
pub struct DumpArgs {
    /// Output file name.
    #[clap(default_value = "apidoc.json")]
    pub file_name: PathBuf,

    /// Raw OpenAPI document produced by the generator (JSON or YAML).
    #[clap(long, env = "APIDUMP_INPUT")]
    pub input: PathBuf,

    /// Registry of relation fields exposed per entity (JSON or YAML).
    /// Without it, every relation of a JSON:API document is pruned.
    #[clap(long, env = "APIDUMP_EXPOSURES")]
    pub exposures: Option<PathBuf>,

    /// Keep `pattern` on properties that also declare a `format`.
    #[clap(long)]
    pub keep_patterns: bool,

    /// Skip identifier and relation pruning for JSON:API documents.
    #[clap(long)]
    pub no_json_api: bool,
}

impl DumpArgs {
    fn options(&self) -> PipelineOptions {
        PipelineOptions {
            sanitize_patterns: !self.keep_patterns,
            json_api: !self.no_json_api,
        }
    }
}

/// Executes the dump.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &DumpArgs) -> CliResult<PipelineReport> {
    let registry = match &args.exposures {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::General(format!(
                    "Exposure registry not found: {:?}",
                    path
                )));
            }
            ExposureRegistry::from_path(path)?
        }
        None => ExposureRegistry::new(),
    };
    info!(entities = registry.len(), "exposure registry loaded");

    let source = FileSource::new(&args.input);
    let report = Pipeline::new(registry)
        .with_options(args.options())
        .dump(&source, &args.file_name)?;

    info!(
        paths_removed = report.paths_removed,
        examples_added = report.examples_added,
        patterns_removed = report.patterns_removed,
        json_api = report.json_api,
        identifiers_removed = report.identifiers_removed,
        relations_pruned = report.relations_pruned,
        "pipeline completed"
    );

    Ok(report)
}
