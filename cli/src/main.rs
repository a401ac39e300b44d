#![deny(missing_docs)]

//! # apidump
//!
//! Command Line Interface dumping a sanitized OpenAPI document.
//!
//! Reads the raw document produced by the API doc generator, removes private
//! paths, adds path parameter examples, strips redundant patterns, prunes
//! JSON:API identifiers and relations, then writes `apidoc.json`.

use clap::Parser;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod dump;
mod error;

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Generate an OpenAPI documentation json file from the generator output"
)]
struct Cli {
    #[clap(flatten)]
    dump: dump::DumpArgs,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "apidump=info,apidump_core=info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    match dump::execute(&cli.dump) {
        Ok(_) => {
            println!("The API documentation was dumped successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "dump failed");
            println!("Unable to generate the API documentation");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_file_name() {
        let cli = Cli::try_parse_from(["apidump", "--input", "raw.json"]).unwrap();
        assert_eq!(cli.dump.file_name, std::path::PathBuf::from("apidoc.json"));
        assert!(!cli.dump.keep_patterns);
        assert!(!cli.dump.no_json_api);
    }

    #[test]
    fn test_explicit_arguments() {
        let cli = Cli::try_parse_from([
            "apidump",
            "docs/api.json",
            "--input",
            "raw.yaml",
            "--exposures",
            "exposures.yaml",
            "--keep-patterns",
        ])
        .unwrap();
        assert_eq!(cli.dump.file_name, std::path::PathBuf::from("docs/api.json"));
        assert_eq!(
            cli.dump.exposures,
            Some(std::path::PathBuf::from("exposures.yaml"))
        );
        assert!(cli.dump.keep_patterns);
    }
}
