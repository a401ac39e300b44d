#![deny(missing_docs)]

//! # Path Filter
//!
//! Keeps internal routes (`/_profiler`, `/api/_internal/...`) and the bare
//! root out of published documentation.

use serde_json::{Map, Value};
use tracing::debug;

/// Prefix of a private path segment.
const PRIVATE_SEGMENT: &str = "/_";

/// The root path, never documented.
const ROOT_PATH: &str = "/";

/// Whether a path template is excluded from the dump.
pub fn is_private_path(path: &str) -> bool {
    path == ROOT_PATH || path.contains(PRIVATE_SEGMENT)
}

/// Builds a new `paths` object without private and root entries.
///
/// Remaining entries keep their original order.
pub fn remove_private_paths(paths: Map<String, Value>) -> Map<String, Value> {
    paths
        .into_iter()
        .filter(|(path, _)| {
            let private = is_private_path(path);
            if private {
                debug!(path = %path, "dropping private path");
            }
            !private
        })
        .collect()
}
