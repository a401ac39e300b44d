#![deny(missing_docs)]

//! # Example Enricher
//!
//! Gives every required path parameter an `x-example` so documentation
//! tooling can build callable sample requests. Destructive calls target a
//! different record than the others.

use serde_json::{Map, Value};
use tracing::debug;

/// Extension key holding the example value.
pub const EXAMPLE_KEY: &str = "x-example";

/// Example used by `delete` operations.
const DELETE_EXAMPLE: &str = "2";

/// Example used by every other operation.
const DEFAULT_EXAMPLE: &str = "1";

/// Example value for a path parameter of the given HTTP method.
pub fn example_for_method(method: &str) -> &'static str {
    if method.eq_ignore_ascii_case("delete") {
        DELETE_EXAMPLE
    } else {
        DEFAULT_EXAMPLE
    }
}

/// Sets `x-example` on every required path parameter of every operation.
///
/// Path-item entries that are not operation objects (shared `parameters`
/// lists, `x-` extensions) are skipped. Returns the number of parameters set.
pub fn add_path_examples(paths: &mut Map<String, Value>) -> usize {
    let mut touched = 0;

    for (path, item) in paths.iter_mut() {
        let Some(operations) = item.as_object_mut() else {
            continue;
        };

        for (method, operation) in operations.iter_mut() {
            let Some(parameters) = operation
                .get_mut("parameters")
                .and_then(Value::as_array_mut)
            else {
                continue;
            };

            let example = example_for_method(method);
            for parameter in parameters.iter_mut().filter_map(Value::as_object_mut) {
                if !is_required_path_parameter(parameter) {
                    continue;
                }
                debug!(path = %path, method = %method, example, "adding path parameter example");
                parameter.insert(EXAMPLE_KEY.to_string(), Value::String(example.to_string()));
                touched += 1;
            }
        }
    }

    touched
}

fn is_required_path_parameter(parameter: &Map<String, Value>) -> bool {
    parameter.get("required").and_then(Value::as_bool) == Some(true)
        && parameter.get("in").and_then(Value::as_str) == Some("path")
}
