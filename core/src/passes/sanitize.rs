#![deny(missing_docs)]

//! # Definition Sanitizer
//!
//! Generators emit a regex `pattern` next to `format` for some fields
//! (notably `date-time`). The format already describes the value, and the
//! pattern tends to contradict it, so the pattern is dropped.

use serde_json::{Map, Value};
use tracing::debug;

/// Removes `pattern` from every property that also carries a `format`.
///
/// Returns the number of patterns removed.
pub fn remove_format_patterns(definitions: &mut Map<String, Value>) -> usize {
    let mut removed = 0;

    for (name, definition) in definitions.iter_mut() {
        let Some(properties) = definition
            .get_mut("properties")
            .and_then(Value::as_object_mut)
        else {
            continue;
        };

        for (property_name, property) in properties.iter_mut() {
            let Some(property) = property.as_object_mut() else {
                continue;
            };
            if property.contains_key("format") && property.remove("pattern").is_some() {
                debug!(definition = %name, property = %property_name, "removing redundant pattern");
                removed += 1;
            }
        }
    }

    removed
}
