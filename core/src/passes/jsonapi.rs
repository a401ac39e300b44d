#![deny(missing_docs)]

//! # JSON:API Relation Pruner
//!
//! JSON:API transports the identifier at the resource level and relations
//! through relationship linkage objects. Schema attributes duplicating either
//! are removed, unless a relation is explicitly exposed on its entity.

use crate::document::{ApiDocument, JSON_API_MEDIA_TYPE};
use crate::exposure::{entity_type_name, Exposure, ExposureOracle};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Attribute name of the resource identifier.
const IDENTIFIER: &str = "id";

/// Whether the relation pruner applies to this document.
///
/// The document must advertise the JSON:API media type and carry definitions.
pub fn is_json_api(document: &ApiDocument) -> bool {
    document.declares_media_type(JSON_API_MEDIA_TYPE) && document.has_definitions()
}

/// Whether a property references another definition.
///
/// Covers to-one (`$ref`) and to-many (`items.$ref`) relations.
pub fn is_relation(property: &Value) -> bool {
    property.get("$ref").is_some()
        || property
            .get("items")
            .and_then(|items| items.get("$ref"))
            .is_some()
}

/// Removes the `id` property from every definition.
///
/// Returns the number of properties removed.
pub fn remove_identifiers(definitions: &mut Map<String, Value>) -> usize {
    let mut removed = 0;

    for (name, definition) in definitions.iter_mut() {
        if let Some(properties) = properties_mut(definition) {
            if properties.remove(IDENTIFIER).is_some() {
                debug!(definition = %name, "removing identifier attribute");
                removed += 1;
            }
        }
    }

    removed
}

/// Removes every relation property not exposed on its entity.
///
/// The entity type is derived from the definition name. Unresolvable
/// entities or properties count as not exposed. Returns the number of
/// properties removed.
pub fn prune_relations(
    definitions: &mut Map<String, Value>,
    oracle: &dyn ExposureOracle,
) -> usize {
    let mut removed = 0;

    for (name, definition) in definitions.iter_mut() {
        let Some(properties) = properties_mut(definition) else {
            continue;
        };
        let entity = entity_type_name(name);

        properties.retain(|property_name, property| {
            if !is_relation(property) {
                return true;
            }

            match oracle.exposure(&entity, property_name) {
                Exposure::Exposed => true,
                Exposure::NotExposed => {
                    debug!(entity = %entity, property = %property_name, "pruning unexposed relation");
                    removed += 1;
                    false
                }
                Exposure::Unresolved(reason) => {
                    warn!(entity = %entity, property = %property_name, %reason, "pruning unresolved relation");
                    removed += 1;
                    false
                }
            }
        });
    }

    removed
}

fn properties_mut(definition: &mut Value) -> Option<&mut Map<String, Value>> {
    definition
        .get_mut("properties")
        .and_then(Value::as_object_mut)
}
