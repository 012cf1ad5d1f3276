use crate::{err, error::ErrorTree, node::Schema};
use std::collections::BTreeMap;

/// Reject duplicate model names across the schema.
///
/// Paths are already unique (enforced at registration); names are the
/// external identity used by exported schemas and must be unique too.
pub fn validate_model_naming(schema: &Schema, errs: &mut ErrorTree) {
    let mut seen: BTreeMap<&str, &str> = BTreeMap::new();

    for decl in schema.models() {
        if let Some(prev) = seen.insert(decl.model_name, decl.path) {
            err!(
                errs,
                "duplicate model name '{}' for '{prev}' and '{}'",
                decl.model_name,
                decl.path
            );
        }
    }
}
