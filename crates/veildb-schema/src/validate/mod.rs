//! Schema validation orchestration and shared helpers.

pub mod hierarchy;
pub mod naming;

use crate::{
    error::ErrorTree,
    node::{Schema, ValidateNode},
};

/// Run full schema validation in a staged, deterministic order.
pub fn validate_schema(schema: &Schema) -> Result<(), ErrorTree> {
    // Phase 1: validate each node (structural + local invariants).
    let mut errors = validate_nodes(schema);

    // Phase 2: enforce schema-wide invariants.
    validate_global(schema, &mut errors);

    errors.result()
}

// Validate all declarations, grouping failures under the model's path.
fn validate_nodes(schema: &Schema) -> ErrorTree {
    let mut errors = ErrorTree::new();

    for decl in schema.models() {
        if let Err(sub) = decl.validate() {
            errors.merge(decl.path, sub);
        }
    }

    errors
}

// Run global validation passes that require a full schema view.
fn validate_global(schema: &Schema, errors: &mut ErrorTree) {
    naming::validate_model_naming(schema, errors);
    hierarchy::validate_model_hierarchy(schema, errors);
}

///
/// TESTS
///
