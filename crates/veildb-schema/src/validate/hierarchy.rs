use crate::{err, error::ErrorTree, node::Schema};

/// Enforce hierarchy invariants: every parent must exist and be declared
/// before its children. Self-parents are caught at the node level; the
/// declared-before rule makes cycles unrepresentable.
pub fn validate_model_hierarchy(schema: &Schema, errs: &mut ErrorTree) {
    for (child_pos, decl) in schema.models().iter().enumerate() {
        let Some(parent) = decl.parent else {
            continue;
        };

        match schema.position(parent) {
            None => {
                err!(
                    errs,
                    "model '{}' declares unknown parent '{parent}'",
                    decl.path
                );
            }
            Some(parent_pos) if parent_pos > child_pos => {
                err!(
                    errs,
                    "model '{}' is declared before its parent '{parent}'",
                    decl.path
                );
            }
            Some(_) => {}
        }
    }
}
