//! Column-enumeration and row-materialization wrappers.
//!
//! The host persistence layer owns column metadata and row decoding; these
//! entry points filter both through the visibility registry and then
//! delegate, so callers never observe hidden attributes.

use crate::{
    error::InternalError,
    row::Row,
    traits::{FromRow, ModelKind},
    visibility::VisibilityRegistry,
};
use veildb_schema::node::Column;

/// Enumerate the columns a model exposes once hiding is applied.
/// Relative column order follows the declaration.
pub fn visible_columns<M: ModelKind>(
    registry: &VisibilityRegistry,
) -> Result<Vec<Column>, InternalError> {
    registry.visible_columns(M::PATH, &M::decl().columns)
}

/// Materialize one row through a decode delegate.
///
/// Hidden entries are removed before the delegate runs. Delegate failures
/// are forwarded untouched; this wrapper adds no recovery and no
/// transformation.
pub fn materialize<T, DecodeFn>(
    registry: &VisibilityRegistry,
    path: &str,
    row: &Row,
    decode: DecodeFn,
) -> Result<T, InternalError>
where
    DecodeFn: FnOnce(Row) -> Result<T, InternalError>,
{
    let filtered = registry.filter_row(path, row)?;

    decode(filtered)
}

/// Materialize one row into its typed model.
pub fn materialize_model<M>(registry: &VisibilityRegistry, row: &Row) -> Result<M, InternalError>
where
    M: ModelKind + FromRow,
{
    materialize(registry, M::PATH, row, M::from_row)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::{ErrorClass, ErrorOrigin},
        test_support::{SESSION_DECL, Session},
        value::Value,
    };

    fn session_registry() -> VisibilityRegistry {
        let mut registry = VisibilityRegistry::new();
        registry
            .register(&SESSION_DECL)
            .expect("session decl should register");

        registry
    }

    fn session_row() -> Row {
        [
            ("id", Value::Uint(7)),
            ("agent", Value::from("cli")),
            ("token", Value::from("s3cr3t")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn hidden_entries_never_reach_the_decoder() {
        let registry = session_registry();

        let seen = materialize(&registry, Session::PATH, &session_row(), |row| {
            Ok(row.keys().cloned().collect::<Vec<_>>())
        })
        .expect("materialization should succeed");

        assert_eq!(
            seen,
            ["agent", "id"],
            "the decoder should only see visible columns"
        );
    }

    #[test]
    fn materialize_model_builds_the_typed_instance() {
        let registry = session_registry();

        let session: Session = materialize_model(&registry, &session_row())
            .expect("a well-formed row should materialize");

        assert_eq!(session.id, 7);
        assert_eq!(session.agent.as_deref(), Some("cli"));
    }

    #[test]
    fn decode_failures_pass_through_untouched() {
        let registry = session_registry();
        let row: Row = [("agent", Value::from("cli"))].into_iter().collect();

        let err = materialize_model::<Session>(&registry, &row)
            .expect_err("a row without an id should fail to decode");

        assert_eq!(err.class, ErrorClass::Corruption);
        assert_eq!(err.origin, ErrorOrigin::Materialize);
        assert!(
            err.message.contains("id"),
            "the decoder's own message should be forwarded"
        );
    }

    #[test]
    fn unregistered_models_fail_before_the_decoder_runs() {
        let registry = VisibilityRegistry::new();

        let err = materialize::<(), _>(&registry, "app::Missing", &session_row(), |_| {
            panic!("decode delegate must not run for unregistered models")
        })
        .expect_err("unregistered path should fail lookup");

        assert_eq!(err.origin, ErrorOrigin::Registry);
    }

    #[test]
    fn visible_columns_reflect_the_hidden_set() {
        let registry = session_registry();

        let idents: Vec<&str> = visible_columns::<Session>(&registry)
            .expect("registered model should project columns")
            .iter()
            .map(|c| c.ident)
            .collect();

        assert_eq!(idents, ["id", "agent"]);
    }
}
