//! Shared fixtures for crate-internal tests.

use crate::{
    error::InternalError,
    row::Row,
    traits::{FromRow, ModelKind},
    value::Value,
};
use veildb_schema::{
    node::{Column, ColumnList, ModelDecl, VisibilityDirective},
    types::Primitive,
};

pub(crate) const PERSON_COLUMNS: &[Column] = &[
    Column {
        ident: "id",
        ty: Primitive::Uint,
    },
    Column {
        ident: "email",
        ty: Primitive::Text,
    },
    Column {
        ident: "name",
        ty: Primitive::Text,
    },
    Column {
        ident: "notes",
        ty: Primitive::Text,
    },
];

/// A person-table model decl; every test hierarchy shares the column list.
pub(crate) fn person_decl(
    path: &'static str,
    parent: Option<&'static str>,
    directives: &'static [VisibilityDirective],
) -> ModelDecl {
    ModelDecl {
        path,
        model_name: path,
        parent,
        columns: ColumnList {
            columns: PERSON_COLUMNS,
        },
        directives,
    }
}

pub(crate) const SESSION_COLUMNS: &[Column] = &[
    Column {
        ident: "id",
        ty: Primitive::Uint,
    },
    Column {
        ident: "agent",
        ty: Primitive::Text,
    },
    Column {
        ident: "token",
        ty: Primitive::Text,
    },
];

pub(crate) static SESSION_DECL: ModelDecl = ModelDecl {
    path: "test_support::Session",
    model_name: "session",
    parent: None,
    columns: ColumnList {
        columns: SESSION_COLUMNS,
    },
    directives: &[VisibilityDirective::Hide(&["token"])],
};

///
/// Session
/// Typed model for materialization tests; `token` is declared hidden.
///

#[derive(Debug)]
pub(crate) struct Session {
    pub id: u64,
    pub agent: Option<String>,
}

impl ModelKind for Session {
    const PATH: &'static str = "test_support::Session";

    fn decl() -> &'static ModelDecl {
        &SESSION_DECL
    }
}

impl FromRow for Session {
    fn from_row(row: Row) -> Result<Self, InternalError> {
        let id = match row.get("id") {
            Some(Value::Uint(id)) => *id,
            _ => {
                return Err(InternalError::materialize_corruption(
                    "row is missing a uint 'id' column",
                ));
            }
        };

        let agent = match row.get("agent") {
            Some(Value::Text(agent)) => Some(agent.clone()),
            _ => None,
        };

        Ok(Self { id, agent })
    }
}
