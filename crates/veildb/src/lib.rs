//! VeilDB: hidden-attribute visibility for typed model schemas.
//!
//! ## Crate layout
//! - `core`: visibility registry, rows and values, and the column/row
//!   wrappers that filter before delegating to a host persistence layer.
//! - `schema`: model/column declarations, visibility directives, the
//!   global schema, and validation.

pub use veildb_core as core;
pub use veildb_schema as schema;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::{
        error::InternalError,
        materialize::{materialize, materialize_model, visible_columns},
        row::Row,
        traits::{FromRow, ModelKind},
        value::Value,
        visibility::{VisibilityRegistry, registry_read, registry_write},
    };
    pub use crate::schema::{
        build::{get_schema, schema_read, schema_write},
        node::{Column, ColumnList, ModelDecl, Schema, VisibilityDirective},
        types::Primitive,
    };
}
