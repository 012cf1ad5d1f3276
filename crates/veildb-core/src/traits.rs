use crate::{error::InternalError, row::Row};
use veildb_schema::node::ModelDecl;

///
/// ModelKind
///
/// Ties a Rust type to its schema declaration so registry lookups and
/// column projections can be driven from the type alone.
///

pub trait ModelKind {
    const PATH: &'static str;

    fn decl() -> &'static ModelDecl;
}

///
/// FromRow
///
/// Convert one (already filtered) row into a typed model instance. This is
/// the only fallible collaborator in materialization; its errors are
/// forwarded untouched.
///

pub trait FromRow: Sized {
    fn from_row(row: Row) -> Result<Self, InternalError>;
}
