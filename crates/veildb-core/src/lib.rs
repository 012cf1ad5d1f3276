//! Core runtime for VeilDB: the visibility registry, rows and values, and
//! the column/row wrappers exported via the `prelude`.

pub mod error;
pub mod materialize;
pub mod row;
pub mod traits;
pub mod value;
pub mod visibility;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, registries-as-globals, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        row::Row,
        traits::{FromRow, ModelKind},
        value::Value,
        visibility::VisibilityRegistry,
    };
}
