mod column;
mod directive;
mod model;
mod schema;

pub use column::{Column, ColumnList};
pub use directive::VisibilityDirective;
pub use model::ModelDecl;
pub use schema::Schema;

use crate::error::ErrorTree;
use thiserror::Error as ThisError;

///
/// NodeError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum NodeError {
    #[error("model '{0}' already declared")]
    ModelAlreadyDeclared(String),

    #[error("model '{0}' not found in schema")]
    ModelNotFound(String),
}

///
/// ValidateNode
///
/// Local, structural validation. Cross-node invariants live in the
/// schema-wide passes under `validate`.
///

pub trait ValidateNode {
    fn validate(&self) -> Result<(), ErrorTree> {
        Ok(())
    }
}
