pub mod build;
pub mod error;
pub mod node;
pub mod types;
pub mod validate;

/// Maximum length for model schema identifiers.
pub const MAX_MODEL_NAME_LEN: usize = 64;

/// Maximum length for column schema identifiers.
pub const MAX_COLUMN_NAME_LEN: usize = 64;

use crate::{build::BuildError, node::NodeError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{err, error::ErrorTree, node::*, types::Primitive};
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    BuildError(#[from] BuildError),

    #[error(transparent)]
    NodeError(#[from] NodeError),
}
