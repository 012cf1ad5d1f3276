use crate::{build::validate::validate_column_ident, prelude::*};
use derive_more::Deref;

///
/// ColumnList
///
/// Ordered column metadata for one model. Order is authoritative: visible
/// column projections must preserve it.
///

#[derive(Clone, Debug, Deref, Serialize)]
pub struct ColumnList {
    pub columns: &'static [Column],
}

impl ColumnList {
    // get
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.ident == ident)
    }
}

impl ValidateNode for ColumnList {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        for (i, column) in self.columns.iter().enumerate() {
            if let Err(sub) = column.validate() {
                errs.merge(column.ident, sub);
            }

            // duplicate idents within one model
            if self.columns[..i].iter().any(|c| c.ident == column.ident) {
                err!(errs, "duplicate column ident '{}'", column.ident);
            }
        }

        errs.result()
    }
}

///
/// Column
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Column {
    pub ident: &'static str,
    pub ty: Primitive,
}

impl ValidateNode for Column {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Err(msg) = validate_column_ident(self.ident) {
            errs.add(msg);
        }

        errs.result()
    }
}

///
/// TESTS
///
