use crate::{build::validate::validate_model_name, prelude::*};

///
/// ModelDecl
///
/// One persisted model type. `path` is the registry key; `parent` points at
/// the model this one inherits visibility from (single inheritance, the
/// single-table-inheritance case). `directives` are the declarative
/// visibility calls of the model definition, in order.
///

#[derive(Clone, Debug, Serialize)]
pub struct ModelDecl {
    pub path: &'static str,
    pub model_name: &'static str,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<&'static str>,

    pub columns: ColumnList,

    #[serde(default, skip_serializing_if = "<[_]>::is_empty")]
    pub directives: &'static [VisibilityDirective],
}

impl ValidateNode for ModelDecl {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.path.is_empty() {
            err!(errs, "model path is empty");
        }
        if let Err(msg) = validate_model_name(self.model_name) {
            errs.add(msg);
        }
        if self.parent == Some(self.path) {
            err!(errs, "model '{}' cannot be its own parent", self.path);
        }
        if let Err(sub) = self.columns.validate() {
            errs.merge("columns", sub);
        }

        // Directives naming attributes that match no column are legal:
        // hiding an unknown name is a silent no-op once intersected with
        // the actual column list.

        errs.result()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &[Column] = &[
        Column {
            ident: "id",
            ty: Primitive::Uint,
        },
        Column {
            ident: "secret",
            ty: Primitive::Text,
        },
    ];

    fn decl() -> ModelDecl {
        ModelDecl {
            path: "app::Pc",
            model_name: "pc",
            parent: None,
            columns: ColumnList { columns: COLUMNS },
            directives: &[VisibilityDirective::Hide(&["secret"])],
        }
    }

    #[test]
    fn well_formed_decl_validates() {
        assert!(decl().validate().is_ok());
    }

    #[test]
    fn self_parent_is_rejected() {
        let mut bad = decl();
        bad.parent = Some("app::Pc");

        let errs = bad.validate().unwrap_err();
        assert!(
            errs.to_string().contains("cannot be its own parent"),
            "self-parent should be a validation failure"
        );
    }

    #[test]
    fn directives_naming_unknown_columns_are_legal() {
        let mut decl = decl();
        decl.directives = &[VisibilityDirective::Hide(&["no_such_column"])];

        assert!(
            decl.validate().is_ok(),
            "hiding an unknown name is a silent no-op, not an error"
        );
    }

    #[test]
    fn empty_model_name_is_rejected() {
        let mut bad = decl();
        bad.model_name = "";

        assert!(bad.validate().is_err());
    }

    #[test]
    fn decl_serializes_for_schema_export() {
        let json = serde_json::to_value(decl()).expect("decl should serialize");

        assert_eq!(json["path"], "app::Pc");
        assert_eq!(json["columns"]["columns"][1]["ident"], "secret");
    }
}
