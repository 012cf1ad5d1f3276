use crate::{MAX_COLUMN_NAME_LEN, MAX_MODEL_NAME_LEN};

/// Ensure a column ident is non-empty, ASCII, and within the maximum length.
pub(crate) fn validate_column_ident(ident: &str) -> Result<(), String> {
    validate_name("column ident", ident, MAX_COLUMN_NAME_LEN)
}

/// Ensure a model name is non-empty, ASCII, and within the maximum length.
pub(crate) fn validate_model_name(name: &str) -> Result<(), String> {
    validate_name("model name", name, MAX_MODEL_NAME_LEN)
}

fn validate_name(what: &str, name: &str, max: usize) -> Result<(), String> {
    if name.is_empty() {
        return Err(format!("{what} is empty"));
    }
    if name.len() > max {
        return Err(format!("{what} '{name}' exceeds max length {max}"));
    }
    if !name.is_ascii() {
        return Err(format!("{what} '{name}' must be ASCII"));
    }

    Ok(())
}
