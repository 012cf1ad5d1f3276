use crate::prelude::*;
use derive_more::Display;

///
/// Primitive
///
/// Column type tags carried by declarations. Visibility never inspects the
/// payload type; the tag exists so exported schemas describe their columns.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum Primitive {
    Bool,
    Float,
    Int,
    Text,
    Timestamp,
    Uint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_variant_name() {
        assert_eq!(Primitive::Text.to_string(), "Text");
        assert_eq!(Primitive::Uint.to_string(), "Uint");
    }
}
