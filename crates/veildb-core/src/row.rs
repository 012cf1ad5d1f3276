use crate::value::Value;
use derive_more::{Deref, DerefMut, From, IntoIterator};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// Row
///
/// Raw column-name → value mapping handed over by a persistence layer when
/// loading one record. Filtering produces a new `Row`; the input is never
/// mutated.
///

#[derive(
    Clone, Debug, Default, Deref, DerefMut, Deserialize, From, IntoIterator, PartialEq, Serialize,
)]
pub struct Row(BTreeMap<String, Value>);

impl Row {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

///
/// TESTS
///
