use crate::prelude::*;

///
/// VisibilityDirective
///
/// One declarative visibility call from a model definition, applied in
/// declaration order when the model is registered.
///
/// `Hide` / `Unhide` act on the declaring model itself. The `InChildren`
/// variants never touch the declaring model: they queue an operation that
/// runs against each direct child at its own registration, and the queue is
/// not inherited further unless a child re-declares it.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub enum VisibilityDirective {
    Hide(&'static [&'static str]),
    Unhide(&'static [&'static str]),
    HideInChildren(&'static [&'static str]),
    UnhideInChildren(&'static [&'static str]),
}

impl VisibilityDirective {
    /// Attribute names this directive carries.
    #[must_use]
    pub const fn names(&self) -> &'static [&'static str] {
        match self {
            Self::Hide(names)
            | Self::Unhide(names)
            | Self::HideInChildren(names)
            | Self::UnhideInChildren(names) => names,
        }
    }
}
