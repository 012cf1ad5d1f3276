use std::collections::BTreeSet;

///
/// HookOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HookOp {
    Hide,
    Unhide,
}

///
/// ChildHook
///
/// One hide/unhide operation a model applies to each direct child at the
/// child's registration. Hooks belong to the model that declared them and
/// are never copied into children; a grandchild only sees the effect if
/// the child re-declares.
///

#[derive(Clone, Debug)]
pub struct ChildHook {
    op: HookOp,
    names: Vec<String>,
}

impl ChildHook {
    #[must_use]
    pub fn hide(names: &[&str]) -> Self {
        Self::new(HookOp::Hide, names)
    }

    #[must_use]
    pub fn unhide(names: &[&str]) -> Self {
        Self::new(HookOp::Unhide, names)
    }

    fn new(op: HookOp, names: &[&str]) -> Self {
        Self {
            op,
            names: names.iter().map(ToString::to_string).collect(),
        }
    }

    #[must_use]
    pub const fn op(&self) -> HookOp {
        self.op
    }

    /// Apply this hook's operation to a child's effective hidden set.
    pub(crate) fn apply(&self, hidden: &mut BTreeSet<String>) {
        match self.op {
            HookOp::Hide => hidden.extend(self.names.iter().cloned()),
            HookOp::Unhide => {
                for name in &self.names {
                    hidden.remove(name);
                }
            }
        }
    }
}
