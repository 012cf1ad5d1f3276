mod hook;


pub use hook::{ChildHook, HookOp};

use crate::{
    error::{ErrorClass, ErrorOrigin, InternalError},
    row::Row,
};
use std::{
    collections::{BTreeSet, HashMap},
    sync::{LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use thiserror::Error as ThisError;
use veildb_schema::node::{Column, ColumnList, ModelDecl, Schema, VisibilityDirective};

///
/// RegistryError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum RegistryError {
    #[error("model '{0}' already registered")]
    ModelAlreadyRegistered(String),

    #[error("model '{0}' not registered")]
    ModelNotRegistered(String),

    #[error("model '{model}' names parent '{parent}' which is not registered")]
    ParentNotRegistered { model: String, parent: String },
}

impl RegistryError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::ModelNotRegistered(_) => ErrorClass::Internal,
            Self::ModelAlreadyRegistered(_) | Self::ParentNotRegistered { .. } => {
                ErrorClass::InvariantViolation
            }
        }
    }
}

impl From<RegistryError> for InternalError {
    fn from(err: RegistryError) -> Self {
        Self::new(err.class(), ErrorOrigin::Registry, err.to_string())
    }
}

///
/// ModelVisibility
///
/// Per-model hidden-attribute state.
///
/// `declared` is the set a child snapshots at registration: the parent's
/// `declared` copy plus this model's own Hide/Unhide directives. `effective`
/// additionally carries the parent's child-hook effects and is what column
/// projection and row filtering consult. Keeping the two apart is what makes
/// hook effects stop at direct children.
///

#[derive(Clone, Debug, Default)]
pub struct ModelVisibility {
    declared: BTreeSet<String>,
    effective: BTreeSet<String>,
    hooks: Vec<ChildHook>,
}

impl ModelVisibility {
    /// Snapshot a parent's state for a newly registered child.
    ///
    /// The child copies `declared` (not `effective`), then the parent's
    /// hooks run against the child's effective set in declaration order.
    /// The hook list itself is not inherited.
    fn inherit_from(parent: &Self) -> Self {
        let declared = parent.declared.clone();
        let mut effective = parent.declared.clone();
        for hook in &parent.hooks {
            hook.apply(&mut effective);
        }

        Self {
            declared,
            effective,
            hooks: Vec::new(),
        }
    }

    fn hide(&mut self, names: &[&str]) {
        for name in names {
            self.declared.insert((*name).to_string());
            self.effective.insert((*name).to_string());
        }
    }

    fn unhide(&mut self, names: &[&str]) {
        for name in names {
            self.declared.remove(*name);
            self.effective.remove(*name);
        }
    }

    fn apply_directive(&mut self, directive: &VisibilityDirective) {
        match directive {
            VisibilityDirective::Hide(names) => self.hide(names),
            VisibilityDirective::Unhide(names) => self.unhide(names),
            VisibilityDirective::HideInChildren(names) => self.hooks.push(ChildHook::hide(names)),
            VisibilityDirective::UnhideInChildren(names) => {
                self.hooks.push(ChildHook::unhide(names));
            }
        }
    }

    /// The attribute names currently hidden on this model.
    #[must_use]
    pub const fn hidden(&self) -> &BTreeSet<String> {
        &self.effective
    }

    #[must_use]
    pub fn is_hidden(&self, name: &str) -> bool {
        self.effective.contains(name)
    }

    /// Pending child-registration hooks, in declaration order.
    #[must_use]
    pub fn hooks(&self) -> &[ChildHook] {
        &self.hooks
    }
}

///
/// VisibilityRegistry
///
/// Hidden-attribute state for every registered model, keyed by model path.
/// Populated in declaration order so parents are present when children
/// snapshot them.
///

#[derive(Debug, Default)]
pub struct VisibilityRegistry {
    models: HashMap<&'static str, ModelVisibility>,
}

impl VisibilityRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a schema's declarations, in order.
    pub fn from_schema(schema: &Schema) -> Result<Self, InternalError> {
        let mut registry = Self::new();
        for decl in schema.models() {
            registry.register(decl)?;
        }

        Ok(registry)
    }

    /// Register one model: snapshot the parent, run its hooks, then apply
    /// the model's own directives.
    pub fn register(&mut self, decl: &ModelDecl) -> Result<(), InternalError> {
        if self.models.contains_key(decl.path) {
            return Err(RegistryError::ModelAlreadyRegistered(decl.path.to_string()).into());
        }

        let mut vis = match decl.parent {
            Some(parent) => {
                let parent_vis = self.models.get(parent).ok_or_else(|| {
                    RegistryError::ParentNotRegistered {
                        model: decl.path.to_string(),
                        parent: parent.to_string(),
                    }
                })?;

                ModelVisibility::inherit_from(parent_vis)
            }
            None => ModelVisibility::default(),
        };

        for directive in decl.directives {
            vis.apply_directive(directive);
        }

        self.models.insert(decl.path, vis);
        Ok(())
    }

    /// Union `names` into a model's hidden set. Total; repeats are absorbed.
    pub fn hide(&mut self, path: &str, names: &[&str]) -> Result<(), InternalError> {
        self.try_get_mut(path)?.hide(names);
        Ok(())
    }

    /// Remove `names` from a model's hidden set. Absent names are a no-op.
    pub fn unhide(&mut self, path: &str, names: &[&str]) -> Result<(), InternalError> {
        self.try_get_mut(path)?.unhide(names);
        Ok(())
    }

    /// Queue `names` to be hidden in each future direct child of `path`.
    /// The declaring model's own hidden set is not touched.
    pub fn hide_in_children(&mut self, path: &str, names: &[&str]) -> Result<(), InternalError> {
        self.try_get_mut(path)?.hooks.push(ChildHook::hide(names));
        Ok(())
    }

    /// Queue `names` to be unhidden in each future direct child of `path`.
    pub fn unhide_in_children(&mut self, path: &str, names: &[&str]) -> Result<(), InternalError> {
        self.try_get_mut(path)?.hooks.push(ChildHook::unhide(names));
        Ok(())
    }

    /// Current hidden set of a model, as a copy.
    pub fn hidden_attributes(&self, path: &str) -> Result<BTreeSet<String>, InternalError> {
        Ok(self.try_get(path)?.hidden().clone())
    }

    pub fn is_hidden(&self, path: &str, name: &str) -> Result<bool, InternalError> {
        Ok(self.try_get(path)?.is_hidden(name))
    }

    /// Project an ordered column list down to the visible columns,
    /// preserving relative order.
    pub fn visible_columns(
        &self,
        path: &str,
        columns: &ColumnList,
    ) -> Result<Vec<Column>, InternalError> {
        let vis = self.try_get(path)?;

        Ok(columns
            .iter()
            .filter(|c| !vis.is_hidden(c.ident))
            .copied()
            .collect())
    }

    /// Produce a new row holding only the entries whose column is visible.
    pub fn filter_row(&self, path: &str, row: &Row) -> Result<Row, InternalError> {
        let vis = self.try_get(path)?;

        Ok(row
            .iter()
            .filter(|(name, _)| !vis.is_hidden(name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect())
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.models.contains_key(path)
    }

    /// Look up a model's visibility state.
    pub fn try_get(&self, path: &str) -> Result<&ModelVisibility, InternalError> {
        self.models
            .get(path)
            .ok_or_else(|| RegistryError::ModelNotRegistered(path.to_string()).into())
    }

    fn try_get_mut(&mut self, path: &str) -> Result<&mut ModelVisibility, InternalError> {
        self.models
            .get_mut(path)
            .ok_or_else(|| RegistryError::ModelNotRegistered(path.to_string()).into())
    }
}

///
/// REGISTRY
/// the static data structure
///

static REGISTRY: LazyLock<RwLock<VisibilityRegistry>> =
    LazyLock::new(|| RwLock::new(VisibilityRegistry::new()));

/// Acquire a write guard to the global registry during init-time
/// registration (or post-startup hide/unhide calls).
pub fn registry_write() -> RwLockWriteGuard<'static, VisibilityRegistry> {
    REGISTRY
        .write()
        .expect("visibility registry RwLock poisoned while acquiring write lock")
}

/// Acquire a read guard to the global registry.
pub fn registry_read() -> RwLockReadGuard<'static, VisibilityRegistry> {
    REGISTRY
        .read()
        .expect("visibility registry RwLock poisoned while acquiring read lock")
}
