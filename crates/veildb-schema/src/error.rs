//! Validation error aggregation.
//!
//! Node and schema-wide validation both push plain messages into an
//! [`ErrorTree`]; subtrees are keyed by the route of the node that produced
//! them so a failure report reads as `path: message` lines.

use std::{collections::BTreeMap, fmt};

/// Push a formatted message into an [`ErrorTree`].
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}

///
/// ErrorTree
///

#[derive(Clone, Debug, Default)]
pub struct ErrorTree {
    errors: Vec<String>,
    children: BTreeMap<String, ErrorTree>,
}

impl ErrorTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one message at this level.
    pub fn add(&mut self, msg: impl ToString) {
        self.errors.push(msg.to_string());
    }

    /// Merge a subtree under a route label, dropping it if empty.
    pub fn merge(&mut self, route: impl Into<String>, tree: Self) {
        if tree.is_empty() {
            return;
        }

        self.children.entry(route.into()).or_default().extend(tree);
    }

    fn extend(&mut self, other: Self) {
        self.errors.extend(other.errors);
        for (route, child) in other.children {
            self.merge(route, child);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.children.values().all(Self::is_empty)
    }

    /// Total number of messages across the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len() + self.children.values().map(Self::len).sum::<usize>()
    }

    /// Consume the tree: `Ok(())` when no messages were collected.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    fn lines(&self, route: &str, out: &mut Vec<String>) {
        for msg in &self.errors {
            if route.is_empty() {
                out.push(msg.clone());
            } else {
                out.push(format!("{route}: {msg}"));
            }
        }
        for (label, child) in &self.children {
            let route = if route.is_empty() {
                label.clone()
            } else {
                format!("{route}.{label}")
            };
            child.lines(&route, out);
        }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = Vec::new();
        self.lines("", &mut out);

        write!(f, "{}", out.join("; "))
    }
}

///
/// TESTS
///
