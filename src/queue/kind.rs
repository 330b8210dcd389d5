//! Runtime selection of a runqueue implementation.

use std::fmt;
use std::str::FromStr;

use crate::array::OrderedArrayRunqueue;
use crate::config::ConfigError;
use crate::list::OrderedListRunqueue;
use crate::tree::BinarySearchTreeRunqueue;

use super::Runqueue;

/// The three interchangeable runqueue implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RunqueueKind {
    /// Unbalanced binary search tree keyed by vt.
    #[default]
    Tree,

    /// Slot array kept sorted by vt.
    Array,

    /// Doubly-linked list kept sorted by vt.
    List,
}

impl RunqueueKind {
    /// Every implementation, in a fixed order.
    pub const ALL: [RunqueueKind; 3] = [RunqueueKind::Tree, RunqueueKind::Array, RunqueueKind::List];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            RunqueueKind::Tree => "tree",
            RunqueueKind::Array => "array",
            RunqueueKind::List => "list",
        }
    }

    /// Build an empty queue of this kind with default settings.
    pub fn build(self) -> Box<dyn Runqueue> {
        match self {
            RunqueueKind::Tree => Box::new(BinarySearchTreeRunqueue::new()),
            RunqueueKind::Array => Box::new(OrderedArrayRunqueue::new()),
            RunqueueKind::List => Box::new(OrderedListRunqueue::new()),
        }
    }
}

impl fmt::Display for RunqueueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RunqueueKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tree" | "bst" => Ok(RunqueueKind::Tree),
            "array" | "ordered-array" => Ok(RunqueueKind::Array),
            "list" | "linked-list" => Ok(RunqueueKind::List),
            other => Err(ConfigError::UnknownKind(other.to_string())),
        }
    }
}
