//! # Runqueues with virtual-time aggregate queries
//!
//! A runqueue holds scheduling entities ("processes"), each with a unique
//! label and a virtual time (`vt`), ordered by `vt` ascending. Besides
//! enqueue, dequeue-minimum, lookup and removal, every runqueue answers the
//! question a fair-share scheduler keeps asking: how much virtual runtime is
//! queued strictly before, or strictly after, a given process?
//!
//! ## Implementations
//!
//! 1. **[`BinarySearchTreeRunqueue`]**: unbalanced BST keyed by vt; nodes carry
//!    a branch role (root / left child / right child) that drives the
//!    aggregate-time formulas
//! 2. **[`OrderedArrayRunqueue`]**: sorted slot array with geometric growth
//! 3. **[`OrderedListRunqueue`]**: sorted doubly-linked list with
//!    nearest-end positional access
//!
//! All three satisfy the [`Runqueue`] trait and place a new process after
//! every queued process of equal vt, so for any sequence of operations they
//! produce identical observable results.
//!
//! ## Usage Example
//!
//! ```
//! use runqueue::{Runqueue, RunqueueKind};
//!
//! let mut queue = RunqueueKind::Tree.build();
//! queue.enqueue("P1", 10);
//! queue.enqueue("P2", 5);
//! queue.enqueue("P3", 20);
//!
//! assert_eq!(queue.preceding_process_time("P1"), Some(5));
//! assert_eq!(queue.succeeding_process_time("P1"), Some(20));
//! assert_eq!(queue.dequeue().as_deref(), Some("P2"));
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod array;   // Ordered slot array
pub mod config;  // Construction settings
pub mod list;    // Ordered doubly-linked list
pub mod process; // Process records
pub mod queue;   // The shared contract
pub mod script;  // Command-script driver
pub mod tree;    // Branch-role binary search tree
pub mod util;    // Helper structures

// Re-exports for convenience
pub use array::{GrowthPolicy, OrderedArrayRunqueue};
pub use config::{ConfigError, RunqueueConfig};
pub use list::OrderedListRunqueue;
pub use process::{Process, TimeSum, Vt};
pub use queue::{Runqueue, RunqueueKind};
pub use script::{Command, Divergence, ScriptError};
pub use tree::{BinarySearchTreeRunqueue, BranchRole};
