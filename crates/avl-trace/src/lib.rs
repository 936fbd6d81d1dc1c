//! Traced AVL tree.
//!
//! An AVL tree over `i32` keys whose mutating operations return the ordered
//! list of internal steps they performed (nodes visited, nodes created or
//! removed, successor substitutions, rotations, height/balance updates).
//! A front end replays that trace to animate the operation, then calls
//! [`AvlTrace::snapshot`] to draw the resulting structure.
//!
//! Nodes own their children outright (`Option<Box<Node>>`), so rotations are
//! ownership moves and there are no parent links to keep in sync.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] and the height / balance-factor helpers |
//! [`trace`] | [`Event`], [`Action`], [`EventRecorder`] |
//! [`rotate`] | single left/right rotations and the [`Case`] labels |
//! [`tree`] | [`AvlTrace`]: recursive insert/remove with rebalancing |
//! [`snapshot`] | [`NodeDescriptor`] and the pre-order serializer |
//! [`util`] | [`assert_avl_tree`] invariant checker, [`InvariantError`] |
//! [`print`] | text drawing of a tree for debugging |
//!
//! # Example
//!
//! ```
//! use avl_trace::{Action, AvlTrace};
//!
//! let mut tree = AvlTrace::new();
//! tree.insert(10);
//! tree.insert(20);
//! let events = tree.insert(30);
//!
//! assert!(events.iter().any(|e| e.action == Action::RotateEvent && e.key == 10));
//! let keys: Vec<i32> = tree.snapshot().iter().map(|d| d.key).collect();
//! assert_eq!(keys, vec![20, 10, 30]);
//! ```

pub mod print;
pub mod rotate;
pub mod snapshot;
pub mod trace;
pub mod tree;
pub mod types;
pub mod util;

pub use rotate::{rotate_left, rotate_right, Case};
pub use snapshot::{snapshot, NodeDescriptor};
pub use trace::{Action, Event, EventRecorder};
pub use tree::AvlTrace;
pub use types::{balance_factor, height, Link, Node};
pub use util::{assert_avl_tree, InvariantError};
