//! The traced AVL tree engine.

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::print::print;
use crate::rotate::{rotate_left, rotate_left_right, rotate_right, rotate_right_left, Case};
use crate::snapshot::{snapshot, NodeDescriptor};
use crate::trace::{Event, EventRecorder};
use crate::types::{balance_factor, height, min_key, Link, Node};
use crate::util::{assert_avl_tree, InvariantError};

/// AVL tree over `i32` keys whose mutations return a step-by-step trace.
///
/// Every [`insert`](Self::insert) and [`remove`](Self::remove) call starts a
/// fresh [`EventRecorder`] and returns its events in the order they happened.
/// Inserting a present key or removing an absent one is not an error: the
/// trace then holds only the search path.
#[derive(Clone, Debug, Default)]
pub struct AvlTrace {
    root: Link,
    len: usize,
}

impl AvlTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: i32) -> Vec<Event> {
        let mut recorder = EventRecorder::new();
        let (root, inserted) = insert_at(self.root.take(), key, &mut recorder);
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
        debug!(key, inserted, events = recorder.len(), "insert");
        recorder.into_events()
    }

    pub fn remove(&mut self, key: i32) -> Vec<Event> {
        let mut recorder = EventRecorder::new();
        let (root, removed) = remove_at(self.root.take(), key, &mut recorder);
        self.root = root;
        if removed {
            self.len -= 1;
        }
        debug!(key, removed, events = recorder.len(), "remove");
        recorder.into_events()
    }

    /// Pre-order list of node descriptors for rendering.
    pub fn snapshot(&self) -> Vec<NodeDescriptor> {
        snapshot(&self.root)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn contains(&self, key: i32) -> bool {
        let mut curr = self.root.as_deref();
        while let Some(node) = curr {
            curr = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Height of the whole tree, `0` when empty.
    pub fn height(&self) -> i32 {
        height(&self.root)
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    pub fn root_key(&self) -> Option<i32> {
        self.root.as_ref().map(|n| n.key)
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> Vec<i32> {
        fn walk(link: &Link, out: &mut Vec<i32>) {
            if let Some(node) = link {
                walk(&node.left, out);
                out.push(node.key);
                walk(&node.right, out);
            }
        }
        let mut out = Vec::with_capacity(self.len);
        walk(&self.root, &mut out);
        out
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        assert_avl_tree(&self.root)
    }

    pub fn print(&self) -> String {
        print(&self.root, "")
    }
}

impl fmt::Display for AvlTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}

impl Extend<i32> for AvlTrace {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl FromIterator<i32> for AvlTrace {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Recomputes height, records the stats event and returns the balance factor.
fn refresh(node: &mut Node, recorder: &mut EventRecorder) -> i32 {
    node.update_height();
    let bf = node.balance_factor();
    recorder.stats(node.key, node.height, bf);
    bf
}

/// Returns the new subtree root and whether a node was created.
fn insert_at(link: Link, key: i32, recorder: &mut EventRecorder) -> (Box<Node>, bool) {
    let Some(mut node) = link else {
        recorder.node_inserted(key);
        return (Box::new(Node::new(key)), true);
    };

    recorder.search_visit(node.key);
    match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, inserted) = insert_at(node.left.take(), key, recorder);
            node.left = Some(left);
            if !inserted {
                return (node, false);
            }
        }
        Ordering::Greater => {
            let (right, inserted) = insert_at(node.right.take(), key, recorder);
            node.right = Some(right);
            if !inserted {
                return (node, false);
            }
        }
        Ordering::Equal => return (node, false),
    }

    let bf = refresh(&mut node, recorder);
    (rebalance_after_insert(node, bf, key, recorder), true)
}

/// Case selection compares the inserted key with the heavy child's key.
fn rebalance_after_insert(
    node: Box<Node>,
    bf: i32,
    key: i32,
    recorder: &mut EventRecorder,
) -> Box<Node> {
    if bf > 1 {
        let left_key = node.left.as_ref().map(|l| l.key);
        match left_key {
            Some(lk) if key < lk => rotate_right(node, Case::LL, recorder),
            Some(lk) if key > lk => rotate_left_right(node, recorder),
            _ => node,
        }
    } else if bf < -1 {
        let right_key = node.right.as_ref().map(|r| r.key);
        match right_key {
            Some(rk) if key > rk => rotate_left(node, Case::RR, recorder),
            Some(rk) if key < rk => rotate_right_left(node, recorder),
            _ => node,
        }
    } else {
        node
    }
}

/// Returns the new subtree root and whether a node was removed.
fn remove_at(link: Link, key: i32, recorder: &mut EventRecorder) -> (Link, bool) {
    let Some(mut node) = link else {
        return (None, false);
    };

    recorder.search_visit(node.key);
    match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, removed) = remove_at(node.left.take(), key, recorder);
            node.left = left;
            if !removed {
                return (Some(node), false);
            }
        }
        Ordering::Greater => {
            let (right, removed) = remove_at(node.right.take(), key, recorder);
            node.right = right;
            if !removed {
                return (Some(node), false);
            }
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => {
                recorder.node_removed(key);
                return (None, true);
            }
            (Some(child), None) | (None, Some(child)) => {
                // The child's contents move up into this slot; its box is dropped.
                *node = *child;
                recorder.node_removed(key);
            }
            (Some(left), Some(right)) => {
                let successor = min_key(&right);
                node.key = successor;
                recorder.successor(successor);
                node.left = Some(left);
                let (right, _) = remove_at(Some(right), successor, recorder);
                node.right = right;
            }
        },
    }

    let bf = refresh(&mut node, recorder);
    (Some(rebalance_after_remove(node, bf, recorder)), true)
}

/// Case selection looks at the balance factor of the taller child.
fn rebalance_after_remove(node: Box<Node>, bf: i32, recorder: &mut EventRecorder) -> Box<Node> {
    if bf > 1 {
        if balance_factor(&node.left) >= 0 {
            rotate_right(node, Case::LL, recorder)
        } else {
            rotate_left_right(node, recorder)
        }
    } else if bf < -1 {
        if balance_factor(&node.right) <= 0 {
            rotate_left(node, Case::RR, recorder)
        } else {
            rotate_right_left(node, recorder)
        }
    } else {
        node
    }
}
