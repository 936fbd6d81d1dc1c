//! Structural invariant checks.

use thiserror::Error;

use crate::types::{Link, Node};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("Height mismatch at {key}: stored {stored}, actual {actual}")]
    HeightMismatch { key: i32, stored: i32, actual: i32 },
    #[error("AVL balance violated at {key}: bf={bf}")]
    Unbalanced { key: i32, bf: i32 },
    #[error("Node order violated: {prev} precedes {next}")]
    OrderViolated { prev: i32, next: i32 },
    #[error("Duplicate key {key}")]
    DuplicateKey { key: i32 },
}

/// Checks heights, balance and key order of a whole tree.
pub fn assert_avl_tree(root: &Link) -> Result<(), InvariantError> {
    let Some(root) = root.as_deref() else {
        return Ok(());
    };

    validate_heights_and_bf(root)?;

    let mut keys = Vec::new();
    in_order(root, &mut keys);
    for pair in keys.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        if prev == next {
            return Err(InvariantError::DuplicateKey { key: next });
        }
        if prev > next {
            return Err(InvariantError::OrderViolated { prev, next });
        }
    }

    Ok(())
}

/// Returns the recomputed height of `node`.
fn validate_heights_and_bf(node: &Node) -> Result<i32, InvariantError> {
    let lh = match node.left.as_deref() {
        Some(l) => validate_heights_and_bf(l)?,
        None => 0,
    };
    let rh = match node.right.as_deref() {
        Some(r) => validate_heights_and_bf(r)?,
        None => 0,
    };

    let actual = 1 + lh.max(rh);
    if node.height != actual {
        return Err(InvariantError::HeightMismatch {
            key: node.key,
            stored: node.height,
            actual,
        });
    }
    let bf = lh - rh;
    if !(-1..=1).contains(&bf) {
        return Err(InvariantError::Unbalanced { key: node.key, bf });
    }
    Ok(actual)
}

fn in_order(node: &Node, out: &mut Vec<i32>) {
    if let Some(l) = node.left.as_deref() {
        in_order(l, out);
    }
    out.push(node.key);
    if let Some(r) = node.right.as_deref() {
        in_order(r, out);
    }
}
