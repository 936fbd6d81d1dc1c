//! Single and double rotations.
//!
//! Rotations only re-link ownership edges and recompute the height of the two
//! participants; they never create or drop nodes. Each single rotation records
//! one [`Action::RotateEvent`] at its pivot, a double rotation additionally
//! records a preparation event right before its first half.

use std::fmt;

use tracing::trace;

use crate::trace::{Action, EventRecorder};
use crate::types::Node;

/// Imbalance shape that triggered a rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Case {
    LL,
    RR,
    LR,
    RL,
}

impl Case {
    pub fn as_str(self) -> &'static str {
        match self {
            Case::LL => "LL",
            Case::RR => "RR",
            Case::LR => "LR",
            Case::RL => "RL",
        }
    }

    fn prep_info(self) -> String {
        match self {
            Case::LR => format!("Left Rotate ({self} Prep)"),
            Case::RL => format!("Right Rotate ({self} Prep)"),
            Case::LL | Case::RR => format!("Rotate ({self} Prep)"),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rotates right around `y`: its left child `x` takes its place.
///
/// ```text
///       y            x
///      / \          / \
///     x   c   =>   a   y
///    / \              / \
///   a   t            t   c
/// ```
///
/// Returns `y` untouched when it has no left child.
pub fn rotate_right(mut y: Box<Node>, case: Case, recorder: &mut EventRecorder) -> Box<Node> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    recorder.push(
        Action::RotateEvent,
        y.key,
        format!("Performing Right Rotate ({case} Case)"),
    );
    trace!(pivot = y.key, case = case.as_str(), "right rotation");

    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

/// Rotates left around `x`: its right child `y` takes its place.
///
/// Returns `x` untouched when it has no right child.
pub fn rotate_left(mut x: Box<Node>, case: Case, recorder: &mut EventRecorder) -> Box<Node> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    recorder.push(
        Action::RotateEvent,
        x.key,
        format!("Performing Left Rotate ({case} Case)"),
    );
    trace!(pivot = x.key, case = case.as_str(), "left rotation");

    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

/// Left rotation on the left child, then right rotation at `node`.
pub fn rotate_left_right(mut node: Box<Node>, recorder: &mut EventRecorder) -> Box<Node> {
    let Some(left) = node.left.take() else {
        return node;
    };
    recorder.push(Action::RotateEvent, left.key, Case::LR.prep_info());
    node.left = Some(rotate_left(left, Case::LR, recorder));
    rotate_right(node, Case::LR, recorder)
}

/// Right rotation on the right child, then left rotation at `node`.
pub fn rotate_right_left(mut node: Box<Node>, recorder: &mut EventRecorder) -> Box<Node> {
    let Some(right) = node.right.take() else {
        return node;
    };
    recorder.push(Action::RotateEvent, right.key, Case::RL.prep_info());
    node.right = Some(rotate_right(right, Case::RL, recorder));
    rotate_left(node, Case::RL, recorder)
}
