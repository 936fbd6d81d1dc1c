//! Flat, pre-order view of a tree for rendering.

use serde::{Deserialize, Serialize};

use crate::types::{Link, Node};

/// One node as seen by a renderer. Absent children are `None` (`null` in JSON).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescriptor {
    pub key: i32,
    pub height: i32,
    pub balance_factor: i32,
    pub left_key: Option<i32>,
    pub right_key: Option<i32>,
}

impl From<&Node> for NodeDescriptor {
    fn from(node: &Node) -> Self {
        Self {
            key: node.key,
            height: node.height,
            balance_factor: node.balance_factor(),
            left_key: node.left.as_ref().map(|n| n.key),
            right_key: node.right.as_ref().map(|n| n.key),
        }
    }
}

/// Descriptors in pre-order: node, left subtree, right subtree.
pub fn snapshot(root: &Link) -> Vec<NodeDescriptor> {
    fn walk(link: &Link, out: &mut Vec<NodeDescriptor>) {
        let Some(node) = link else {
            return;
        };
        out.push(NodeDescriptor::from(&**node));
        walk(&node.left, out);
        walk(&node.right, out);
    }

    let mut out = Vec::new();
    walk(root, &mut out);
    out
}
