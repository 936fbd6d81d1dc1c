//! Tree node and the height / balance-factor helpers.
//!
//! Every node exclusively owns its children. There is no parent link: a
//! node's position is defined only by the ownership edge from its ancestor.

/// An owned, possibly absent subtree.
pub type Link = Option<Box<Node>>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub key: i32,
    /// Height of the subtree rooted here, a leaf is `1`.
    pub height: i32,
    pub left: Link,
    pub right: Link,
}

impl Node {
    pub fn new(key: i32) -> Self {
        Self {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Recomputes `height` from the children's stored heights.
    pub fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// `height(left) - height(right)`.
    pub fn balance_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }
}

/// Stored height of a subtree, `0` when absent.
#[inline]
pub fn height(link: &Link) -> i32 {
    link.as_ref().map_or(0, |n| n.height)
}

/// Balance factor of a subtree, `0` when absent.
#[inline]
pub fn balance_factor(link: &Link) -> i32 {
    link.as_ref().map_or(0, |n| n.balance_factor())
}

/// Smallest key in a subtree (its leftmost node).
pub fn min_key(node: &Node) -> i32 {
    let mut curr = node;
    while let Some(left) = curr.left.as_deref() {
        curr = left;
    }
    curr.key
}
