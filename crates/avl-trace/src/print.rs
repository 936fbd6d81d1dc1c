//! Text drawing of a tree, for debugging and the CLI `print` command.

use crate::types::Link;

type PrintChild<'a> = dyn Fn(&str) -> String + 'a;

/// Renders child lines below a parent using `├─` / `└─` branches.
pub fn print_tree(tab: &str, children: &[&PrintChild<'_>]) -> String {
    let mut out = String::new();
    let last = children.len().saturating_sub(1);
    for (i, child_fn) in children.iter().enumerate() {
        let is_last = i == last;
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        out.push('\n');
        out.push_str(tab);
        out.push_str(if is_last { "└─ " } else { "├─ " });
        out.push_str(&child_fn(&child_tab));
    }
    out
}

/// Draws `node` and its subtrees; an absent node is `∅`.
pub fn print(node: &Link, tab: &str) -> String {
    let Some(n) = node else {
        return "∅".to_string();
    };
    let header = format!("{} [h={} bf={}]", n.key, n.height, n.balance_factor());
    if n.is_leaf() {
        return header;
    }
    let left = |tab: &str| format!("L {}", print(&n.left, tab));
    let right = |tab: &str| format!("R {}", print(&n.right, tab));
    let children: [&PrintChild<'_>; 2] = [&left, &right];
    header + &print_tree(tab, &children)
}
