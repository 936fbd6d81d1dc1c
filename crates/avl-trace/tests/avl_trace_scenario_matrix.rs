use avl_trace::{Action, AvlTrace, Event, NodeDescriptor};

fn ev(action: Action, key: i32, info: &str) -> Event {
    Event::new(action, key, info)
}

fn build(keys: &[i32]) -> AvlTrace {
    let mut tree = AvlTrace::new();
    for &key in keys {
        tree.insert(key);
        if let Err(err) = tree.assert_valid() {
            panic!("invalid AVL tree after insert({key}): {err}");
        }
    }
    tree
}

fn d(key: i32, height: i32, bf: i32, l: Option<i32>, r: Option<i32>) -> NodeDescriptor {
    NodeDescriptor {
        key,
        height,
        balance_factor: bf,
        left_key: l,
        right_key: r,
    }
}

fn preorder_keys(tree: &AvlTrace) -> Vec<i32> {
    tree.snapshot().iter().map(|n| n.key).collect()
}

#[test]
fn ascending_triple_rotates_left_at_first_key() {
    let mut tree = build(&[10, 20]);
    let events = tree.insert(30);

    assert_eq!(
        events,
        vec![
            ev(Action::SearchVisit, 10, ""),
            ev(Action::SearchVisit, 20, ""),
            ev(Action::InsertNode, 30, "Inserted"),
            ev(Action::UpdateStats, 20, "H:2 BF:-1"),
            ev(Action::UpdateStats, 10, "H:3 BF:-2"),
            ev(Action::RotateEvent, 10, "Performing Left Rotate (RR Case)"),
        ]
    );
    assert_eq!(
        events
            .iter()
            .filter(|e| e.action == Action::RotateEvent)
            .count(),
        1
    );
    assert_eq!(
        tree.snapshot(),
        vec![
            d(20, 2, 0, Some(10), Some(30)),
            d(10, 1, 0, None, None),
            d(30, 1, 0, None, None),
        ]
    );
}

#[test]
fn descending_triple_rotates_right() {
    let mut tree = build(&[30, 20]);
    let events = tree.insert(10);
    let rotations: Vec<&Event> = events
        .iter()
        .filter(|e| e.action == Action::RotateEvent)
        .collect();
    assert_eq!(rotations.len(), 1);
    assert_eq!(rotations[0].key, 30);
    assert_eq!(rotations[0].info, "Performing Right Rotate (LL Case)");
    assert_eq!(preorder_keys(&tree), vec![20, 10, 30]);
}

#[test]
fn left_right_insert_prepares_then_rotates_twice() {
    let mut tree = build(&[30, 10]);
    let events = tree.insert(20);

    assert_eq!(
        events,
        vec![
            ev(Action::SearchVisit, 30, ""),
            ev(Action::SearchVisit, 10, ""),
            ev(Action::InsertNode, 20, "Inserted"),
            ev(Action::UpdateStats, 10, "H:2 BF:-1"),
            ev(Action::UpdateStats, 30, "H:3 BF:2"),
            ev(Action::RotateEvent, 10, "Left Rotate (LR Prep)"),
            ev(Action::RotateEvent, 10, "Performing Left Rotate (LR Case)"),
            ev(Action::RotateEvent, 30, "Performing Right Rotate (LR Case)"),
        ]
    );
    let root = tree.root().unwrap();
    assert_eq!(root.key, 20);
    assert_eq!(root.left.as_deref().map(|n| n.key), Some(10));
    assert_eq!(root.right.as_deref().map(|n| n.key), Some(30));
}

#[test]
fn right_left_insert_prepares_then_rotates_twice() {
    let mut tree = build(&[10, 30]);
    let events = tree.insert(20);
    let rotations: Vec<(i32, &str)> = events
        .iter()
        .filter(|e| e.action == Action::RotateEvent)
        .map(|e| (e.key, e.info.as_str()))
        .collect();
    assert_eq!(
        rotations,
        vec![
            (30, "Right Rotate (RL Prep)"),
            (30, "Performing Right Rotate (RL Case)"),
            (10, "Performing Left Rotate (RL Case)"),
        ]
    );
    assert_eq!(preorder_keys(&tree), vec![20, 10, 30]);
}

#[test]
fn duplicate_insert_is_idempotent() {
    let mut tree = build(&[20, 10, 30, 5]);
    let before = tree.snapshot();
    let events = tree.insert(5);
    assert!(events.iter().all(|e| e.action == Action::SearchVisit));
    assert_eq!(events.iter().map(|e| e.key).collect::<Vec<_>>(), vec![20, 10, 5]);
    assert_eq!(tree.snapshot(), before);
    assert_eq!(tree.len(), 4);
}

#[test]
fn two_child_delete_substitutes_successor() {
    let mut tree = build(&[20, 10, 30, 5, 15, 25, 35]);
    let events = tree.remove(20);

    assert_eq!(
        events,
        vec![
            ev(Action::SearchVisit, 20, ""),
            ev(Action::HighlightNode, 25, "Replaced with Successor"),
            ev(Action::SearchVisit, 30, ""),
            ev(Action::SearchVisit, 25, ""),
            ev(Action::InsertNode, 25, "Deleted"),
            ev(Action::UpdateStats, 30, "H:2 BF:-1"),
            ev(Action::UpdateStats, 25, "H:3 BF:0"),
        ]
    );
    assert_eq!(tree.root_key(), Some(25));
    assert_eq!(preorder_keys(&tree), vec![25, 10, 5, 15, 30, 35]);
    tree.assert_valid().unwrap();
}

#[test]
fn delete_uses_child_balance_for_left_right_case() {
    let mut tree = build(&[20, 10, 30, 15]);
    let events = tree.remove(30);
    assert_eq!(
        events,
        vec![
            ev(Action::SearchVisit, 20, ""),
            ev(Action::SearchVisit, 30, ""),
            ev(Action::InsertNode, 30, "Deleted"),
            ev(Action::UpdateStats, 20, "H:3 BF:2"),
            ev(Action::RotateEvent, 10, "Left Rotate (LR Prep)"),
            ev(Action::RotateEvent, 10, "Performing Left Rotate (LR Case)"),
            ev(Action::RotateEvent, 20, "Performing Right Rotate (LR Case)"),
        ]
    );
    assert_eq!(
        tree.snapshot(),
        vec![
            d(15, 2, 0, Some(10), Some(20)),
            d(10, 1, 0, None, None),
            d(20, 1, 0, None, None),
        ]
    );
}

#[test]
fn delete_cascades_rotations_up_the_path() {
    let mut tree = build(&[8, 5, 11, 3, 7, 10, 12, 2, 4, 6, 9, 1]);
    assert_eq!(tree.height(), 5);

    let events = tree.remove(12);
    assert_eq!(
        events,
        vec![
            ev(Action::SearchVisit, 8, ""),
            ev(Action::SearchVisit, 11, ""),
            ev(Action::SearchVisit, 12, ""),
            ev(Action::InsertNode, 12, "Deleted"),
            ev(Action::UpdateStats, 11, "H:3 BF:2"),
            ev(Action::RotateEvent, 11, "Performing Right Rotate (LL Case)"),
            ev(Action::UpdateStats, 8, "H:5 BF:2"),
            ev(Action::RotateEvent, 8, "Performing Right Rotate (LL Case)"),
        ]
    );
    assert_eq!(tree.root_key(), Some(5));
    assert_eq!(tree.height(), 4);
    assert_eq!(
        preorder_keys(&tree),
        vec![5, 3, 2, 1, 4, 8, 7, 6, 10, 9, 11]
    );
    tree.assert_valid().unwrap();
}

#[test]
fn missing_key_delete_leaves_tree_untouched() {
    let mut tree = build(&[20, 10, 30]);
    let before = tree.snapshot();
    let events = tree.remove(25);
    assert_eq!(
        events,
        vec![ev(Action::SearchVisit, 20, ""), ev(Action::SearchVisit, 30, "")]
    );
    assert_eq!(tree.snapshot(), before);
}

#[test]
fn removing_root_of_single_node_tree_empties_it() {
    let mut tree = build(&[42]);
    let events = tree.remove(42);
    assert_eq!(
        events,
        vec![
            ev(Action::SearchVisit, 42, ""),
            ev(Action::InsertNode, 42, "Deleted"),
        ]
    );
    assert!(tree.is_empty());
    assert!(tree.snapshot().is_empty());
}

#[test]
fn snapshot_is_preorder() {
    let tree = build(&[20, 10, 30]);
    assert_eq!(preorder_keys(&tree), vec![20, 10, 30]);
    // Observing does not change anything.
    assert_eq!(tree.snapshot(), tree.snapshot());
}

#[test]
fn ladder_insert_delete_matrix() {
    let mut tree = AvlTrace::new();
    for i in 0..300 {
        tree.insert(i);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 300);
    assert!(tree.height() <= 13);

    for i in (0..300).step_by(3) {
        let events = tree.remove(i);
        assert!(events
            .iter()
            .any(|e| e.action == Action::InsertNode && e.info == "Deleted"));
        tree.assert_valid().unwrap();
    }

    for i in 0..300 {
        assert_eq!(tree.contains(i), i % 3 != 0);
    }
    assert_eq!(tree.len(), 200);
}

#[test]
fn event_json_matches_wire_schema() {
    let mut tree = AvlTrace::new();
    let events = tree.insert(7);
    let json = serde_json::to_value(&events).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "action": "insert_node", "key": 7, "info": "Inserted" }])
    );
}
