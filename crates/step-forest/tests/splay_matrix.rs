use step_forest::{DeleteCase, SplayStep, SplayTree, Step};

fn build(values: &[i64]) -> SplayTree {
    let mut tree = SplayTree::new();
    for &v in values {
        let id = tree.insert(v).result;
        assert_eq!(tree.root(), id);
        tree.assert_valid().unwrap();
    }
    tree
}

fn rotation_kinds(steps: impl Iterator<Item = SplayStep>) -> Vec<&'static str> {
    steps
        .map(|s| s.kind())
        .filter(|k| k.starts_with("zig"))
        .collect()
}

#[test]
fn splay_insert_zig_matrix() {
    let mut tree = build(&[10]);
    let n10 = tree.root().unwrap();
    let (id, steps) = tree.insert(30).into_parts();
    let id = id.unwrap();
    let steps: Vec<SplayStep> = steps.collect();
    assert_eq!(
        steps.last(),
        Some(&SplayStep::Zig {
            id,
            value: 30,
            parent: n10
        })
    );
    assert_eq!(tree.root(), Some(id));
    assert_eq!(tree.store().left(id), Some(n10));
}

#[test]
fn splay_insert_zig_zag_matrix() {
    let mut tree = build(&[10, 30]);
    let (id, steps) = tree.insert(20).into_parts();
    assert_eq!(rotation_kinds(steps), vec!["zig-zag"]);
    let id = id.unwrap();
    assert_eq!(tree.root(), Some(id));
    let s = tree.store();
    assert_eq!(s.left(id).map(|i| s.value(i)), Some(10));
    assert_eq!(s.right(id).map(|i| s.value(i)), Some(30));
}

#[test]
fn splay_search_zig_zig_matrix() {
    // Ascending inserts leave a left spine: 5 -> 4 -> 3 -> 2 -> 1.
    let mut tree = build(&[1, 2, 3, 4, 5]);
    let (found, steps) = tree.search(1).into_parts();
    let found = found.unwrap();
    assert_eq!(rotation_kinds(steps), vec!["zig-zig", "zig-zig"]);
    assert_eq!(tree.root(), Some(found));
    assert_eq!(tree.store().parent(found), None);
    assert_eq!(tree.values(), vec![1, 2, 3, 4, 5]);
    tree.assert_valid().unwrap();
}

#[test]
fn splay_failed_search_promotes_last_visited_matrix() {
    let mut tree = build(&[10, 30, 20]);
    let n30 = step_forest::util::find(tree.store(), 30).unwrap();
    let (found, steps) = tree.search(25).into_parts();
    assert_eq!(found, None);
    let steps: Vec<SplayStep> = steps.collect();
    assert!(steps.contains(&SplayStep::NotFound {
        target: 25,
        last: Some(n30)
    }));
    assert_eq!(tree.root(), Some(n30));
    tree.assert_valid().unwrap();
}

#[test]
fn splay_duplicate_insert_promotes_existing_matrix() {
    let mut tree = build(&[1, 2, 3]);
    let n1 = step_forest::util::find(tree.store(), 1).unwrap();
    let (id, steps) = tree.insert(1).into_parts();
    assert_eq!(id, None);
    let kinds: Vec<&str> = steps.map(|s| s.kind()).collect();
    assert!(kinds.contains(&"found"));
    assert_eq!(tree.root(), Some(n1));
    assert_eq!(tree.len(), 3);
}

#[test]
fn splay_delete_two_children_matrix() {
    let mut tree = build(&[10, 30, 20]);
    let root = tree.root().unwrap();
    let (deleted, steps) = tree.delete(20).into_parts();
    assert!(deleted);
    let steps: Vec<SplayStep> = steps.collect();
    assert!(steps.contains(&SplayStep::Delete {
        id: root,
        value: 20,
        case: DeleteCase::TwoChildren
    }));
    assert_eq!(steps.last().map(|s| s.kind()), Some("successor"));
    assert_eq!(tree.root(), Some(root));
    assert_eq!(tree.store().value(root), 30);
    assert_eq!(tree.values(), vec![10, 30]);
    tree.assert_valid().unwrap();
}

#[test]
fn splay_delete_cases_matrix() {
    let mut tree = build(&[1, 2]);
    // 1 is splayed to the root; its only child is 2.
    let (deleted, mut steps) = tree.delete(1).into_parts();
    assert!(deleted);
    let case = steps.find_map(|s| match s {
        SplayStep::Delete { case, .. } => Some(case),
        _ => None,
    });
    assert_eq!(case, Some(DeleteCase::OneChild));
    assert_eq!(tree.values(), vec![2]);

    let (deleted, mut steps) = tree.delete(2).into_parts();
    assert!(deleted);
    assert!(steps.any(|s| matches!(
        s,
        SplayStep::Delete {
            case: DeleteCase::Leaf,
            ..
        }
    )));
    assert!(tree.is_empty());
    tree.assert_valid().unwrap();
}

#[test]
fn splay_delete_missing_still_promotes_matrix() {
    let mut tree = build(&[10, 30, 20]);
    let n10 = step_forest::util::find(tree.store(), 10).unwrap();
    let (deleted, mut steps) = tree.delete(5).into_parts();
    assert!(!deleted);
    assert!(steps.all(|s| s.kind() != "delete"));
    assert_eq!(tree.root(), Some(n10));
    assert_eq!(tree.len(), 3);
}

#[test]
fn splay_search_always_roots_found_node_matrix() {
    let values = [50, 20, 80, 10, 30, 60, 90, 5, 15, 25, 35];
    let mut tree = build(&values);
    for v in values.iter().rev() {
        let found = tree.search(*v).result.unwrap();
        assert_eq!(tree.store().parent(found), None);
        assert_eq!(tree.store().value(found), *v);
        tree.assert_valid().unwrap();
    }
}
