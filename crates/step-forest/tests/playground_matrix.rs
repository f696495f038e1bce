use step_forest::playground::DEFAULT_CAPACITY;
use step_forest::{
    Forest, Operation, Outcome, Playground, PlaygroundConfig, PlaygroundError, TreeKind,
};

#[test]
fn playground_capacity_matrix() {
    let mut pg = Playground::new(PlaygroundConfig::new(TreeKind::Avl).with_capacity(Some(3)));
    for v in 1..=3 {
        let applied = pg.apply(Operation::Insert(v)).unwrap();
        assert!(matches!(applied.outcome, Outcome::Inserted { .. }));
    }
    assert!(pg.is_full());
    let err = pg.apply(Operation::Insert(4)).unwrap_err();
    assert!(matches!(err, PlaygroundError::AtCapacity { limit: 3 }));
    assert_eq!(err.to_string(), "tree is at capacity (3 nodes)");
    assert_eq!(pg.len(), 3);

    // Other operations still work at capacity.
    let applied = pg.apply(Operation::Delete(2)).unwrap();
    assert_eq!(applied.outcome, Outcome::Deleted);
    assert!(pg.apply(Operation::Insert(4)).is_ok());
}

#[test]
fn playground_default_capacity_matrix() {
    let mut pg = Playground::new(PlaygroundConfig::new(TreeKind::Bst));
    for v in 0..DEFAULT_CAPACITY as i64 {
        pg.apply(Operation::Insert(v)).unwrap();
    }
    assert!(matches!(
        pg.apply(Operation::Insert(100)),
        Err(PlaygroundError::AtCapacity { .. })
    ));

    let mut unlimited = Playground::new(PlaygroundConfig::new(TreeKind::Bst).with_capacity(None));
    for v in 0..(DEFAULT_CAPACITY as i64 + 5) {
        unlimited.apply(Operation::Insert(v)).unwrap();
    }
    assert!(!unlimited.is_full());
}

#[test]
fn playground_unsupported_operations_matrix() {
    let mut heap = Playground::new(PlaygroundConfig::new(TreeKind::Heap));
    heap.apply(Operation::Insert(5)).unwrap();
    let err = heap.apply(Operation::Delete(5)).unwrap_err();
    assert_eq!(err.to_string(), "delete 5 is not supported by the heap engine");
    assert!(matches!(
        heap.apply(Operation::Search(5)),
        Err(PlaygroundError::Unsupported { .. })
    ));
    let applied = heap.apply(Operation::ExtractMax).unwrap();
    assert_eq!(applied.outcome, Outcome::Extracted { value: 5 });
    let applied = heap.apply(Operation::ExtractMax).unwrap();
    assert_eq!(applied.outcome, Outcome::Empty);
    assert!(applied.steps.is_empty());

    let mut splay = Playground::new(PlaygroundConfig::new(TreeKind::Splay));
    assert!(matches!(
        splay.apply(Operation::ExtractMax),
        Err(PlaygroundError::Unsupported {
            kind: TreeKind::Splay,
            ..
        })
    ));
}

#[test]
fn playground_steps_use_declared_kinds_matrix() {
    let script = ["+4", "+2", "+6", "+1", "+3", "+5", "+7", "?3", "?9", "-4", "-8", "+3"];
    for kind in TreeKind::ALL {
        let mut pg = Playground::new(PlaygroundConfig::new(kind));
        for token in script {
            let mut op: Operation = token.parse().unwrap();
            if kind == TreeKind::Heap && matches!(op, Operation::Delete(_) | Operation::Search(_)) {
                op = Operation::ExtractMax;
            }
            let applied = pg.apply(op).unwrap();
            for step in &applied.steps {
                let label = step["kind"].as_str().unwrap();
                assert!(kind.step_kinds().contains(&label), "{kind}: {label}");
            }
        }
        pg.forest().assert_valid().unwrap();
    }
}

#[test]
fn playground_outcomes_matrix() {
    let mut pg = Playground::new(PlaygroundConfig::new(TreeKind::Splay));
    pg.apply("+10".parse().unwrap()).unwrap();
    assert_eq!(
        pg.apply("+10".parse().unwrap()).unwrap().outcome,
        Outcome::Duplicate
    );
    let applied = pg.apply("?10".parse().unwrap()).unwrap();
    assert!(matches!(applied.outcome, Outcome::Found { .. }));
    assert_eq!(
        pg.apply("?11".parse().unwrap()).unwrap().outcome,
        Outcome::NotFound
    );

    let json = serde_json::to_value(&applied).unwrap();
    assert_eq!(json["op"]["op"], "search");
    assert_eq!(json["outcome"]["status"], "found");

    pg.reset();
    assert!(pg.is_empty());
    assert_eq!(pg.kind(), TreeKind::Splay);
}

#[test]
fn forest_dispatch_matrix() {
    for kind in TreeKind::ALL {
        let forest = Forest::new(kind);
        assert_eq!(forest.kind(), kind);
        assert!(forest.is_empty());
        assert_eq!(kind.to_string().parse::<TreeKind>().unwrap(), kind);
    }
    assert!(matches!(
        "rb".parse::<TreeKind>(),
        Err(PlaygroundError::UnknownKind(_))
    ));
    let config = PlaygroundConfig::from_json(r#"{"kind": "avl", "capacity": 7}"#).unwrap();
    assert_eq!(config.kind, TreeKind::Avl);
    assert_eq!(config.capacity, Some(7));
}
