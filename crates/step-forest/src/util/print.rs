use crate::store::NodeStore;
use crate::types::NodeId;

/// Renders a tree with box-drawing branches, left child first.
///
/// ```text
/// └─ 10 #0
///    ├─ ← 5 #1
///    └─ → 20 #2
/// ```
pub fn print(store: &NodeStore) -> String {
    let Some(root) = store.root() else {
        return "∅".to_string();
    };
    let mut lines = Vec::with_capacity(store.len());
    let mut stack: Vec<(NodeId, String, &str, &str)> = vec![(root, String::new(), "└─", "")];
    while let Some((node, tab, branch, arrow)) = stack.pop() {
        lines.push(format!("{tab}{branch} {arrow}{} {node}", store.value(node)));
        let children: Vec<(NodeId, &str)> = [(store.left(node), "← "), (store.right(node), "→ ")]
            .into_iter()
            .filter_map(|(c, a)| c.map(|c| (c, a)))
            .collect();
        let child_tab = format!("{tab}{}  ", if branch == "└─" { " " } else { "│" });
        // Pushed in reverse so the left child is printed first.
        for (i, &(child, a)) in children.iter().enumerate().rev() {
            let branch = if i + 1 == children.len() { "└─" } else { "├─" };
            stack.push((child, child_tab.clone(), branch, a));
        }
    }
    lines.join("\n")
}
