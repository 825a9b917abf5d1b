use std::path::PathBuf;
use std::time::Duration;

use untracked_core::{
    ClassificationNode, ClassificationTree, ClassifyConfig, NodeStatus, ScanWarning, WarningKind,
};

fn sample_tree() -> ClassificationNode {
    let mut src = ClassificationNode::aggregate("/home/u/src");
    src.push_child(ClassificationNode::versioned("/home/u/src/app"));
    src.push_child(ClassificationNode::unversioned_leaf("/home/u/src/scratch"));

    let mut root = ClassificationNode::aggregate("/home/u");
    root.push_child(ClassificationNode::unversioned_leaf("/home/u/Downloads"));
    root.push_child(src);
    root
}

#[test]
fn test_aggregate_identity_before_children() {
    let node = ClassificationNode::aggregate("/x");
    assert!(node.fully_versioned);
    assert!(node.fully_unversioned);
    assert_eq!(node.status(), NodeStatus::Versioned);
}

#[test]
fn test_mixed_statuses_propagate() {
    let root = sample_tree();

    assert_eq!(root.status(), NodeStatus::Mixed);
    assert_eq!(root.children[0].status(), NodeStatus::Unversioned);
    assert_eq!(root.children[1].status(), NodeStatus::Mixed);
    assert_eq!(root.descendant_count(), 4);
}

#[test]
fn test_tree_stats() {
    let tree = ClassificationTree::new(
        sample_tree(),
        PathBuf::from("/home/u"),
        Duration::from_millis(3),
        vec![ScanWarning::new(
            "/home/u/secret",
            "Cannot list /home/u/secret",
            WarningKind::PermissionDenied,
        )],
    );

    assert_eq!(tree.stats.nodes, 5);
    assert_eq!(tree.stats.repositories, 1);
    assert_eq!(tree.stats.unversioned_roots, 2);
    assert_eq!(tree.stats.max_depth, 2);
    assert!(tree.has_warnings());
    assert!(!tree.is_fully_versioned());
}

#[test]
fn test_node_json_shape() {
    let node = sample_tree();
    let json = serde_json::to_value(&node).unwrap();

    assert_eq!(json["path"], "/home/u");
    assert_eq!(json["fully_versioned"], false);
    // Leaves omit the empty children list
    assert!(json["children"][0].get("children").is_none());
    assert_eq!(json["children"][1]["children"].as_array().unwrap().len(), 2);

    let status = serde_json::to_value(NodeStatus::Unversioned).unwrap();
    assert_eq!(status, "unversioned");
}

#[test]
fn test_config_from_json_defaults() {
    let config: ClassifyConfig = serde_json::from_str(r#"{ "root": "/srv" }"#).unwrap();

    assert_eq!(config.root, PathBuf::from("/srv"));
    assert!(!config.parallel);
    assert_eq!(config.threads, 0);
    assert_eq!(config.stack_size, untracked_core::DEFAULT_STACK_SIZE);
}
