use super::*;
use linear_layout_relations::{Anchor, Attribute, LayoutRelation};

#[test]
fn attach_marks_child_relation_positioned() {
    let mut tree = MemoryRenderTree::new();
    let parent = tree.create_node();
    let child = tree.create_node();
    assert!(!tree.is_relation_positioned(child));

    tree.attach_child(parent, child).unwrap();
    assert_eq!(tree.parent_of(child), Some(parent));
    assert_eq!(tree.children(parent), vec![child]);
    assert!(tree.is_relation_positioned(child));
}

#[test]
fn attach_rejects_second_parent() {
    let mut tree = MemoryRenderTree::new();
    let first = tree.create_node();
    let second = tree.create_node();
    let child = tree.create_node();
    tree.attach_child(first, child).unwrap();

    assert_eq!(
        tree.attach_child(second, child),
        Err(TreeError::AlreadyAttached {
            id: child,
            parent: first
        })
    );
    assert!(tree.children(second).is_empty());
}

#[test]
fn attach_to_missing_parent_fails() {
    let mut tree = MemoryRenderTree::new();
    let child = tree.create_node();
    assert_eq!(
        tree.attach_child(42, child),
        Err(TreeError::Missing { id: 42 })
    );
    assert_eq!(tree.parent_of(child), None);
}

#[test]
fn detach_requires_parent_link() {
    let mut tree = MemoryRenderTree::new();
    let parent = tree.create_node();
    let child = tree.create_node();
    assert_eq!(
        tree.detach_child(parent, child),
        Err(TreeError::NotAChild { parent, child })
    );
    tree.attach_child(parent, child).unwrap();
    tree.detach_child(parent, child).unwrap();
    assert_eq!(tree.parent_of(child), None);
}

#[test]
fn retract_removes_only_the_given_object() {
    let mut tree = MemoryRenderTree::new();
    let owner = tree.create_node();
    let a = LayoutRelation::fixed(Anchor::new(owner, Attribute::Width), 10.0);
    let b = LayoutRelation::fixed(Anchor::new(owner, Attribute::Width), 10.0);
    tree.install(owner, Rc::clone(&a));
    tree.install(owner, Rc::clone(&b));

    tree.retract(owner, &a);
    assert_eq!(tree.relation_count(), 1);
    assert!(tree.is_installed(&b));
    assert!(!tree.is_installed(&a));

    // Unknown relations and owners are ignored.
    tree.retract(owner, &a);
    tree.retract(99, &b);
    assert_eq!(tree.relation_count(), 1);
}

#[test]
fn destroy_node_requires_detached_node() {
    let mut tree = MemoryRenderTree::new();
    let parent = tree.create_node();
    let child = tree.create_node();
    tree.attach_child(parent, child).unwrap();

    assert!(tree.destroy_node(child).is_err());
    tree.destroy_node(parent).unwrap();
    assert!(!tree.contains(parent));
    assert_eq!(tree.parent_of(child), None);
    assert_eq!(tree.len(), 1);
}

#[test]
fn dump_lists_relations_under_owner() {
    let mut tree = MemoryRenderTree::new();
    let parent = tree.create_node();
    let child = tree.create_node();
    tree.attach_child(parent, child).unwrap();
    tree.install(child, LayoutRelation::fixed(Anchor::new(child, Attribute::Height), 4.0));

    let dump = tree.dump_tree(parent);
    assert_eq!(dump, "[0]\n  [1]\n    | #1.height == 4\n");
}
