use super::*;

#[test]
fn constant_update_is_shared_between_handles() {
    let relation = LayoutRelation::between(
        Anchor::new(2, Attribute::Leading),
        Anchor::new(1, Attribute::Leading),
        1.0,
        4.0,
    );
    let installed = Rc::clone(&relation);
    relation.set_constant(9.0);
    assert_eq!(installed.constant(), 9.0);
    assert_eq!(installed.descriptor().constant, 9.0);
}

#[test]
fn fixed_relation_is_self_contained() {
    let relation = LayoutRelation::fixed(Anchor::new(3, Attribute::Width), 100.0);
    assert!(relation.is_self_contained());
    assert!(relation.references(3));
    assert!(!relation.references(1));
    assert_eq!(relation.to_string(), "#3.width == 100");
}

#[test]
fn relations_get_distinct_ids() {
    let a = LayoutRelation::fixed(Anchor::new(1, Attribute::Height), 1.0);
    let b = LayoutRelation::fixed(Anchor::new(1, Attribute::Height), 1.0);
    assert_ne!(a.id(), b.id());
    assert_eq!(a.descriptor(), b.descriptor());
}

#[test]
fn display_includes_both_anchors() {
    let relation = LayoutRelation::between(
        Anchor::new(5, Attribute::Top),
        Anchor::new(4, Attribute::Bottom),
        1.0,
        8.0,
    );
    assert_eq!(relation.to_string(), "#5.top == #4.bottom * 1 + 8");
    assert!(relation.references(4));
    assert!(relation.references(5));
}
