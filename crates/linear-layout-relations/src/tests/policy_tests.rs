use super::*;

const CONTAINER: ElementId = 1;
const MEMBER: ElementId = 2;
const OTHER: ElementId = 3;

fn params() -> LayoutParams {
    LayoutParams::new()
        .leading_margin(5.0)
        .leading_side_margin(2.0)
        .trailing_side_margin(3.0)
        .spacing(8.0)
}

#[test]
fn horizontal_sides_pin_top_and_bottom() {
    let sides = Axis::Horizontal
        .policy()
        .side_relations(CONTAINER, MEMBER, &params());

    assert_eq!(sides.leading.first(), Anchor::new(MEMBER, Attribute::Top));
    assert_eq!(sides.leading.second(), Some(Anchor::new(CONTAINER, Attribute::Top)));
    assert_eq!(sides.leading.constant(), 2.0);

    // container.bottom == member.bottom + margin
    assert_eq!(sides.trailing.first(), Anchor::new(CONTAINER, Attribute::Bottom));
    assert_eq!(sides.trailing.second(), Some(Anchor::new(MEMBER, Attribute::Bottom)));
    assert_eq!(sides.trailing.constant(), 3.0);
}

#[test]
fn vertical_sides_pin_leading_and_trailing() {
    let sides = Axis::Vertical
        .policy()
        .side_relations(CONTAINER, MEMBER, &params());
    assert_eq!(sides.leading.first(), Anchor::new(MEMBER, Attribute::Leading));
    assert_eq!(sides.trailing.first(), Anchor::new(CONTAINER, Attribute::Trailing));
    assert_eq!(sides.iter().count(), 2);
}

#[test]
fn spacing_to_container_uses_leading_margin() {
    let relation = Axis::Vertical
        .policy()
        .spacing_to_container(CONTAINER, MEMBER, &params());
    assert_eq!(relation.first(), Anchor::new(MEMBER, Attribute::Top));
    assert_eq!(relation.second(), Some(Anchor::new(CONTAINER, Attribute::Top)));
    assert_eq!(relation.constant(), 5.0);
}

#[test]
fn spacing_to_previous_and_next_are_mirrors() {
    let policy = Axis::Horizontal.policy();
    let previous = policy.spacing_to_previous(MEMBER, OTHER, &params());
    assert_eq!(previous.first(), Anchor::new(MEMBER, Attribute::Leading));
    assert_eq!(previous.second(), Some(Anchor::new(OTHER, Attribute::Trailing)));
    assert_eq!(previous.constant(), 8.0);

    let next = policy.spacing_to_next(MEMBER, OTHER, &params());
    assert_eq!(next.first(), Anchor::new(OTHER, Attribute::Leading));
    assert_eq!(next.second(), Some(Anchor::new(MEMBER, Attribute::Trailing)));
}

#[test]
fn size_relation_modes() {
    let policy = Axis::Vertical.policy();

    let relative = policy.size_relation(CONTAINER, MEMBER, MemberSize::Relative(0.5));
    assert_eq!(relative.first(), Anchor::new(MEMBER, Attribute::Height));
    assert_eq!(relative.second(), Some(Anchor::new(CONTAINER, Attribute::Height)));
    assert_eq!(relative.multiplier(), 0.5);
    assert_eq!(relative.constant(), 0.0);
    assert!(!relative.is_self_contained());

    let absolute = policy.size_relation(CONTAINER, MEMBER, MemberSize::new(false, 100.0));
    assert_eq!(absolute.first(), Anchor::new(MEMBER, Attribute::Height));
    assert_eq!(absolute.second(), None);
    assert_eq!(absolute.constant(), 100.0);
    assert!(absolute.is_self_contained());
}

#[test]
fn axis_policies_report_their_axis() {
    assert_eq!(Axis::Horizontal.policy().axis(), Axis::Horizontal);
    assert_eq!(Axis::Vertical.policy().axis(), Axis::Vertical);
    assert_eq!(Axis::Horizontal.policy().extent_attribute(), Attribute::Width);
}
