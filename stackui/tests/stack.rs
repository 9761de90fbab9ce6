use stackdom::{
    to_html, Align, BorderLine, Breakpoint, Child, DefaultTheme, Direction, Display, Element,
    Justify, Length, NodeRef, Prop, Responsive, Selector, Style, Value, Wrap,
};
use stackui::{hstack, stack, stack_divider, vstack, Component, HStack, Stack, StackProps, VStack};

fn boxes(n: usize) -> Vec<Element> {
    (0..n).map(|i| Element::box_().id(format!("c{i}"))).collect()
}

fn divider() -> Element {
    Element::box_().id("d")
}

/// Divider clones get fresh `clone-` ids; originals keep theirs.
fn is_divider(element: &Element) -> bool {
    element.id.starts_with("clone-")
}

fn base(style: &Style, prop: Prop) -> Option<Value> {
    style.base(prop).cloned()
}

fn space(units: f32) -> Value {
    Value::Length(Length::Space(units))
}

fn zero() -> Value {
    Value::Length(Length::ZERO)
}

// ============================================================================
// Divider Interleaving Tests
// ============================================================================

#[test]
fn test_divider_between_every_pair() {
    for n in 2..=6 {
        let root = stack(StackProps::new().divider(divider()).children(boxes(n)));
        let out = root.child_elements();

        assert_eq!(out.len(), 2 * n - 1, "n={n}");
        let originals: Vec<_> = out.iter().filter(|e| !is_divider(e)).collect();
        let clones: Vec<_> = out.iter().filter(|e| is_divider(e)).collect();
        assert_eq!(originals.len(), n);
        assert_eq!(clones.len(), n - 1);

        for (i, element) in out.iter().enumerate() {
            assert_eq!(is_divider(element), i % 2 == 1, "slot {i} for n={n}");
        }
        assert!(!is_divider(out.last().unwrap()), "no trailing divider");
    }
}

#[test]
fn test_no_divider_for_short_lists() {
    for n in 0..=1 {
        let root = stack(StackProps::new().divider(divider()).children(boxes(n)));
        assert_eq!(root.child_elements().len(), n);
        assert!(!root.child_elements().iter().any(is_divider));
    }
}

#[test]
fn test_non_renderable_children_do_not_count() {
    let root = stack(
        StackProps::new()
            .direction(Direction::Column)
            .divider(divider())
            .child(Element::box_().id("a"))
            .child(Child::Null)
            .child(false)
            .child(None::<Element>)
            .child(true)
            .child(Element::box_().id("b")),
    );

    let out = root.child_elements();
    assert_eq!(out.len(), 3);
    assert_eq!(out[0].id, "a");
    assert!(is_divider(&out[1]));
    assert_eq!(out[2].id, "b");
}

#[test]
fn test_pair_keys_follow_position() {
    let root = stack(
        StackProps::new()
            .divider(divider())
            .child(Element::box_().id("a"))
            .child(Element::box_().id("b").key("own"))
            .child(Element::box_().id("c")),
    );

    let keys: Vec<_> = root
        .child_elements()
        .iter()
        .map(|e| e.key.clone().unwrap_or_default())
        .collect();
    assert_eq!(
        keys,
        vec!["item-0", "divider-0", "item-1:own", "divider-1", "item-2"]
    );
}

#[test]
fn test_pair_keys_never_collide_with_caller_keys() {
    let root = stack(
        StackProps::new()
            .divider(divider())
            .child(Element::box_().id("a").key("1"))
            .child(Element::box_().id("b"))
            .child(Element::box_().id("c").key("divider-0"))
            .child(Element::box_().id("d").key("item-3")),
    );

    let keys: Vec<_> = root
        .child_elements()
        .iter()
        .map(|e| e.key.clone().expect("every slot is keyed"))
        .collect();
    let unique: std::collections::BTreeSet<_> = keys.iter().collect();
    assert_eq!(unique.len(), keys.len(), "duplicate sibling keys: {keys:?}");
    assert_eq!(
        keys,
        vec![
            "item-0:1",
            "divider-0",
            "item-1",
            "divider-1",
            "item-2:divider-0",
            "divider-2",
            "item-3:item-3",
        ]
    );
}

#[test]
fn test_text_children_participate() {
    let root = stack(StackProps::new().divider(divider()).child("one").child("two"));
    let out = root.child_elements();
    assert_eq!(out.len(), 3);
    assert_eq!(out[0].tag, "span");
}

// ============================================================================
// Sibling Margin Tests
// ============================================================================

#[test]
fn test_sibling_rule_without_divider() {
    let root = stack(StackProps::new().children(boxes(3)));
    let rule = root
        .style
        .get_nested(&Selector::SiblingsAfterFirst)
        .expect("sibling rule");

    // default direction is column, default spacing two units
    assert_eq!(base(rule, Prop::MarginTop), Some(space(2.0)));
    assert_eq!(base(rule, Prop::MarginLeft), Some(zero()));
    assert!(root.child_elements().iter().all(|e| e.key.is_none()));
}

#[test]
fn test_divider_suppresses_sibling_rule() {
    let root = stack(StackProps::new().divider(divider()).children(boxes(3)));
    assert!(root.style.get_nested(&Selector::SiblingsAfterFirst).is_none());
}

#[test]
fn test_row_example() {
    let root = stack(
        StackProps::new()
            .direction(Direction::Row)
            .spacing(Length::Space(4.0))
            .children(boxes(3)),
    );

    assert_eq!(base(&root.style, Prop::FlexDirection), Some(Direction::Row.into()));
    let rule = root.style.get_nested(&Selector::SiblingsAfterFirst).unwrap();
    assert_eq!(base(rule, Prop::MarginLeft), Some(space(4.0)));
    assert_eq!(base(rule, Prop::MarginTop), Some(zero()));
    assert_eq!(root.child_elements().len(), 3);
    assert!(!root.child_elements().iter().any(is_divider));
}

#[test]
fn test_responsive_direction_and_spacing_resolve_independently() {
    let root = stack(
        StackProps::new()
            .direction(Responsive::from_breakpoints([
                (Breakpoint::Base, Direction::Column),
                (Breakpoint::Md, Direction::Row),
            ]))
            .spacing(Responsive::from_breakpoints([
                (Breakpoint::Base, Length::Space(1.0)),
                (Breakpoint::Lg, Length::Space(3.0)),
            ]))
            .children(boxes(2)),
    );

    let rule = root.style.get_nested(&Selector::SiblingsAfterFirst).unwrap();
    assert_eq!(
        rule.get(Prop::MarginTop),
        Some(&Responsive::from_breakpoints([
            (Breakpoint::Base, space(1.0)),
            (Breakpoint::Md, zero()),
        ]))
    );
    assert_eq!(
        rule.get(Prop::MarginLeft),
        Some(&Responsive::from_breakpoints([
            (Breakpoint::Base, zero()),
            (Breakpoint::Md, space(1.0)),
            (Breakpoint::Lg, space(3.0)),
        ]))
    );

    let direction = root.style.get(Prop::FlexDirection).unwrap();
    assert_eq!(direction.at(Breakpoint::Sm), Some(&Direction::Column.into()));
    assert_eq!(direction.at(Breakpoint::Xl), Some(&Direction::Row.into()));
}

// ============================================================================
// Divider Style Tests
// ============================================================================

#[test]
fn test_row_divider_style() {
    let root = stack(
        StackProps::new()
            .direction(Direction::Row)
            .divider(divider())
            .children(boxes(2)),
    );
    let clone = &root.child_elements()[1].style;

    assert_eq!(base(clone, Prop::MarginX), Some(space(2.0)));
    assert_eq!(base(clone, Prop::MarginY), Some(zero()));
    assert_eq!(
        base(clone, Prop::BorderLeft),
        Some(BorderLine::solid(1.0).into())
    );
    assert_eq!(base(clone, Prop::BorderBottom), Some(Value::None));
    assert_eq!(base(clone, Prop::Width), Some(Length::Auto.into()));
}

#[test]
fn test_column_divider_example() {
    let root = stack(
        StackProps::new()
            .direction(Direction::Column)
            .spacing(Length::Space(2.0))
            .divider(divider())
            .child(Element::box_().id("a"))
            .child(Element::box_().id("b")),
    );

    let out = root.child_elements();
    assert_eq!(out.len(), 3);
    assert_eq!(out[0].id, "a");
    assert_eq!(out[2].id, "b");

    let clone = &out[1].style;
    assert_eq!(base(clone, Prop::MarginY), Some(space(2.0)));
    assert_eq!(base(clone, Prop::MarginX), Some(zero()));
    assert_eq!(
        base(clone, Prop::BorderBottom),
        Some(BorderLine::solid(1.0).into())
    );
    assert_eq!(base(clone, Prop::BorderLeft), Some(Value::None));
    assert_eq!(base(clone, Prop::Width), Some(Length::FULL.into()));
}

#[test]
fn test_divider_patch_overwrites_template() {
    let template = Element::box_()
        .with_style(Prop::Width, Length::Px(10.0))
        .with_style(Prop::BorderBottom, BorderLine::solid(4.0))
        .with_style(Prop::Height, Length::Px(2.0));

    let root = stack(
        StackProps::new()
            .direction(Direction::Column)
            .divider(template.clone())
            .children(boxes(2)),
    );

    let clone = &root.child_elements()[1];
    assert_eq!(base(&clone.style, Prop::Width), Some(Length::FULL.into()));
    assert_eq!(
        base(&clone.style, Prop::BorderBottom),
        Some(BorderLine::solid(1.0).into())
    );
    // untouched keys survive
    assert_eq!(base(&clone.style, Prop::Height), Some(Length::Px(2.0).into()));
    assert_ne!(clone.id, template.id);
}

#[test]
fn test_divider_patch_clears_template_side_margins() {
    let template = Element::box_().style(
        Style::new()
            .set(Prop::MarginTop, Length::Px(7.0))
            .set_responsive(
                Prop::MarginLeft,
                Responsive::from_breakpoints([(Breakpoint::Md, Value::Length(Length::Px(40.0)))]),
            ),
    );

    let root = stack(
        StackProps::new()
            .direction(Direction::Row)
            .divider(template)
            .children(boxes(2)),
    );

    let clone = &root.child_elements()[1];
    assert!(!clone.style.contains(Prop::MarginLeft));
    assert!(!clone.style.contains(Prop::MarginTop));
    assert_eq!(base(&clone.style, Prop::MarginX), Some(space(2.0)));
    assert_eq!(base(&clone.style, Prop::MarginY), Some(zero()));

    let html = to_html(&root, &DefaultTheme::new());
    assert!(!html.contains("margin-left: 40px"));
    assert!(!html.contains("margin-top: 7px"));
}

#[test]
fn test_responsive_divider_style() {
    let root = stack(
        StackProps::new()
            .direction(Responsive::from_breakpoints([
                (Breakpoint::Base, Direction::Column),
                (Breakpoint::Md, Direction::Row),
            ]))
            .divider(divider())
            .children(boxes(2)),
    );

    let clone = &root.child_elements()[1].style;
    let width = clone.get(Prop::Width).unwrap();
    assert_eq!(width.at(Breakpoint::Base), Some(&Length::FULL.into()));
    assert_eq!(width.at(Breakpoint::Md), Some(&Length::Auto.into()));
    assert_eq!(
        clone.get(Prop::BorderLeft).unwrap().at(Breakpoint::Lg),
        Some(&BorderLine::solid(1.0).into())
    );
}

#[test]
fn test_stack_divider_component() {
    let root = stack(
        StackProps::new()
            .direction(Direction::Row)
            .divider(stack_divider(Style::new()))
            .children(boxes(2)),
    );

    let clone = &root.child_elements()[1];
    assert_eq!(clone.get_attr("role").map(String::as_str), Some("separator"));
    assert_eq!(
        base(&clone.style, Prop::BorderColor),
        Some(Value::keyword("inherit"))
    );
    assert_eq!(
        base(&clone.style, Prop::BorderLeft),
        Some(BorderLine::solid(1.0).into())
    );
    assert_eq!(base(&clone.style, Prop::AlignSelf), Some(Align::Stretch.into()));
}

// ============================================================================
// Container Tests
// ============================================================================

#[test]
fn test_container_defaults() {
    let root = stack(StackProps::new());

    assert_eq!(base(&root.style, Prop::Display), Some(Display::Flex.into()));
    assert_eq!(base(&root.style, Prop::FlexDirection), Some(Direction::Column.into()));
    assert_eq!(base(&root.style, Prop::AlignItems), Some(Align::Center.into()));
    assert_eq!(
        base(&root.style, Prop::JustifyContent),
        Some(Justify::FlexStart.into())
    );
    assert!(!root.style.contains(Prop::FlexWrap));
}

#[test]
fn test_passthrough_options() {
    let node_ref = NodeRef::new();
    let root = stack(
        StackProps::new()
            .align(Align::FlexEnd)
            .justify(Justify::SpaceBetween)
            .wrap(Wrap::Wrap)
            .attr("aria-label", "toolbar")
            .node_ref(node_ref.clone())
            .style(Style::new().set(Prop::Width, Length::FULL))
            .children(boxes(2)),
    );

    assert_eq!(base(&root.style, Prop::AlignItems), Some(Align::FlexEnd.into()));
    assert_eq!(
        base(&root.style, Prop::JustifyContent),
        Some(Justify::SpaceBetween.into())
    );
    assert_eq!(base(&root.style, Prop::FlexWrap), Some(Wrap::Wrap.into()));
    assert_eq!(base(&root.style, Prop::Width), Some(Length::FULL.into()));
    assert_eq!(root.get_attr("aria-label").map(String::as_str), Some("toolbar"));
    assert!(root.node_ref.as_ref().is_some_and(|r| r.ptr_eq(&node_ref)));
}

#[test]
fn test_style_override_applied_last() {
    let root = stack(
        StackProps::new()
            .direction(Direction::Row)
            .style(Style::new().set(Prop::FlexDirection, Direction::Column)),
    );
    assert_eq!(base(&root.style, Prop::FlexDirection), Some(Direction::Column.into()));
}

#[test]
fn test_is_inline_means_row() {
    let root = stack(StackProps::new().is_inline(true).children(boxes(2)));
    assert_eq!(base(&root.style, Prop::FlexDirection), Some(Direction::Row.into()));
}

#[test]
fn test_should_wrap_children() {
    let root = stack(
        StackProps::new()
            .should_wrap_children(true)
            .child(Element::box_().id("a"))
            .child(Child::Null)
            .child(Element::box_().id("b")),
    );

    let out = root.child_elements();
    assert_eq!(out.len(), 2);
    for (i, wrapper) in out.iter().enumerate() {
        assert_eq!(wrapper.key, Some(format!("item-{i}")));
        assert_eq!(base(&wrapper.style, Prop::Display), Some(Display::InlineBlock.into()));
        assert_eq!(wrapper.child_elements().len(), 1);
    }
    assert_eq!(out[1].child_elements()[0].id, "b");
}

// ============================================================================
// HStack / VStack Tests
// ============================================================================

#[test]
fn test_hstack_ignores_caller_direction() {
    let root = hstack(StackProps::new().direction(Direction::Column).children(boxes(2)));
    assert_eq!(base(&root.style, Prop::FlexDirection), Some(Direction::Row.into()));
    assert_eq!(base(&root.style, Prop::AlignItems), Some(Align::Center.into()));

    let rule = root.style.get_nested(&Selector::SiblingsAfterFirst).unwrap();
    assert_eq!(base(rule, Prop::MarginLeft), Some(space(2.0)));
}

#[test]
fn test_vstack_ignores_caller_direction() {
    let root = vstack(
        StackProps::new()
            .direction(Direction::Row)
            .is_inline(true)
            .children(boxes(2)),
    );
    assert_eq!(base(&root.style, Prop::FlexDirection), Some(Direction::Column.into()));
}

#[test]
fn test_hstack_ignores_responsive_direction() {
    let root = hstack(StackProps::new().direction(Responsive::from_breakpoints([
        (Breakpoint::Base, Direction::Column),
        (Breakpoint::Lg, Direction::Column),
    ])));
    assert_eq!(
        root.style.get(Prop::FlexDirection),
        Some(&Responsive::Value(Direction::Row.into()))
    );
}

#[test]
fn test_component_trait_matches_functions() {
    let props = || StackProps::new().divider(divider()).children(boxes(3));

    assert_eq!(Stack::render(props()).style, stack(props()).style);
    assert_eq!(HStack::render(props()).style, hstack(props()).style);
    assert_eq!(VStack::render(props()).style, vstack(props()).style);
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_html_output() {
    let node_ref = NodeRef::new();
    let root = stack(
        StackProps::new()
            .direction(Direction::Row)
            .spacing(Length::Space(4.0))
            .node_ref(node_ref.clone())
            .child(Element::text("a"))
            .child(Element::text("b")),
    );

    let html = to_html(&root, &DefaultTheme::new());
    assert!(html.contains("flex-direction: row"));
    assert!(html.contains("*:not(style) ~ *:not(style){"));
    assert!(html.contains("margin-left: 1rem"));
    assert!(html.contains("<span"));
    assert_eq!(node_ref.get(), Some(root.id.clone()));
}
