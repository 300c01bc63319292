use navdom::{Edges, Element, Justify, Position, Rect, Size};

fn layout_root(root: &Element, width: u16, height: u16) -> std::collections::HashMap<String, Rect> {
    navdom::layout::layout(root, Rect::new(0, 0, width, height))
}

// ============================================================================
// Margin Tests
// ============================================================================

#[test]
fn test_left_margin_offsets_content() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(
            Element::col()
                .id("main")
                .width(Size::Fill)
                .height(Size::Fill)
                .margin(Edges::left(250)),
        );

    let layout = layout_root(&root, 800, 600);
    let main = layout.get("main").unwrap();

    assert_eq!(main.x, 250, "left margin pushes content right");
    assert_eq!(main.width, 550, "margin shrinks available width");
    assert_eq!(main.height, 600);
}

#[test]
fn test_zero_margin_sits_flush_left() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(Element::col().id("main").width(Size::Fill).height(Size::Fill));

    let layout = layout_root(&root, 800, 600);
    let main = layout.get("main").unwrap();

    assert_eq!(main.x, 0);
    assert_eq!(main.width, 800);
}

#[test]
fn test_root_margin_shrinks_available_space() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .margin(Edges::all(10));

    let layout = layout_root(&root, 100, 100);
    let rect = layout.get("root").unwrap();

    assert_eq!(rect.x, 10);
    assert_eq!(rect.y, 10);
    assert_eq!(rect.width, 80);
    assert_eq!(rect.height, 80);
}

// ============================================================================
// Size Resolution Tests
// ============================================================================

#[test]
fn test_fixed_width_clamps_to_available() {
    let root = Element::box_()
        .id("panel")
        .width(Size::Fixed(250))
        .height(Size::Fill);

    let layout = layout_root(&root, 80, 24);
    let rect = layout.get("panel").unwrap();

    assert_eq!(rect.width, 80, "fixed width cannot exceed the viewport");
}

#[test]
fn test_zero_width_panel_is_empty() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(
            Element::col()
                .id("nav")
                .width(Size::Fixed(0))
                .height(Size::Fill),
        );

    let layout = layout_root(&root, 800, 600);
    let nav = layout.get("nav").unwrap();

    assert_eq!(nav.width, 0);
    assert!(nav.is_empty());
}

#[test]
fn test_fill_divides_remainder_in_row() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(100))
        .height(Size::Fixed(10))
        .child(
            Element::box_()
                .id("a")
                .width(Size::Fixed(20))
                .height(Size::Fill),
        )
        .child(Element::box_().id("b").width(Size::Fill).height(Size::Fill))
        .child(Element::box_().id("c").width(Size::Fill).height(Size::Fill));

    let layout = layout_root(&root, 100, 10);

    let a = layout.get("a").unwrap();
    let b = layout.get("b").unwrap();
    let c = layout.get("c").unwrap();

    assert_eq!((a.x, a.width), (0, 20));
    assert_eq!((b.x, b.width), (20, 40));
    assert_eq!((c.x, c.width), (60, 40));
}

// ============================================================================
// Flow Tests
// ============================================================================

#[test]
fn test_column_gap_offsets_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(50))
        .height(Size::Fixed(100))
        .gap(2)
        .child(
            Element::box_()
                .id("first")
                .width(Size::Fill)
                .height(Size::Fixed(10)),
        )
        .child(
            Element::box_()
                .id("second")
                .width(Size::Fill)
                .height(Size::Fixed(10)),
        );

    let layout = layout_root(&root, 100, 100);

    assert_eq!(layout.get("first").unwrap().y, 0);
    assert_eq!(layout.get("second").unwrap().y, 12, "10 tall + 2 gap");
}

#[test]
fn test_padding_insets_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(10))
        .padding(Edges::all(2))
        .child(Element::box_().id("inner").width(Size::Fill).height(Size::Fill));

    let layout = layout_root(&root, 100, 100);
    let inner = layout.get("inner").unwrap();

    assert_eq!((inner.x, inner.y), (2, 2));
    assert_eq!((inner.width, inner.height), (16, 6));
}

#[test]
fn test_space_between_pushes_children_apart() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(40))
        .height(Size::Fixed(1))
        .justify(Justify::SpaceBetween)
        .child(
            Element::box_()
                .id("left")
                .width(Size::Fixed(10))
                .height(Size::Fill),
        )
        .child(
            Element::box_()
                .id("right")
                .width(Size::Fixed(10))
                .height(Size::Fill),
        );

    let layout = layout_root(&root, 40, 1);

    assert_eq!(layout.get("left").unwrap().x, 0);
    assert_eq!(layout.get("right").unwrap().x, 30);
}

// ============================================================================
// Absolute Positioning Tests
// ============================================================================

#[test]
fn test_absolute_overlay_spans_viewport_height() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(Element::col().id("main").width(Size::Fill).height(Size::Fill))
        .child(
            Element::col()
                .id("nav")
                .position(Position::Absolute)
                .left(0)
                .top(0)
                .width(Size::Fixed(250))
                .height(Size::Fill),
        );

    let layout = layout_root(&root, 800, 600);

    let nav = layout.get("nav").unwrap();
    assert_eq!(*nav, Rect::new(0, 0, 250, 600));

    // The overlay takes no space from the flow
    let main = layout.get("main").unwrap();
    assert_eq!(main.x, 0);
    assert_eq!(main.width, 800);
}

#[test]
fn test_absolute_element_does_not_consume_flow_space() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(100))
        .height(Size::Fixed(100))
        .child(
            Element::box_()
                .id("floating")
                .position(Position::Absolute)
                .left(10)
                .top(5)
                .width(Size::Fixed(20))
                .height(Size::Fixed(4)),
        )
        .child(
            Element::box_()
                .id("flow")
                .width(Size::Fill)
                .height(Size::Fixed(10)),
        );

    let layout = layout_root(&root, 100, 100);

    assert_eq!(layout.get("floating").unwrap(), &Rect::new(10, 5, 20, 4));
    assert_eq!(layout.get("flow").unwrap().y, 0, "flow starts at the top");
}
