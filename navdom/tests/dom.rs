use navdom::{Color, Dom, DomError, Element, Size, Style};

fn tree() -> Dom {
    Dom::new(
        Element::col()
            .id("root")
            .style(Style::new().background(Color::rgb(0, 0, 0)))
            .child(
                Element::col()
                    .id("nav")
                    .width(Size::Fixed(0))
                    .child(Element::text("Home").id("nav-home")),
            )
            .child(Element::col().id("main")),
    )
}

#[test]
fn test_get_resolves_nested_identifiers() {
    let dom = tree();

    assert!(dom.get("nav").is_some());
    assert!(dom.get("nav-home").is_some());
    assert!(dom.get("main").is_some());
    assert!(dom.get("root").is_some());
    assert!(dom.get("missing").is_none());
}

#[test]
fn test_require_validates_without_touching() {
    let dom = tree();

    assert!(dom.require("nav").is_ok());
    assert_eq!(
        dom.require("sidebar"),
        Err(DomError::MissingElement {
            id: "sidebar".to_string()
        })
    );
}

#[test]
fn test_get_mut_resolves_nested_identifiers() {
    let mut dom = tree();

    dom.get_mut("nav-home").unwrap().clickable = true;

    assert!(dom.get("nav-home").unwrap().clickable);
    assert!(dom.get_mut("missing").is_none());
}

#[test]
fn test_element_mut_mutation_is_visible() {
    let mut dom = tree();

    dom.element_mut("nav").unwrap().width = Size::Fixed(250);

    assert_eq!(dom.get("nav").unwrap().width, Size::Fixed(250));
}

#[test]
fn test_element_mut_surfaces_missing_id() {
    let mut dom = tree();

    let err = dom.element_mut("menu").unwrap_err();
    assert_eq!(
        err,
        DomError::MissingElement {
            id: "menu".to_string()
        }
    );
    assert_eq!(err.to_string(), "no element with id \"menu\" in the tree");
}

#[test]
fn test_root_background_is_the_page_background() {
    let mut dom = tree();

    dom.root_mut().style.background = Some(Color::rgba(0, 0, 0, 0.4));

    assert_eq!(
        dom.root().style.background,
        Some(Color::rgba(0, 0, 0, 0.4))
    );
}
