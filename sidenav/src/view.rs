use navdom::{Border, Color, Edges, Element, Justify, Position, Size, Style};

pub const NAV_ID: &str = "nav";
pub const MAIN_ID: &str = "main";
pub const MENU_BUTTON_ID: &str = "menu-button";
pub const NAV_CLOSE_ID: &str = "nav-close";

/// Build the page tree. The panel starts collapsed and the content sits
/// flush left; the toggle controller owns every later change to them.
pub fn page() -> Element {
    Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .style(Style::new().background(Color::rgb(0, 0, 0)))
        .child(header())
        .child(main_content())
        .child(nav_panel())
}

fn header() -> Element {
    Element::row()
        .id("header")
        .width(Size::Fill)
        .height(Size::Fixed(3))
        .justify(Justify::SpaceBetween)
        .style(
            Style::new()
                .background(Color::oklch(0.3, 0.1, 250.0))
                .border(Border::Rounded),
        )
        .padding(Edges::symmetric(0, 1))
        .child(
            Element::text("☰ Menu")
                .id(MENU_BUTTON_ID)
                .clickable(true)
                .style(Style::new().bold()),
        )
        .child(Element::text("sidenav").style(Style::new().dim()))
}

fn main_content() -> Element {
    Element::col()
        .id(MAIN_ID)
        .width(Size::Fill)
        .height(Size::Fill)
        .padding(Edges::all(2))
        .gap(1)
        .child(
            Element::text("Main Content Area")
                .style(Style::new().bold().foreground(Color::oklch(0.9, 0.05, 250.0))),
        )
        .child(Element::text("Press 'm' or click the menu button to toggle the panel."))
        .child(Element::text("Press 'q' to quit."))
}

fn nav_panel() -> Element {
    Element::col()
        .id(NAV_ID)
        .position(Position::Absolute)
        .left(0)
        .top(0)
        .width(Size::Fixed(0))
        .height(Size::Fill)
        .z_index(1)
        .style(Style::new().background(Color::oklch(0.2, 0.02, 250.0)))
        .padding(Edges::all(1))
        .gap(1)
        .child(
            Element::text("✕ Close")
                .id(NAV_CLOSE_ID)
                .clickable(true)
                .style(Style::new().dim()),
        )
        .child(nav_link("Home"))
        .child(nav_link("Chores"))
        .child(nav_link("Reminders"))
        .child(nav_link("Admin"))
}

fn nav_link(label: &str) -> Element {
    Element::text(label).style(Style::new().foreground(Color::oklch(0.85, 0.06, 250.0)))
}
