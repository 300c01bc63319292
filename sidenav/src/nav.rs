use navdom::{Color, Dom, DomError, Size};

/// Expanded panel width in terminal columns. Layout clamps this on
/// terminals narrower than the panel.
pub const OPEN_WIDTH: u16 = 250;

/// Opacity of the page-background scrim while the panel is open.
pub const SCRIM_ALPHA: f32 = 0.4;

/// Controller for the collapsible navigation panel.
///
/// Binds to the panel and content elements once, up front, and afterwards
/// flips their visual state in sync with a single boolean. Constructing
/// via [`NavToggle::bind`] fails if either element is missing, so the
/// per-call lookups cannot fail while the Dom stays intact.
#[derive(Debug)]
pub struct NavToggle {
    nav_id: String,
    main_id: String,
    open_width: u16,
    open: bool,
}

impl NavToggle {
    /// Bind to the default `nav` and `main` element identifiers.
    pub fn bind(dom: &Dom) -> Result<Self, DomError> {
        Self::bind_ids(dom, "nav", "main")
    }

    /// Bind to custom identifiers. Validates both before returning.
    pub fn bind_ids(dom: &Dom, nav_id: &str, main_id: &str) -> Result<Self, DomError> {
        dom.require(nav_id)?;
        dom.require(main_id)?;
        Ok(Self {
            nav_id: nav_id.to_string(),
            main_id: main_id.to_string(),
            open_width: OPEN_WIDTH,
            open: false,
        })
    }

    /// Override the expanded panel width.
    pub fn open_width(mut self, width: u16) -> Self {
        self.open_width = width;
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the panel between open and closed.
    ///
    /// Closing collapses the panel to width 0, removes the content
    /// offset, and restores the opaque page background. Opening expands
    /// the panel, shifts the content right by the same width, and lays a
    /// translucent scrim over the page background. The flag inverts only
    /// after all three updates have been applied; a missing element
    /// short-circuits the remaining updates and leaves the state as-is.
    pub fn toggle(&mut self, dom: &mut Dom) -> Result<(), DomError> {
        if self.open {
            dom.element_mut(&self.nav_id)?.width = Size::Fixed(0);
            dom.element_mut(&self.main_id)?.margin.left = 0;
            dom.root_mut().style.background = Some(Color::rgb(0, 0, 0));
        } else {
            dom.element_mut(&self.nav_id)?.width = Size::Fixed(self.open_width);
            dom.element_mut(&self.main_id)?.margin.left = self.open_width;
            dom.root_mut().style.background = Some(Color::rgb(0, 0, 0).alpha(SCRIM_ALPHA));
        }
        self.open = !self.open;
        log::debug!(
            "nav panel {}",
            if self.open { "opened" } else { "closed" }
        );
        Ok(())
    }
}
