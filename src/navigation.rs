use strum::{Display, EnumString, VariantArray};

/// Scroll offset past which the header switches to its compact style.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Page sections reachable from the header menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, VariantArray)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Section {
    About,
    Projects,
    Solutions,
    Contact,
}

impl Section {
    /// Element id of the section on the page.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Projects => "projects",
            Section::Solutions => "solutions",
            Section::Contact => "contact",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Section::About => "nav.about",
            Section::Projects => "nav.projects",
            Section::Solutions => "nav.solutions",
            Section::Contact => "nav.contact",
        }
    }

    /// Icon shown next to the label in the mobile menu.
    pub fn icon(&self) -> &'static str {
        match self {
            Section::About => "📋",
            Section::Projects => "🚀",
            Section::Solutions => "💡",
            Section::Contact => "📞",
        }
    }

    /// The contact entry is rendered as a button rather than a link.
    pub fn is_call_to_action(&self) -> bool {
        matches!(self, Section::Contact)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavLink {
    pub anchor: &'static str,
    pub label_key: &'static str,
    pub icon: &'static str,
    pub call_to_action: bool,
}

impl From<Section> for NavLink {
    fn from(section: Section) -> Self {
        Self {
            anchor: section.anchor(),
            label_key: section.label_key(),
            icon: section.icon(),
            call_to_action: section.is_call_to_action(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Navigation {
    pub links: Vec<NavLink>,
}

impl Default for Navigation {
    fn default() -> Self {
        Self {
            links: Section::VARIANTS.iter().copied().map(NavLink::from).collect(),
        }
    }
}

/// Header menu state: whether the mobile menu is open and whether the
/// page has scrolled past [`SCROLL_THRESHOLD_PX`].
///
/// The server renders the initial state through `header_class` and
/// `menu_class`. After load, `static/js/landing.js` applies the same
/// transitions in the browser; the methods below define them and the
/// script must stay in step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeaderState {
    pub menu_open: bool,
    pub scrolled: bool,
}

impl HeaderState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Closes the menu and returns the anchor to scroll to smoothly.
    pub fn choose(&mut self, section: Section) -> &'static str {
        self.menu_open = false;
        section.anchor()
    }

    /// A click anywhere outside the menu closes it.
    pub fn click(&mut self, inside_menu: bool) {
        if !inside_menu {
            self.menu_open = false;
        }
    }

    pub fn scroll_to(&mut self, offset: f64) {
        self.scrolled = offset > SCROLL_THRESHOLD_PX;
    }

    pub fn header_class(&self) -> &'static str {
        if self.scrolled {
            "site-header is-scrolled"
        } else {
            "site-header"
        }
    }

    pub fn menu_class(&self) -> &'static str {
        if self.menu_open {
            "mobile-menu is-open"
        } else {
            "mobile-menu"
        }
    }
}
