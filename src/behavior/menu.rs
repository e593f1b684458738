use crate::constants::{ICON_CLOSED_CLASS, ICON_OPEN_CLASS};

/// Open/closed state of the mobile navigation menu.
///
/// The DOM is the source of truth (the `active` class on the menu container);
/// this type is rebuilt from it on each event so the icon is always derived
/// from the menu rather than toggled independently.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[inline]
    pub fn from_open(open: bool) -> Self {
        Self { open }
    }

    #[inline]
    pub fn is_open(self) -> bool {
        self.open
    }

    #[inline]
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    #[inline]
    pub fn closed(self) -> Self {
        Self { open: false }
    }

    /// Icon class to add and icon class to remove for this state.
    #[inline]
    pub fn icon_classes(self) -> (&'static str, &'static str) {
        if self.open {
            (ICON_OPEN_CLASS, ICON_CLOSED_CLASS)
        } else {
            (ICON_CLOSED_CLASS, ICON_OPEN_CLASS)
        }
    }
}

/// Fragment part of an in-page link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// `#` alone, which names no element.
    Empty,
    Id(&'a str),
}

/// Parse an `href` of the form `#id`. Links not starting with `#` are `None`.
pub fn parse_fragment(href: &str) -> Option<Fragment<'_>> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        Some(Fragment::Empty)
    } else {
        Some(Fragment::Id(id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorOutcome {
    pub prevent_default: bool,
    pub scroll: bool,
    pub close_menu: bool,
}

/// What a click on an in-page link does. Navigation is always suppressed;
/// scrolling and closing the menu only happen when the target exists.
pub fn anchor_click(target_found: bool, menu_present: bool) -> AnchorOutcome {
    AnchorOutcome {
        prevent_default: true,
        scroll: target_found,
        close_menu: target_found && menu_present,
    }
}
