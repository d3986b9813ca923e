//! Navigation bar state: the "scrolled" look, the highlighted section link,
//! the mobile menu, and where in-page links scroll to.

use crate::config::NavParams;
use crate::constants::{ACTIVE_CLASS, SCROLLED_CLASS};
use crate::ports::{ClassList, NavLink};

/// Vertical extent of one `section[id]`, in document pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open range check against the section shifted up by `activation_offset`.
    #[inline]
    pub fn contains(&self, scroll_y: f64, activation_offset: f64) -> bool {
        let start = self.top - activation_offset;
        scroll_y >= start && scroll_y < start + self.height
    }
}

#[inline]
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// The section considered in view.
///
/// Sections are given in document order. When ranges overlap, the last
/// matching section wins, even when its id is empty.
pub fn active_section(
    sections: &[SectionBounds],
    scroll_y: f64,
    activation_offset: f64,
) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| s.contains(scroll_y, activation_offset))
        .map(|s| s.id.as_str())
}

/// Whether a link's `href` is the fragment of the active section.
///
/// No active section counts as the empty fragment, so a bare `#` link
/// matches it.
#[inline]
pub fn link_targets_section(href: Option<&str>, active: Option<&str>) -> bool {
    href.and_then(|h| h.strip_prefix('#')) == Some(active.unwrap_or(""))
}

/// Scroll destination for a section whose page-relative top is `offset_top`.
#[inline]
pub fn scroll_target_for(offset_top: f64, nav_offset: f64) -> f64 {
    offset_top - nav_offset
}

/// Mark the link for `active` and clear every other one.
pub fn highlight_links<L: NavLink>(links: &[L], active: Option<&str>) {
    for link in links {
        let on = link_targets_section(link.href().as_deref(), active);
        link.set_class(ACTIVE_CLASS, on);
    }
}

/// Open/closed state of the mobile navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Mirror the state onto the toggle button and the link list.
    pub fn apply<C: ClassList>(&self, parts: &[&C]) {
        for part in parts {
            part.set_class(ACTIVE_CLASS, self.open);
        }
    }
}

/// Result of one scroll notification.
#[derive(Clone, Debug, PartialEq)]
pub struct NavUpdate {
    pub scrolled: bool,
    pub active: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct NavController {
    params: NavParams,
    menu: MenuState,
}

impl NavController {
    pub fn new(params: NavParams) -> Self {
        Self {
            params,
            menu: MenuState::default(),
        }
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn on_scroll(&self, scroll_y: f64, sections: &[SectionBounds]) -> NavUpdate {
        NavUpdate {
            scrolled: is_scrolled(scroll_y, self.params.scrolled_threshold),
            active: active_section(sections, scroll_y, self.params.section_activation_offset)
                .map(str::to_owned),
        }
    }

    /// Apply a scroll notification to the navbar and to `links`.
    ///
    /// Callers pass the links as they are now, so links added after start-up
    /// are highlighted too.
    pub fn sync_scroll<C: ClassList, L: NavLink>(
        &self,
        scroll_y: f64,
        sections: &[SectionBounds],
        navbar: Option<&C>,
        links: &[L],
    ) -> NavUpdate {
        let update = self.on_scroll(scroll_y, sections);
        if let Some(navbar) = navbar {
            navbar.set_class(SCROLLED_CLASS, update.scrolled);
        }
        highlight_links(links, update.active.as_deref());
        update
    }

    pub fn toggle_menu(&mut self) -> MenuState {
        self.menu.toggle();
        self.menu
    }

    /// Handle a nav link click. `target_top` is the page-relative top of the
    /// resolved target, if any. The menu closes either way.
    pub fn on_link_click(&mut self, target_top: Option<f64>) -> Option<f64> {
        self.menu.close();
        target_top.map(|top| scroll_target_for(top, self.params.scroll_offset))
    }
}
