//! In-memory page selection. There is no history stack: only the current page
//! is tracked, and every transition asks the view to scroll back to the top.

use crate::page::Page;

/// Result of a `navigate` call. The view scrolls to the top for every
/// transition, including one that stays on the same page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Page,
    pub to: Page,
}

impl Transition {
    pub fn changed_page(&self) -> bool {
        self.from != self.to
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    current: Page,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn navigate(&mut self, target: Page) -> Transition {
        let from = self.current;
        self.current = target;
        tracing::debug!(%from, to = %target, "navigate");
        Transition { from, to: target }
    }

    /// Navigate by textual identifier; unknown identifiers land on home.
    pub fn navigate_to_key(&mut self, key: &str) -> Transition {
        self.navigate(Page::from_key_or_home(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_home() {
        assert_eq!(Navigator::new().current(), Page::Home);
    }

    #[test]
    fn every_page_reaches_every_page() {
        for from in Page::ALL {
            for to in Page::ALL {
                let mut nav = Navigator::new();
                nav.navigate(from);
                let transition = nav.navigate(to);
                assert_eq!(nav.current(), to);
                assert_eq!(transition, Transition { from, to });
            }
        }
    }

    #[test]
    fn self_transition_is_still_reported() {
        let mut nav = Navigator::new();
        let transition = nav.navigate(Page::Home);
        assert_eq!(nav.current(), Page::Home);
        assert!(!transition.changed_page());
    }

    #[test]
    fn unknown_key_goes_home() {
        let mut nav = Navigator::new();
        nav.navigate(Page::Services);
        let transition = nav.navigate_to_key("pricing");
        assert_eq!(nav.current(), Page::Home);
        assert_eq!(transition.from, Page::Services);
    }
}
