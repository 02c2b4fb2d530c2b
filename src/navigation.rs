use log::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::viewport::ViewAction;

/// Something that can bring a section into view by its DOM id.
pub trait SectionScroller {
    /// Returns `false` when no element carries `id`.
    fn scroll_to(&self, id: &str) -> bool;
}

/// Smooth-scrolls the live document. The animation is left to the browser.
pub struct DomScroller;

#[deny(deprecated)]
impl SectionScroller for DomScroller {
    fn scroll_to(&self, id: &str) -> bool {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id));

        match element {
            Some(element) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
                true
            }
            None => {
                debug!("No section with id '{}', ignoring navigation", id);
                false
            }
        }
    }
}

/// Scrolls to `id` and, if the section exists, yields the action that closes the
/// mobile menu. A missing section is a silent no-op.
pub fn navigate<S: SectionScroller + ?Sized>(scroller: &S, id: &str) -> Option<ViewAction> {
    scroller.scroll_to(id).then_some(ViewAction::CloseMenu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Section, NAV_LINKS};
    use crate::viewport::{ScrollSample, SectionPosition, ViewState};
    use std::cell::RefCell;
    use std::collections::HashSet;

    /// Pretends every `Section` is on the page and records scroll requests.
    struct FakePage {
        requested: RefCell<Vec<String>>,
    }

    impl FakePage {
        fn new() -> Self {
            Self {
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl SectionScroller for FakePage {
        fn scroll_to(&self, id: &str) -> bool {
            if Section::from_id(id).is_none() {
                return false;
            }
            self.requested.borrow_mut().push(id.to_string());
            true
        }
    }

    fn state_with_menu(open: bool) -> ViewState {
        ViewState {
            is_menu_open: open,
            ..ViewState::default()
        }
    }

    #[test]
    fn every_nav_link_scrolls_to_its_own_section_and_closes_menu() {
        let page = FakePage::new();
        for link in NAV_LINKS {
            for open in [true, false] {
                let mut state = state_with_menu(open);
                let action = navigate(&page, link.target.id()).expect("section exists");
                state.apply(action);
                assert!(!state.is_menu_open, "{} left the menu open", link.label);
            }
        }

        let requested = page.requested.borrow();
        let distinct: HashSet<&String> = requested.iter().collect();
        assert_eq!(requested.len(), NAV_LINKS.len() * 2);
        assert_eq!(distinct.len(), NAV_LINKS.len());
    }

    #[test]
    fn missing_section_is_a_no_op() {
        let page = FakePage::new();
        for open in [true, false] {
            let mut state = state_with_menu(open);
            if let Some(action) = navigate(&page, "testimonials") {
                state.apply(action);
            }
            assert_eq!(state.is_menu_open, open);
        }
        assert!(page.requested.borrow().is_empty());
    }

    #[test]
    fn contact_link_reaches_contact_section_with_menu_closed() {
        let page = FakePage::new();
        let mut state = ViewState::default();
        state.apply(ViewAction::ToggleMenu);

        let contact = NAV_LINKS
            .iter()
            .find(|link| link.label == "Contact")
            .expect("contact link");
        if let Some(action) = navigate(&page, contact.target.id()) {
            state.apply(action);
        }
        assert!(!state.is_menu_open);
        assert_eq!(page.requested.borrow().as_slice(), ["contact"]);

        // Browser finishes the smooth scroll and fires a scroll event
        state.apply(ViewAction::Scrolled(ScrollSample {
            scroll_y: 7000.0,
            viewport_height: 800.0,
            sections: vec![
                SectionPosition { id: "faq".into(), top: -900.0, animate: false },
                SectionPosition { id: "contact".into(), top: 0.0, animate: true },
            ],
        }));
        assert_eq!(state.active_section, Section::Contact);
        assert!(state.is_visible("contact"));
        assert!(!state.is_menu_open);
    }
}
