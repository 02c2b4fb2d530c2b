use std::collections::BTreeSet;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event};
use yew::prelude::*;
use yew_hooks::prelude::use_event_with_window;

use crate::config;
use crate::content::Section;

/// Position of one `section[id]` element at sampling time.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionPosition {
    pub id: String,
    /// Top edge relative to the viewport, as reported by `getBoundingClientRect`.
    pub top: f64,
    /// Carries `data-animate`.
    pub animate: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollSample {
    pub scroll_y: f64,
    pub viewport_height: f64,
    /// In document order.
    pub sections: Vec<SectionPosition>,
}

pub enum ViewAction {
    Scrolled(ScrollSample),
    ToggleMenu,
    CloseMenu,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub is_menu_open: bool,
    pub is_scrolled: bool,
    /// Grows only; a revealed section stays revealed for the rest of the page load.
    pub visible_sections: BTreeSet<String>,
    pub active_section: Section,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            is_menu_open: false,
            is_scrolled: false,
            visible_sections: BTreeSet::new(),
            active_section: Section::Hero,
        }
    }
}

pub fn is_scrolled_at(scroll_y: f64) -> bool {
    scroll_y > config::SCROLLED_THRESHOLD_PX
}

pub fn has_entered_viewport(top: f64, viewport_height: f64) -> bool {
    top < viewport_height * config::REVEAL_VIEWPORT_RATIO
}

fn active_section_of(sections: &[SectionPosition]) -> Section {
    sections
        .iter()
        .filter(|position| position.top <= config::ACTIVE_SECTION_OFFSET_PX)
        .filter_map(|position| Section::from_id(&position.id))
        .last()
        .unwrap_or(Section::Hero)
}

impl ViewState {
    pub fn is_visible(&self, id: &str) -> bool {
        self.visible_sections.contains(id)
    }

    pub fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::Scrolled(sample) => {
                self.is_scrolled = is_scrolled_at(sample.scroll_y);
                for position in &sample.sections {
                    if position.animate
                        && has_entered_viewport(position.top, sample.viewport_height)
                        && !self.visible_sections.contains(&position.id)
                    {
                        self.visible_sections.insert(position.id.clone());
                    }
                }
                self.active_section = active_section_of(&sample.sections);
            }
            ViewAction::ToggleMenu => self.is_menu_open = !self.is_menu_open,
            ViewAction::CloseMenu => self.is_menu_open = false,
        }
    }
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Reads scroll offset, viewport height and the position of every `section[id]`.
/// `None` outside a browser.
pub fn sample_viewport() -> Option<ScrollSample> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;

    let nodes = document.query_selector_all("section[id]").ok()?;
    let mut sections = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        let Some(element) = nodes.item(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        sections.push(SectionPosition {
            id: element.id(),
            top: element.get_bounding_client_rect().top(),
            animate: element.has_attribute("data-animate"),
        });
    }

    Some(ScrollSample {
        scroll_y,
        viewport_height,
        sections,
    })
}

/// Page-wide view state, fed by the window's scroll events for as long as the
/// calling component is mounted.
#[hook]
pub fn use_viewport_tracker() -> UseReducerHandle<ViewState> {
    let state = use_reducer_eq(ViewState::default);

    {
        let state = state.clone();
        use_event_with_window("scroll", move |_: Event| {
            if let Some(sample) = sample_viewport() {
                state.dispatch(ViewAction::Scrolled(sample));
            }
        });
    }

    // Initial check, for reloads that restore a scrolled position
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(sample) = sample_viewport() {
                    state.dispatch(ViewAction::Scrolled(sample));
                }
                || ()
            },
            (),
        );
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(id: &str, top: f64, animate: bool) -> SectionPosition {
        SectionPosition {
            id: id.to_string(),
            top,
            animate,
        }
    }

    fn sample(scroll_y: f64, sections: Vec<SectionPosition>) -> ViewAction {
        ViewAction::Scrolled(ScrollSample {
            scroll_y,
            viewport_height: 800.0,
            sections,
        })
    }

    /// Page layout with every section 1000px tall, seen from `scroll_y`.
    fn page_at(scroll_y: f64) -> ViewAction {
        let sections = Section::ALL
            .iter()
            .enumerate()
            .map(|(i, s)| position(s.id(), i as f64 * 1000.0 - scroll_y, s.animates()))
            .collect();
        sample(scroll_y, sections)
    }

    #[test]
    fn scrolled_flag_boundary_is_exclusive() {
        assert!(!is_scrolled_at(0.0));
        assert!(!is_scrolled_at(9.99));
        assert!(!is_scrolled_at(10.0));
        assert!(is_scrolled_at(10.01));
        assert!(is_scrolled_at(11.0));
        assert!(is_scrolled_at(5000.0));
    }

    #[test]
    fn scroll_sample_sets_and_clears_scrolled_flag() {
        let mut state = ViewState::default();
        state.apply(sample(10.0, vec![]));
        assert!(!state.is_scrolled);
        state.apply(sample(11.0, vec![]));
        assert!(state.is_scrolled);
        state.apply(sample(0.0, vec![]));
        assert!(!state.is_scrolled);
    }

    #[test]
    fn reveals_animated_sections_above_three_quarters() {
        let mut state = ViewState::default();
        state.apply(sample(
            0.0,
            vec![
                position("process", 599.0, true),
                position("about", 600.0, true),
                position("services", 100.0, false),
            ],
        ));
        assert!(state.is_visible("process"));
        assert!(!state.is_visible("about"));
        assert!(!state.is_visible("services"));
    }

    #[test]
    fn visible_sections_never_shrink() {
        let mut state = ViewState::default();
        let mut previous = 0;
        for scroll_y in [0.0, 1500.0, 4200.0, 300.0, 7000.0, 0.0, 2500.0] {
            state.apply(page_at(scroll_y));
            assert!(state.visible_sections.len() >= previous);
            previous = state.visible_sections.len();
        }
        let expected: BTreeSet<String> = ["about", "contact", "process"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(state.visible_sections, expected);
    }

    #[test]
    fn active_section_follows_nav_bar() {
        let mut state = ViewState::default();
        state.apply(page_at(0.0));
        assert_eq!(state.active_section, Section::Hero);
        state.apply(page_at(2950.0));
        assert_eq!(state.active_section, Section::Work);
        state.apply(page_at(7000.0));
        assert_eq!(state.active_section, Section::Contact);
    }

    #[test]
    fn unknown_ids_do_not_become_active() {
        let mut state = ViewState::default();
        state.apply(sample(
            900.0,
            vec![position("services", -200.0, false), position("banner", 0.0, false)],
        ));
        assert_eq!(state.active_section, Section::Services);
    }

    #[test]
    fn menu_toggles_and_closes() {
        let mut state = ViewState::default();
        state.apply(ViewAction::ToggleMenu);
        assert!(state.is_menu_open);
        state.apply(ViewAction::ToggleMenu);
        assert!(!state.is_menu_open);
        state.apply(ViewAction::CloseMenu);
        assert!(!state.is_menu_open);
    }

    #[test]
    fn reducer_keeps_state_when_nothing_changes() {
        let state = Rc::new(ViewState::default());
        let next = state.clone().reduce(ViewAction::CloseMenu);
        assert!(Rc::ptr_eq(&state, &next));

        let next = state.clone().reduce(ViewAction::ToggleMenu);
        assert!(!Rc::ptr_eq(&state, &next));
        assert!(next.is_menu_open);
    }
}
