use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Event;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config;
use crate::dom::{self, DomHost};
use crate::motion;
use crate::scroll_spy::{
    validate_layout, NavigationState, Navigator, PageHost, ScrollSpy, SectionId,
};

/// Shared with every component that can trigger navigation.
#[derive(Clone)]
pub struct NavigatorHandle {
    state: NavigationState,
    navigator: Rc<RefCell<Navigator<DomHost>>>,
}

impl PartialEq for NavigatorHandle {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && Rc::ptr_eq(&self.navigator, &other.navigator)
    }
}

impl NavigatorHandle {
    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn navigate_to(&self, id: SectionId) {
        self.navigator.borrow_mut().navigate_to(id);
    }

    pub fn toggle_menu(&self) {
        self.navigator.borrow_mut().toggle_menu();
    }
}

#[hook]
pub fn use_navigator() -> NavigatorHandle {
    let state = use_state(NavigationState::default);

    let navigator = {
        let setter = state.setter();
        use_mut_ref(move || {
            let mut navigator = Navigator::new(DomHost, ScrollSpy::default());
            navigator.subscribe(move |next| setter.set(*next));
            navigator
        })
    };

    {
        let navigator = navigator.clone();
        use_event_with_window("scroll", move |_: Event| {
            navigator.borrow_mut().on_scroll();
        });
    }

    // Sections are rendered by now; pick up the initial position.
    {
        let navigator = navigator.clone();
        use_effect_with_deps(
            move |_| {
                if config::check_layout_on_mount() {
                    let host = *navigator.borrow().host();
                    let bounds: Vec<_> = SectionId::ALL
                        .into_iter()
                        .filter_map(|id| host.section_bounds(id))
                        .collect();
                    let document_height = dom::scroll_metrics().document_height;
                    if let Err(err) = validate_layout(&bounds, Some(document_height)) {
                        log::debug!("section layout: {err}");
                    }
                }
                // A deep link such as `/#services` targets a section that did
                // not exist when the browser handled the fragment.
                if let Some(fragment) = dom::location_fragment() {
                    match SectionId::from_fragment(&fragment) {
                        Ok(id) => navigator.borrow_mut().navigate_to(id),
                        Err(err) => log::debug!("ignoring link fragment: {err}"),
                    }
                }
                navigator.borrow_mut().on_scroll();
                log::debug!(
                    "active section on mount: {}",
                    navigator.borrow().state().active_section
                );
                || ()
            },
            (),
        );
    }

    NavigatorHandle {
        state: *state,
        navigator,
    }
}

/// Overall scroll progress of the document in `[0, 1]`, updated on scroll.
#[hook]
pub fn use_scroll_progress() -> f64 {
    let progress = use_state(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_event_with_window("scroll", move |_: Event| {
            let metrics = dom::scroll_metrics();
            progress.set(motion::scroll_progress(
                metrics.scroll_y,
                metrics.document_height,
                metrics.viewport_height,
            ));
        });
    }

    *progress
}
