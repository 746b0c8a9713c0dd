//! Scroll-spy navigation: which section is active, whether the mobile menu
//! is open, and jumping to a section.
//!
//! Browser access goes through [`PageHost`] so the logic here runs without a
//! DOM. The live page uses [`crate::dom::DomHost`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Services,
    Contact,
}

impl SectionId {
    /// Declared page order. The scan walks sections in this order.
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Services,
        SectionId::Contact,
    ];

    /// Element id of the section on the page.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Services => "services",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About Us",
            SectionId::Services => "Services",
            SectionId::Contact => "Contact",
        }
    }
}

impl Default for SectionId {
    fn default() -> Self {
        SectionId::ALL[0]
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown section `{0}`")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

impl SectionId {
    /// Parses a link fragment such as `#services`; the `#` is optional.
    pub fn from_fragment(fragment: &str) -> Result<Self, UnknownSection> {
        fragment.strip_prefix('#').unwrap_or(fragment).parse()
    }
}

/// Vertical extent of a rendered section, `[top, top + height)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: SectionId,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: SectionId, top: f64, height: f64) -> Self {
        Self { id, top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn contains(&self, offset: f64) -> bool {
        offset >= self.top && offset < self.bottom()
    }
}

/// What the navigator needs from the page it runs in.
pub trait PageHost {
    fn scroll_y(&self) -> f64;

    /// `None` when the section is not rendered (yet).
    fn section_bounds(&self, id: SectionId) -> Option<SectionBounds>;

    /// Starts a smooth scroll to the section. Returns `false` when the
    /// section is not rendered and nothing happened.
    fn scroll_to_section(&self, id: SectionId) -> bool;
}

/// Resolution rule when more than one section contains the probe offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanOrder {
    /// Every section is checked and a later match replaces an earlier one.
    #[default]
    LastMatchWins,
    /// The scan stops at the first section that matches.
    FirstMatchWins,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSpy {
    lookahead: f64,
    order: ScanOrder,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new(config::SCROLL_LOOKAHEAD, config::scan_order())
    }
}

impl ScrollSpy {
    pub fn new(lookahead: f64, order: ScanOrder) -> Self {
        Self { lookahead, order }
    }

    pub fn scan<H: PageHost + ?Sized>(&self, host: &H) -> Option<SectionId> {
        self.locate(host.scroll_y(), |id| host.section_bounds(id))
    }

    /// Finds the section containing `scroll_y + lookahead`. Sections with no
    /// bounds are skipped.
    pub fn locate<F>(&self, scroll_y: f64, mut bounds_of: F) -> Option<SectionId>
    where
        F: FnMut(SectionId) -> Option<SectionBounds>,
    {
        let probe = scroll_y + self.lookahead;
        let mut found = None;
        for id in SectionId::ALL {
            let Some(bounds) = bounds_of(id) else {
                continue;
            };
            if bounds.contains(probe) {
                found = Some(id);
                if self.order == ScanOrder::FirstMatchWins {
                    break;
                }
            }
        }
        found
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub active_section: SectionId,
    pub menu_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// Result of a scan. `None` leaves the active section alone.
    Spied(Option<SectionId>),
    Navigated(SectionId),
    ToggleMenu,
}

impl NavigationState {
    pub fn apply(self, action: NavAction) -> Self {
        match action {
            NavAction::Spied(Some(id)) => Self {
                active_section: id,
                ..self
            },
            NavAction::Spied(None) => self,
            NavAction::Navigated(_) => Self {
                menu_open: false,
                ..self
            },
            NavAction::ToggleMenu => Self {
                menu_open: !self.menu_open,
                ..self
            },
        }
    }
}

type Subscriber = Box<dyn Fn(&NavigationState)>;

/// Owns the navigation state and notifies subscribers whenever it changes.
pub struct Navigator<H> {
    host: H,
    spy: ScrollSpy,
    state: NavigationState,
    subscribers: Vec<Subscriber>,
}

impl<H: PageHost> Navigator<H> {
    pub fn new(host: H, spy: ScrollSpy) -> Self {
        Self {
            host,
            spy,
            state: NavigationState::default(),
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: Fn(&NavigationState) + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn on_scroll(&mut self) {
        let found = self.spy.scan(&self.host);
        self.dispatch(NavAction::Spied(found));
    }

    /// Scrolls to `id` and closes the mobile menu. A section that is not
    /// rendered is skipped, but the menu still closes.
    pub fn navigate_to(&mut self, id: SectionId) {
        if self.host.scroll_to_section(id) {
            log::debug!("scrolling to #{id}");
        }
        self.dispatch(NavAction::Navigated(id));
    }

    pub fn toggle_menu(&mut self) {
        self.dispatch(NavAction::ToggleMenu);
    }

    fn dispatch(&mut self, action: NavAction) {
        let next = self.state.apply(action);
        if next == self.state {
            return;
        }
        self.state = next;
        for subscriber in &self.subscribers {
            subscriber(&next);
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("section `{0}` has no height")]
    Collapsed(SectionId),
    #[error("first section `{first}` starts {size}px below the page top")]
    LeadingGap { first: SectionId, size: f64 },
    #[error("section `{second}` starts before `{first}` ends")]
    Overlap { first: SectionId, second: SectionId },
    #[error("{size}px gap between `{after}` and `{before}`")]
    Gap {
        after: SectionId,
        before: SectionId,
        size: f64,
    },
    #[error("last section `{last}` ends {size}px before the document does")]
    TrailingGap { last: SectionId, size: f64 },
}

/// Checks that section ranges, in page order, do not overlap and together
/// cover the page from offset 0. With `document_height` the last section
/// must also reach the end of the document.
pub fn validate_layout(
    sections: &[SectionBounds],
    document_height: Option<f64>,
) -> Result<(), LayoutError> {
    if let Some(collapsed) = sections.iter().find(|s| s.height <= 0.0) {
        return Err(LayoutError::Collapsed(collapsed.id));
    }
    let (Some(first), Some(last)) = (sections.first(), sections.last()) else {
        return Ok(());
    };
    if first.top > 0.0 {
        return Err(LayoutError::LeadingGap {
            first: first.id,
            size: first.top,
        });
    }
    for pair in sections.windows(2) {
        let (first, second) = (pair[0], pair[1]);
        if second.top < first.bottom() {
            return Err(LayoutError::Overlap {
                first: first.id,
                second: second.id,
            });
        }
        if second.top > first.bottom() {
            return Err(LayoutError::Gap {
                after: first.id,
                before: second.id,
                size: second.top - first.bottom(),
            });
        }
    }
    match document_height {
        Some(height) if last.bottom() < height => Err(LayoutError::TrailingGap {
            last: last.id,
            size: height - last.bottom(),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct FixedLayout {
        scroll_y: Cell<f64>,
        sections: Vec<SectionBounds>,
        scrolled_to: RefCell<Vec<SectionId>>,
    }

    impl FixedLayout {
        fn new(sections: Vec<SectionBounds>) -> Self {
            Self {
                scroll_y: Cell::new(0.0),
                sections,
                scrolled_to: RefCell::new(Vec::new()),
            }
        }

        fn standard() -> Self {
            Self::new(standard_sections())
        }
    }

    impl PageHost for FixedLayout {
        fn scroll_y(&self) -> f64 {
            self.scroll_y.get()
        }

        fn section_bounds(&self, id: SectionId) -> Option<SectionBounds> {
            self.sections.iter().copied().find(|s| s.id == id)
        }

        fn scroll_to_section(&self, id: SectionId) -> bool {
            if self.section_bounds(id).is_none() {
                return false;
            }
            self.scrolled_to.borrow_mut().push(id);
            true
        }
    }

    fn standard_sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new(SectionId::Home, 0.0, 800.0),
            SectionBounds::new(SectionId::About, 800.0, 800.0),
            SectionBounds::new(SectionId::Services, 1600.0, 1000.0),
            SectionBounds::new(SectionId::Contact, 2600.0, 800.0),
        ]
    }

    fn navigator(layout: FixedLayout) -> Navigator<FixedLayout> {
        Navigator::new(layout, ScrollSpy::new(100.0, ScanOrder::LastMatchWins))
    }

    fn scroll(nav: &mut Navigator<FixedLayout>, y: f64) -> SectionId {
        nav.host().scroll_y.set(y);
        nav.on_scroll();
        nav.state().active_section
    }

    #[test]
    fn initial_state_is_home_with_menu_closed() {
        let nav = navigator(FixedLayout::standard());
        assert_eq!(nav.state().active_section, SectionId::Home);
        assert!(!nav.state().menu_open);
    }

    #[test]
    fn lookahead_moves_the_probe_into_the_next_section() {
        let mut nav = navigator(FixedLayout::standard());
        assert_eq!(scroll(&mut nav, 750.0), SectionId::About);
        assert_eq!(scroll(&mut nav, 0.0), SectionId::Home);
    }

    #[test]
    fn offsets_inside_one_section_activate_it() {
        let mut nav = navigator(FixedLayout::standard());
        for section in standard_sections() {
            for probe in [section.top, section.top + section.height / 2.0, section.bottom() - 1.0] {
                assert_eq!(scroll(&mut nav, probe - 100.0), section.id, "probe {probe}");
            }
        }
    }

    #[test]
    fn sections_can_jump_non_adjacently() {
        let mut nav = navigator(FixedLayout::standard());
        assert_eq!(scroll(&mut nav, 3000.0), SectionId::Contact);
        assert_eq!(scroll(&mut nav, 100.0), SectionId::Home);
    }

    #[test]
    fn no_match_keeps_the_previous_section() {
        let mut nav = navigator(FixedLayout::standard());
        scroll(&mut nav, 1700.0);
        assert_eq!(scroll(&mut nav, 9000.0), SectionId::Services);
    }

    #[test]
    fn missing_sections_are_skipped() {
        let mut sections = standard_sections();
        sections.retain(|s| s.id != SectionId::About);
        let mut nav = navigator(FixedLayout::new(sections));
        assert_eq!(scroll(&mut nav, 1000.0), SectionId::Home);
        assert_eq!(scroll(&mut nav, 2000.0), SectionId::Services);
    }

    #[test]
    fn overlapping_sections_resolve_by_scan_order() {
        let overlapping = [
            SectionBounds::new(SectionId::Home, 0.0, 1000.0),
            SectionBounds::new(SectionId::About, 500.0, 1000.0),
        ];
        let bounds = |id: SectionId| overlapping.iter().copied().find(|s| s.id == id);

        let last = ScrollSpy::new(100.0, ScanOrder::LastMatchWins);
        assert_eq!(last.locate(600.0, bounds), Some(SectionId::About));

        let first = ScrollSpy::new(100.0, ScanOrder::FirstMatchWins);
        assert_eq!(first.locate(600.0, bounds), Some(SectionId::Home));
    }

    #[test]
    fn navigate_to_scrolls_and_closes_menu() {
        let mut nav = navigator(FixedLayout::standard());
        nav.toggle_menu();
        assert!(nav.state().menu_open);

        nav.navigate_to(SectionId::Contact);
        assert!(!nav.state().menu_open);
        assert_eq!(*nav.host().scrolled_to.borrow(), vec![SectionId::Contact]);

        nav.navigate_to(SectionId::Contact);
        assert!(!nav.state().menu_open);
    }

    #[test]
    fn navigate_to_missing_section_still_closes_menu() {
        let mut nav = navigator(FixedLayout::new(Vec::new()));
        nav.toggle_menu();
        nav.navigate_to(SectionId::Services);
        assert!(!nav.state().menu_open);
        assert!(nav.host().scrolled_to.borrow().is_empty());
    }

    #[test]
    fn navigate_to_does_not_change_active_section() {
        let mut nav = navigator(FixedLayout::standard());
        nav.navigate_to(SectionId::Services);
        assert_eq!(nav.state().active_section, SectionId::Home);
    }

    #[test]
    fn double_toggle_restores_menu() {
        let mut nav = navigator(FixedLayout::standard());
        let before = nav.state().menu_open;
        nav.toggle_menu();
        assert_ne!(nav.state().menu_open, before);
        nav.toggle_menu();
        assert_eq!(nav.state().menu_open, before);
    }

    #[test]
    fn subscribers_hear_only_real_changes() {
        let mut nav = navigator(FixedLayout::standard());
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = Rc::clone(&seen);
            nav.subscribe(move |state| seen.borrow_mut().push(*state));
        }

        scroll(&mut nav, 0.0);
        nav.navigate_to(SectionId::Home);
        assert!(seen.borrow().is_empty());

        scroll(&mut nav, 900.0);
        nav.toggle_menu();
        assert_eq!(
            *seen.borrow(),
            vec![
                NavigationState {
                    active_section: SectionId::About,
                    menu_open: false,
                },
                NavigationState {
                    active_section: SectionId::About,
                    menu_open: true,
                },
            ]
        );
    }

    #[test]
    fn standard_layout_is_exclusive_and_covering() {
        assert_eq!(validate_layout(&standard_sections(), None), Ok(()));
        assert_eq!(validate_layout(&standard_sections(), Some(3400.0)), Ok(()));
        assert_eq!(validate_layout(&[], Some(3400.0)), Ok(()));
    }

    #[test]
    fn layout_must_start_at_the_page_top() {
        let shifted = [
            SectionBounds::new(SectionId::Home, 500.0, 800.0),
            SectionBounds::new(SectionId::About, 1300.0, 800.0),
        ];
        // Nothing contains the lookahead offset at the top of the page.
        let spy = ScrollSpy::new(100.0, ScanOrder::LastMatchWins);
        assert_eq!(
            spy.locate(0.0, |id| shifted.iter().copied().find(|s| s.id == id)),
            None
        );
        assert_eq!(
            validate_layout(&shifted, None),
            Err(LayoutError::LeadingGap {
                first: SectionId::Home,
                size: 500.0,
            })
        );
    }

    #[test]
    fn layout_must_reach_the_document_end() {
        assert_eq!(
            validate_layout(&standard_sections(), Some(3900.0)),
            Err(LayoutError::TrailingGap {
                last: SectionId::Contact,
                size: 500.0,
            })
        );
    }

    #[test]
    fn layout_reports_gaps_and_overlaps() {
        let gap = [
            SectionBounds::new(SectionId::Home, 0.0, 700.0),
            SectionBounds::new(SectionId::About, 800.0, 800.0),
        ];
        assert_eq!(
            validate_layout(&gap, None),
            Err(LayoutError::Gap {
                after: SectionId::Home,
                before: SectionId::About,
                size: 100.0,
            })
        );

        let overlap = [
            SectionBounds::new(SectionId::Home, 0.0, 1100.0),
            SectionBounds::new(SectionId::About, 1000.0, 800.0),
        ];
        assert_eq!(
            validate_layout(&overlap, None),
            Err(LayoutError::Overlap {
                first: SectionId::Home,
                second: SectionId::About,
            })
        );

        let collapsed = [SectionBounds::new(SectionId::Contact, 2600.0, 0.0)];
        assert_eq!(
            validate_layout(&collapsed, None),
            Err(LayoutError::Collapsed(SectionId::Contact))
        );
    }

    #[test]
    fn link_fragments_name_sections() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::from_fragment(&format!("#{id}")), Ok(id));
            assert_eq!(SectionId::from_fragment(id.as_str()), Ok(id));
        }
        assert_eq!(
            SectionId::from_fragment("#pricing"),
            Err(UnknownSection("pricing".to_string()))
        );
        assert_eq!(
            SectionId::from_fragment("#"),
            Err(UnknownSection(String::new()))
        );
    }
}
