use std::collections::BTreeSet;
use std::rc::Rc;

use log::debug;
use yew::functional::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Problem,
    HowItWorks,
    Features,
    Benefits,
    Simulation,
    Testimonials,
    Pricing,
    Faq,
    FinalCta,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::Problem,
        Section::HowItWorks,
        Section::Features,
        Section::Benefits,
        Section::Simulation,
        Section::Testimonials,
        Section::Pricing,
        Section::Faq,
        Section::FinalCta,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Problem => "problem",
            Section::HowItWorks => "how-it-works",
            Section::Features => "features",
            Section::Benefits => "benefits",
            Section::Simulation => "simulation",
            Section::Testimonials => "testimonials",
            Section::Pricing => "pricing",
            Section::Faq => "faq",
            Section::FinalCta => "final-cta",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.id() == id)
    }
}

/// Sections that have scrolled into view at least once. Only ever grows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisibleSections {
    seen: BTreeSet<Section>,
}

impl VisibleSections {
    /// Returns true if the section was not visible before.
    pub fn reveal(&mut self, section: Section) -> bool {
        self.seen.insert(section)
    }

    pub fn reveal_id(&mut self, id: &str) -> bool {
        match Section::from_id(id) {
            Some(section) => self.reveal(section),
            None => false,
        }
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.seen.contains(&section)
    }

    /// `scroll-reveal` plus `visible` once the section has been seen.
    pub fn class_for(&self, section: Section) -> &'static str {
        if self.is_visible(section) {
            "scroll-reveal visible"
        } else {
            "scroll-reveal"
        }
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

pub enum RevealAction {
    Reveal(String),
}

impl Reducible for VisibleSections {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let RevealAction::Reveal(id) = action;
        match Section::from_id(&id) {
            Some(section) if !self.is_visible(section) => {
                debug!("Section revealed: {}", id);
                let mut next = (*self).clone();
                next.reveal(section);
                Rc::new(next)
            }
            _ => self,
        }
    }
}

/// Accordion state: at most one answer is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaqState {
    active: Option<usize>,
}

impl FaqState {
    pub fn toggle(&mut self, index: usize) {
        self.active = if self.active == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }
}

/// Count-up animation for one statistic.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    value: u64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, steps: u32) -> Self {
        Self {
            target,
            increment: target as f64 / steps.max(1) as f64,
            current: 0.0,
            value: 0,
            done: false,
        }
    }

    /// Advances one step and returns the value to display.
    pub fn tick(&mut self) -> u64 {
        if self.done {
            return self.value;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.value = self.target;
            self.done = true;
        } else {
            self.value = (self.current.floor() as u64).min(self.target);
        }
        self.value
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("hero"), None);
    }

    #[test]
    fn visibility_only_grows() {
        let mut visible = VisibleSections::default();
        assert!(visible.reveal_id("faq"));
        assert!(!visible.reveal_id("faq"));
        assert!(!visible.reveal_id("unknown"));
        assert!(visible.reveal(Section::Pricing));
        assert_eq!(visible.len(), 2);
        assert!(visible.is_visible(Section::Faq));
        assert!(!visible.is_visible(Section::Problem));
        assert_eq!(visible.class_for(Section::Faq), "scroll-reveal visible");
        assert_eq!(visible.class_for(Section::Problem), "scroll-reveal");
    }

    #[test]
    fn reveal_order_does_not_matter() {
        let mut a = VisibleSections::default();
        let mut b = VisibleSections::default();
        for id in ["features", "problem", "features", "simulation"] {
            a.reveal_id(id);
        }
        for id in ["simulation", "features", "problem"] {
            b.reveal_id(id);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn reducer_keeps_same_state_for_repeat_reveals() {
        let state = Rc::new(VisibleSections::default());
        let state = state.reduce(RevealAction::Reveal("benefits".into()));
        assert!(state.is_visible(Section::Benefits));
        let again = state.clone().reduce(RevealAction::Reveal("benefits".into()));
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn faq_keeps_at_most_one_open() {
        let mut faq = FaqState::default();
        assert_eq!(faq.active(), None);
        faq.toggle(1);
        assert!(faq.is_open(1));
        faq.toggle(3);
        assert!(faq.is_open(3));
        assert!(!faq.is_open(1));
        faq.toggle(3);
        assert_eq!(faq.active(), None);
    }

    #[test]
    fn counter_reaches_target_exactly() {
        let mut counter = CounterAnimation::new(147, 100);
        let mut ticks = 0;
        let mut last = 0;
        while !counter.is_done() {
            let value = counter.tick();
            assert!(value >= last);
            assert!(value <= 147);
            last = value;
            ticks += 1;
        }
        assert_eq!(counter.value(), 147);
        assert!(ticks >= 100 && ticks <= 101);
        assert_eq!(counter.tick(), 147);
    }

    #[test]
    fn counter_floors_intermediate_values() {
        let mut counter = CounterAnimation::new(2_400_000, 100);
        assert_eq!(counter.tick(), 24_000);
        assert_eq!(counter.tick(), 48_000);
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut counter = CounterAnimation::new(0, 100);
        assert_eq!(counter.tick(), 0);
        assert!(counter.is_done());
    }

    #[test]
    fn navbar_threshold() {
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(50.5, 50.0));
    }
}
