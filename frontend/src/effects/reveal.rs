use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::RevealOptions;
use crate::error::BindError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
}

pub const HIDDEN: CardStyle = CardStyle {
    opacity: "0",
    transform: "translateY(20px)",
};

pub const VISIBLE: CardStyle = CardStyle {
    opacity: "1",
    transform: "translateY(0)",
};

pub const TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

/// Per-card visibility. Cards only ever move from hidden to visible.
#[derive(Debug)]
pub struct RevealTracker {
    states: Vec<Visibility>,
}

impl RevealTracker {
    pub fn new(cards: usize) -> Self {
        Self {
            states: vec![Visibility::Hidden; cards],
        }
    }

    /// Records an intersection report. Returns true only for the report that
    /// reveals the card.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        let Some(state) = self.states.get_mut(index) else {
            return false;
        };

        if intersecting && *state == Visibility::Hidden {
            *state = Visibility::Visible;
            true
        } else {
            false
        }
    }

    pub fn visible_count(&self) -> usize {
        self.states
            .iter()
            .filter(|state| **state == Visibility::Visible)
            .count()
    }
}

/// Keeps the observer and its callback alive.
pub struct RevealAnimator {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealAnimator {
    pub fn install(cards: &[HtmlElement], options: &RevealOptions) -> Result<Self, BindError> {
        let observed = cards.to_vec();
        let mut tracker = RevealTracker::new(observed.len());

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for value in entries.iter() {
                    let entry: IntersectionObserverEntry = value.unchecked_into();
                    let target = entry.target();
                    let Some(index) = observed.iter().position(|card| {
                        let card: &Element = card;
                        card == &target
                    }) else {
                        continue;
                    };

                    if tracker.observe(index, entry.is_intersecting()) {
                        apply(&observed[index], VISIBLE);
                        observer.unobserve(&target);
                        debug!(
                            "Revealed card {index} ({} of {} visible)",
                            tracker.visible_count(),
                            observed.len()
                        );
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|_| BindError::Observer)?;

        for card in cards {
            apply(card, HIDDEN);
            if card.style().set_property("transition", TRANSITION).is_err() {
                warn!("Failed to set card transition");
            }
            observer.observe(card);
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealAnimator {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn apply(card: &HtmlElement, style: CardStyle) {
    let declaration = card.style();
    if declaration.set_property("opacity", style.opacity).is_err()
        || declaration.set_property("transform", style.transform).is_err()
    {
        warn!("Failed to update card style");
    }
}

#[cfg(test)]
mod tests {
    use super::{RevealTracker, Visibility};

    fn state(tracker: &RevealTracker, index: usize) -> Option<Visibility> {
        tracker.states.get(index).copied()
    }

    #[test]
    fn cards_start_hidden() {
        let tracker = RevealTracker::new(3);
        assert_eq!(state(&tracker, 0), Some(Visibility::Hidden));
        assert_eq!(tracker.visible_count(), 0);
    }

    #[test]
    fn first_entry_reveals_once() {
        let mut tracker = RevealTracker::new(2);
        assert!(tracker.observe(1, true));
        assert!(!tracker.observe(1, true));
        assert_eq!(state(&tracker, 1), Some(Visibility::Visible));
        assert_eq!(tracker.visible_count(), 1);
    }

    #[test]
    fn leaving_the_viewport_does_not_hide() {
        let mut tracker = RevealTracker::new(1);
        assert!(tracker.observe(0, true));
        assert!(!tracker.observe(0, false));
        assert_eq!(state(&tracker, 0), Some(Visibility::Visible));
    }

    #[test]
    fn non_intersecting_report_keeps_card_hidden() {
        let mut tracker = RevealTracker::new(1);
        assert!(!tracker.observe(0, false));
        assert_eq!(state(&tracker, 0), Some(Visibility::Hidden));
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut tracker = RevealTracker::new(1);
        assert!(!tracker.observe(5, true));
        assert_eq!(state(&tracker, 5), None);
    }
}
