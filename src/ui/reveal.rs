#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::BTreeSet;
use std::rc::Rc;

use yew::Reducible;

/// Share of a card that must be on screen before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.2;
/// Cards start revealing 50px above the bottom edge of the viewport.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
/// Attribute carrying a card's index for the observer callback.
pub const CARD_INDEX_ATTR: &str = "data-card";

const FLOAT_STAGGER_SECS: f64 = 0.5;

/// Cards that have scrolled into view at least once. Never shrinks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealedCards(BTreeSet<usize>);

impl RevealedCards {
    pub fn is_revealed(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    pub fn reveal(&mut self, index: usize) -> bool {
        self.0.insert(index)
    }
}

impl Reducible for RevealedCards {
    type Action = usize;

    fn reduce(self: Rc<Self>, index: usize) -> Rc<Self> {
        if self.is_revealed(index) {
            return self;
        }
        let mut next = (*self).clone();
        next.reveal(index);
        Rc::new(next)
    }
}

/// Parses the card index written into `data-card`.
pub fn card_index(attr: Option<String>) -> Option<usize> {
    attr?.trim().parse().ok()
}

/// CSS `animation-delay` for the n-th floating icon.
pub fn float_delay(index: usize) -> String {
    format!("{}s", index as f64 * FLOAT_STAGGER_SECS)
}
