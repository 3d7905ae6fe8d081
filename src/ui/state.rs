#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::rc::Rc;

use yew::Reducible;

use super::modal::{ModalName, ModalSet};
use super::scroll_spy::{self, Direction, SectionBounds};

/// A programmatic scroll the page adapter still has to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollRequest {
    pub section: String,
    /// Bumped per request so repeated clicks on one entry still scroll.
    pub seq: u64,
}

#[derive(Debug, Clone)]
pub enum UiAction {
    ScrolledVertical {
        sections: Vec<SectionBounds>,
        offset: f64,
        header_offset: f64,
    },
    ScrolledHorizontal {
        scroll_left: f64,
        viewport_width: f64,
    },
    NavSelected(String),
    Step(Direction),
    ScrollSettled,
    ToggleMenu,
    CloseMenu,
    OpenModal(ModalName),
    CloseModal(ModalName),
    Escape,
}

/// Everything the page tracks between events.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub sections: Vec<String>,
    pub active_section: Option<String>,
    pub menu_open: bool,
    pub modals: ModalSet,
    pub scroll_locked: bool,
    pub scroll_request: Option<ScrollRequest>,
}

impl UiState {
    pub fn new(sections: Vec<String>) -> Self {
        let active_section = sections.first().cloned();
        Self {
            sections,
            active_section,
            menu_open: false,
            modals: ModalSet::default(),
            scroll_locked: false,
            scroll_request: None,
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_section.as_deref() == Some(id)
    }

    /// Background scrolling is suppressed while an overlay is up.
    pub fn body_scroll_locked(&self) -> bool {
        self.menu_open || self.modals.any_open()
    }

    pub fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::ScrolledVertical {
                sections,
                offset,
                header_offset,
            } => {
                if self.scroll_locked {
                    return;
                }
                self.active_section =
                    scroll_spy::active_section(&sections, offset, header_offset).map(str::to_string);
            }
            UiAction::ScrolledHorizontal {
                scroll_left,
                viewport_width,
            } => {
                if self.scroll_locked {
                    return;
                }
                if let Some(id) = scroll_spy::section_at_index(&self.sections, scroll_left, viewport_width) {
                    self.active_section = Some(id.to_string());
                }
            }
            UiAction::NavSelected(id) => {
                self.menu_open = false;
                self.select(id);
            }
            UiAction::Step(direction) => {
                if self.scroll_locked {
                    return;
                }
                let target = self
                    .active_section
                    .as_deref()
                    .and_then(|current| scroll_spy::neighbor(&self.sections, current, direction))
                    .map(str::to_string);
                if let Some(id) = target {
                    self.select(id);
                }
            }
            UiAction::ScrollSettled => {
                self.scroll_locked = false;
            }
            UiAction::ToggleMenu => {
                self.menu_open = !self.menu_open;
                if self.menu_open {
                    self.modals.close_all();
                }
            }
            UiAction::CloseMenu => {
                self.menu_open = false;
            }
            UiAction::OpenModal(name) => {
                self.menu_open = false;
                self.modals.open(name);
            }
            UiAction::CloseModal(name) => {
                self.modals.close(name);
            }
            UiAction::Escape => {
                self.menu_open = false;
                self.modals.close_all();
            }
        }
    }

    fn select(&mut self, id: String) {
        if !self.sections.contains(&id) {
            return;
        }
        let seq = self.scroll_request.as_ref().map_or(0, |r| r.seq + 1);
        self.active_section = Some(id.clone());
        self.scroll_locked = true;
        self.scroll_request = Some(ScrollRequest { section: id, seq });
    }
}

impl Reducible for UiState {
    type Action = UiAction;

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
