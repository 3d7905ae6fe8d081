#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalName {
    Services,
    Projects,
    Contact,
}

impl ModalName {
    pub fn id(self) -> &'static str {
        match self {
            ModalName::Services => "servicesModal",
            ModalName::Projects => "projectsModal",
            ModalName::Contact => "contactModal",
        }
    }
}

impl fmt::Display for ModalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModalName::Services => "services",
            ModalName::Projects => "projects",
            ModalName::Contact => "contact",
        };
        f.write_str(name)
    }
}

/// Open/closed flag per modal. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalSet {
    open: Option<ModalName>,
}

impl ModalSet {
    pub fn open(&mut self, name: ModalName) {
        // Opening replaces whatever was showing.
        self.open = Some(name);
    }

    pub fn close(&mut self, name: ModalName) {
        if self.open == Some(name) {
            self.open = None;
        }
    }

    /// Closes every open modal, returning what was closed.
    pub fn close_all(&mut self) -> Option<ModalName> {
        self.open.take()
    }

    pub fn is_open(&self, name: ModalName) -> bool {
        self.open == Some(name)
    }

    pub fn any_open(&self) -> bool {
        self.open.is_some()
    }
}
