#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use log::{info, warn};
use serde::Deserialize;

use crate::error::InquiryError;

const MOBILE_AGENTS: &[&str] = &[
    "Android",
    "webOS",
    "iPhone",
    "iPad",
    "iPod",
    "BlackBerry",
    "IEMobile",
    "Opera Mini",
];

/// `https://<host>/<recipient>?text=<encoded>`
pub fn build_link(host: &str, recipient: &str, text: &str) -> String {
    format!(
        "https://{}/{}?text={}",
        host,
        recipient,
        urlencoding::encode(text)
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationStrategy {
    /// Replace the current page; the messaging app intercepts the link.
    SameTab,
    NewTab,
}

impl NavigationStrategy {
    pub fn for_user_agent(user_agent: &str) -> Self {
        if MOBILE_AGENTS.iter().any(|agent| user_agent.contains(agent)) {
            NavigationStrategy::SameTab
        } else {
            NavigationStrategy::NewTab
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DispatchPolicy {
    Auto,
    AlwaysNewTab,
    AlwaysSameTab,
}

impl DispatchPolicy {
    pub fn strategy(self, user_agent: &str) -> NavigationStrategy {
        match self {
            DispatchPolicy::Auto => NavigationStrategy::for_user_agent(user_agent),
            DispatchPolicy::AlwaysNewTab => NavigationStrategy::NewTab,
            DispatchPolicy::AlwaysSameTab => NavigationStrategy::SameTab,
        }
    }
}

/// Result of asking the browser for a new tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabOpen {
    Opened,
    /// No window came back, or it closed immediately.
    Blocked,
}

/// The browser operations dispatch needs. Errors carry the browser's message.
pub trait LinkOpener {
    fn open_new_tab(&self, url: &str) -> Result<TabOpen, String>;
    fn navigate(&self, url: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    OpenedNewTab,
    NavigatedSameTab,
    FellBackToSameTab,
}

pub fn dispatch<O: LinkOpener + ?Sized>(
    opener: &O,
    url: &str,
    strategy: NavigationStrategy,
) -> Result<DispatchOutcome, InquiryError> {
    match strategy {
        NavigationStrategy::SameTab => {
            opener.navigate(url).map_err(InquiryError::LinkOpenFailure)?;
            info!("Navigating current tab to messaging link");
            Ok(DispatchOutcome::NavigatedSameTab)
        }
        NavigationStrategy::NewTab => match opener.open_new_tab(url) {
            Ok(TabOpen::Opened) => {
                info!("Opened messaging link in a new tab");
                Ok(DispatchOutcome::OpenedNewTab)
            }
            Ok(TabOpen::Blocked) => {
                warn!("New tab was blocked, falling back to same-tab navigation");
                opener.navigate(url).map_err(InquiryError::LinkOpenFailure)?;
                Ok(DispatchOutcome::FellBackToSameTab)
            }
            Err(e) => Err(InquiryError::LinkOpenFailure(e)),
        },
    }
}
