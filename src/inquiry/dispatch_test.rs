use std::cell::RefCell;

use super::*;

/// Records what dispatch asked the browser to do.
#[derive(Default)]
struct FakeOpener {
    new_tab: Option<Result<TabOpen, String>>,
    navigate_error: Option<String>,
    calls: RefCell<Vec<String>>,
}

impl LinkOpener for FakeOpener {
    fn open_new_tab(&self, url: &str) -> Result<TabOpen, String> {
        self.calls.borrow_mut().push(format!("new_tab {}", url));
        self.new_tab.clone().unwrap_or(Ok(TabOpen::Opened))
    }

    fn navigate(&self, url: &str) -> Result<(), String> {
        self.calls.borrow_mut().push(format!("navigate {}", url));
        match &self.navigate_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

// =============================================================
// Link building
// =============================================================

#[test]
fn link_shape() {
    assert_eq!(
        build_link("wa.me", "254117702463", "hi there"),
        "https://wa.me/254117702463?text=hi%20there"
    );
}

#[test]
fn reserved_characters_round_trip() {
    let text = "Tom & Jerry #1\n100% done? a=b+c/d";
    let link = build_link("wa.me", "254117702463", text);
    let query = link.split_once("?text=").unwrap().1;
    assert!(!query.contains('&'));
    assert!(!query.contains('#'));
    assert!(!query.contains('\n'));
    assert!(!query.contains(' '));
    assert_eq!(urlencoding::decode(query).unwrap(), text);
}

#[test]
fn unicode_round_trips() {
    let text = "Habari 👋 karibu, señor";
    let link = build_link("wa.me", "1", text);
    let query = link.split_once("?text=").unwrap().1;
    assert_eq!(urlencoding::decode(query).unwrap(), text);
}

// =============================================================
// Strategy
// =============================================================

#[test]
fn mobile_agents_use_same_tab() {
    let agents = [
        "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36",
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)",
        "Mozilla/5.0 (iPad; CPU OS 16_0 like Mac OS X)",
        "Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)",
    ];
    for ua in agents {
        assert_eq!(NavigationStrategy::for_user_agent(ua), NavigationStrategy::SameTab, "{}", ua);
    }
}

#[test]
fn desktop_agents_use_new_tab() {
    let ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/120.0";
    assert_eq!(NavigationStrategy::for_user_agent(ua), NavigationStrategy::NewTab);
    assert_eq!(NavigationStrategy::for_user_agent(""), NavigationStrategy::NewTab);
}

#[test]
fn policy_overrides_sniffing() {
    let iphone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)";
    assert_eq!(DispatchPolicy::Auto.strategy(iphone), NavigationStrategy::SameTab);
    assert_eq!(DispatchPolicy::AlwaysNewTab.strategy(iphone), NavigationStrategy::NewTab);
    assert_eq!(DispatchPolicy::AlwaysSameTab.strategy(""), NavigationStrategy::SameTab);
}

// =============================================================
// Dispatch
// =============================================================

#[test]
fn new_tab_opens_once() {
    let opener = FakeOpener::default();
    let outcome = dispatch(&opener, "https://wa.me/1?text=x", NavigationStrategy::NewTab).unwrap();
    assert_eq!(outcome, DispatchOutcome::OpenedNewTab);
    assert_eq!(*opener.calls.borrow(), vec!["new_tab https://wa.me/1?text=x"]);
}

#[test]
fn blocked_popup_falls_back_to_same_tab() {
    let opener = FakeOpener {
        new_tab: Some(Ok(TabOpen::Blocked)),
        ..Default::default()
    };
    let outcome = dispatch(&opener, "u", NavigationStrategy::NewTab).unwrap();
    assert_eq!(outcome, DispatchOutcome::FellBackToSameTab);
    assert_eq!(*opener.calls.borrow(), vec!["new_tab u", "navigate u"]);
}

#[test]
fn same_tab_never_opens_a_window() {
    let opener = FakeOpener::default();
    let outcome = dispatch(&opener, "u", NavigationStrategy::SameTab).unwrap();
    assert_eq!(outcome, DispatchOutcome::NavigatedSameTab);
    assert_eq!(*opener.calls.borrow(), vec!["navigate u"]);
}

#[test]
fn open_error_is_link_open_failure_without_retry() {
    let opener = FakeOpener {
        new_tab: Some(Err("SecurityError".to_string())),
        ..Default::default()
    };
    let err = dispatch(&opener, "u", NavigationStrategy::NewTab).unwrap_err();
    assert_eq!(err, InquiryError::LinkOpenFailure("SecurityError".to_string()));
    assert_eq!(opener.calls.borrow().len(), 1);
}

#[test]
fn fallback_navigation_error_is_reported() {
    let opener = FakeOpener {
        new_tab: Some(Ok(TabOpen::Blocked)),
        navigate_error: Some("blocked".to_string()),
        ..Default::default()
    };
    let err = dispatch(&opener, "u", NavigationStrategy::NewTab).unwrap_err();
    assert!(matches!(err, InquiryError::LinkOpenFailure(_)));
}
