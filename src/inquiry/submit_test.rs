use std::cell::RefCell;

use chrono::NaiveDate;

use super::*;
use crate::error::InquiryError;
use crate::inquiry::dispatch::TabOpen;
use crate::inquiry::model::Field;

const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)";

/// Remembers every URL handed to the browser.
#[derive(Default)]
struct RecordingOpener {
    blocked: bool,
    fail_with: Option<String>,
    calls: RefCell<Vec<(&'static str, String)>>,
}

impl LinkOpener for RecordingOpener {
    fn open_new_tab(&self, url: &str) -> Result<TabOpen, String> {
        self.calls.borrow_mut().push(("new_tab", url.to_string()));
        if let Some(e) = &self.fail_with {
            return Err(e.clone());
        }
        Ok(if self.blocked { TabOpen::Blocked } else { TabOpen::Opened })
    }

    fn navigate(&self, url: &str) -> Result<(), String> {
        self.calls.borrow_mut().push(("navigate", url.to_string()));
        Ok(())
    }
}

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 9)
        .unwrap()
        .and_hms_opt(14, 5, 30)
        .unwrap()
}

fn request() -> InquiryRequest {
    InquiryRequest {
        name: "Jane".to_string(),
        email: "jane@x.com".to_string(),
        category: "design".to_string(),
        message: "Need a new logo & site #1".to_string(),
    }
}

fn decoded_text(url: &str) -> String {
    let query = url.split_once("?text=").unwrap().1;
    urlencoding::decode(query).unwrap().into_owned()
}

// =============================================================
// Rejected submissions
// =============================================================

#[test]
fn invalid_request_never_reaches_the_browser() {
    let config = SiteConfig::preset("horizontal").unwrap();
    let opener = RecordingOpener::default();
    let mut req = request();
    req.email = "jane@x".to_string();
    req.message = "short".to_string();

    let err = submit(&req, &config, now(), &opener, "").unwrap_err();

    match err {
        SubmitError::Invalid(found) => {
            assert_eq!(found.for_field(Field::Email), Some(&InquiryError::InvalidEmail));
            assert!(found.for_field(Field::Message).is_some());
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
    assert!(opener.calls.borrow().is_empty());
}

#[test]
fn empty_form_on_mobile_does_not_navigate() {
    let config = SiteConfig::preset("modal").unwrap();
    let opener = RecordingOpener::default();
    let err = submit(&InquiryRequest::default(), &config, now(), &opener, IPHONE).unwrap_err();
    assert!(matches!(err, SubmitError::Invalid(_)));
    assert!(opener.calls.borrow().is_empty());
}

// =============================================================
// Dispatched submissions
// =============================================================

#[test]
fn valid_request_opens_one_link_with_the_formatted_message() {
    let config = SiteConfig::preset("horizontal").unwrap();
    let opener = RecordingOpener::default();

    let outcome = submit(&request(), &config, now(), &opener, "").unwrap();
    assert_eq!(outcome, DispatchOutcome::OpenedNewTab);

    let calls = opener.calls.borrow();
    assert_eq!(calls.len(), 1);
    let (kind, url) = &calls[0];
    assert_eq!(*kind, "new_tab");
    assert!(url.starts_with("https://wa.me/254117702463?text="), "{}", url);

    let valid = validate(&request(), &config.limits).unwrap();
    let expected = format_message(&valid, now(), config.template, &config.site_name);
    assert_eq!(decoded_text(url), expected);
}

#[test]
fn mobile_agent_navigates_in_place_under_auto_policy() {
    let config = SiteConfig::preset("modal").unwrap();
    let opener = RecordingOpener::default();

    let outcome = submit(&request(), &config, now(), &opener, IPHONE).unwrap();

    assert_eq!(outcome, DispatchOutcome::NavigatedSameTab);
    let calls = opener.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "navigate");
    assert!(decoded_text(&calls[0].1).starts_with("New Contact Form Submission\n"));
}

#[test]
fn blocked_tab_falls_back_with_the_same_link() {
    let config = SiteConfig::preset("horizontal").unwrap();
    let opener = RecordingOpener {
        blocked: true,
        ..Default::default()
    };

    let outcome = submit(&request(), &config, now(), &opener, "").unwrap();

    assert_eq!(outcome, DispatchOutcome::FellBackToSameTab);
    let calls = opener.calls.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].1, calls[1].1);
}

#[test]
fn open_failure_is_reported_as_dispatch_error() {
    let config = SiteConfig::preset("horizontal").unwrap();
    let opener = RecordingOpener {
        fail_with: Some("SecurityError".to_string()),
        ..Default::default()
    };

    let err = submit(&request(), &config, now(), &opener, "").unwrap_err();

    assert_eq!(
        err,
        SubmitError::Dispatch(InquiryError::LinkOpenFailure("SecurityError".to_string()))
    );
    assert_eq!(
        err.to_string(),
        "Could not open the messaging app: SecurityError"
    );
}
