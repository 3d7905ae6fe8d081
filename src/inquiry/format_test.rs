use chrono::NaiveDate;

use super::*;
use crate::config::Limits;
use crate::inquiry::model::InquiryRequest;
use crate::inquiry::validate::validate;

fn jane() -> ValidInquiry {
    let request = InquiryRequest {
        name: "Jane".to_string(),
        email: "jane@x.com".to_string(),
        category: "web-development".to_string(),
        message: "Need a new site please".to_string(),
    };
    validate(&request, &Limits::default()).unwrap()
}

fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 9)
        .unwrap()
        .and_hms_opt(14, 5, 30)
        .unwrap()
}

#[test]
fn markdown_template_layout() {
    let text = format_message(&jane(), timestamp(), MessageTemplate::Markdown, "Portfolio");
    let expected = "*New Contact Form Submission*\n\
                    \n\
                    *Date:* 09/03/2024, 14:05:30\n\
                    *Name:* Jane\n\
                    *Email:* jane@x.com\n\
                    *Project type:* Web Development\n\
                    *Message:* Need a new site please\n\
                    \n\
                    _Sent from the Portfolio website_";
    assert_eq!(text, expected);
}

#[test]
fn plain_template_has_no_markers() {
    let text = format_message(&jane(), timestamp(), MessageTemplate::Plain, "Portfolio");
    assert!(text.starts_with("New Contact Form Submission\n"));
    assert!(text.contains("Name: Jane"));
    assert!(text.contains("Email: jane@x.com"));
    assert!(text.contains("Project type: Web Development"));
    assert!(text.contains("Message: Need a new site please"));
    assert!(text.ends_with("Sent from the Portfolio website"));
    assert!(!text.contains('*'));
}

#[test]
fn same_input_same_output() {
    let first = format_message(&jane(), timestamp(), MessageTemplate::Markdown, "Portfolio");
    let second = format_message(&jane(), timestamp(), MessageTemplate::Markdown, "Portfolio");
    assert_eq!(first, second);
}

#[test]
fn values_are_not_escaped() {
    let request = InquiryRequest {
        name: "<b>Jane & co</b>".to_string(),
        email: "jane@x.com".to_string(),
        category: "other".to_string(),
        message: "100% sure #1 choice".to_string(),
    };
    let valid = validate(&request, &Limits::default()).unwrap();
    let text = format_message(&valid, timestamp(), MessageTemplate::Plain, "Portfolio");
    assert!(text.contains("Name: <b>Jane & co</b>"));
    assert!(text.contains("Message: 100% sure #1 choice"));
}
