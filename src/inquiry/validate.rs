#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use once_cell::sync::Lazy;
use regex::Regex;

use super::model::{Category, Field, InquiryRequest, ValidInquiry};
use crate::config::Limits;
use crate::error::{InquiryError, ValidationErrors};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Truncates typed input to at most `max` characters.
pub fn clamp_message(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => text[..cut].to_string(),
        None => text.to_string(),
    }
}

/// Checks every field and collects one error per offending field.
pub fn validate(request: &InquiryRequest, limits: &Limits) -> Result<ValidInquiry, ValidationErrors> {
    let mut errors = Vec::new();

    let name = request.name.trim();
    if name.is_empty() {
        errors.push(InquiryError::MissingField(Field::Name));
    }

    let email = request.email.trim();
    if email.is_empty() {
        errors.push(InquiryError::MissingField(Field::Email));
    } else if !is_valid_email(email) {
        errors.push(InquiryError::InvalidEmail);
    }

    // Anything outside the closed list counts as nothing selected.
    let category = Category::from_value(request.category.trim());
    if category.is_none() {
        errors.push(InquiryError::MissingField(Field::Category));
    }

    let message = request.message.trim();
    let len = message.chars().count();
    if message.is_empty() {
        errors.push(InquiryError::MissingField(Field::Message));
    } else if len < limits.min_message {
        errors.push(InquiryError::MessageTooShort {
            len,
            min: limits.min_message,
        });
    }

    match category {
        Some(category) if errors.is_empty() => Ok(ValidInquiry {
            name: name.to_string(),
            email: email.to_string(),
            category,
            message: message.to_string(),
        }),
        _ => Err(ValidationErrors(errors)),
    }
}
