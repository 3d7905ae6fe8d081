use std::fmt;

use thiserror::Error;

use crate::inquiry::model::Field;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InquiryError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Message must be at least {min} characters (currently {len})")]
    MessageTooShort { len: usize, min: usize },
    #[error("Could not open the messaging app: {0}")]
    LinkOpenFailure(String),
}

impl InquiryError {
    /// The form field this error should be shown next to, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            InquiryError::MissingField(field) => Some(*field),
            InquiryError::InvalidEmail => Some(Field::Email),
            InquiryError::MessageTooShort { .. } => Some(Field::Message),
            InquiryError::LinkOpenFailure(_) => None,
        }
    }
}

/// Every failure found in a single validation pass, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(pub Vec<InquiryError>);

impl ValidationErrors {
    pub fn for_field(&self, field: Field) -> Option<&InquiryError> {
        self.0.iter().find(|e| e.field() == Some(field))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown site preset: {0}")]
    UnknownPreset(String),
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site config has no sections")]
    NoSections,
}

/// Why a contact form submission did not reach the messaging app.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(ValidationErrors),
    #[error(transparent)]
    Dispatch(InquiryError),
}
