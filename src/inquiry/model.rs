use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Category,
    Message,
}

impl Field {
    /// Element id of the matching form control.
    pub fn input_id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Category => "subject",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Category => "Project type",
            Field::Message => "Message",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    WebDevelopment,
    MobileApp,
    Design,
    Consulting,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::WebDevelopment,
        Category::MobileApp,
        Category::Design,
        Category::Consulting,
        Category::Other,
    ];

    /// Value carried by the `<option>` element.
    pub fn value(self) -> &'static str {
        match self {
            Category::WebDevelopment => "web-development",
            Category::MobileApp => "mobile-app",
            Category::Design => "design",
            Category::Consulting => "consulting",
            Category::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::WebDevelopment => "Web Development",
            Category::MobileApp => "Mobile App",
            Category::Design => "UI/UX Design",
            Category::Consulting => "Consulting",
            Category::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.value() == value)
    }
}

/// Raw form contents as typed by the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InquiryRequest {
    pub name: String,
    pub email: String,
    pub category: String,
    pub message: String,
}

impl InquiryRequest {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Category => self.category = value,
            Field::Message => self.message = value,
        }
    }
}

/// An inquiry that passed validation. Only `validate` builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidInquiry {
    pub(super) name: String,
    pub(super) email: String,
    pub(super) category: Category,
    pub(super) message: String,
}

impl ValidInquiry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
