#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::NaiveDateTime;
use serde::Deserialize;

use super::model::ValidInquiry;

const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageTemplate {
    /// WhatsApp bold/italic markers.
    Markdown,
    Plain,
}

impl MessageTemplate {
    fn banner(self) -> &'static str {
        match self {
            MessageTemplate::Markdown => "*New Contact Form Submission*",
            MessageTemplate::Plain => "New Contact Form Submission",
        }
    }

    fn line(self, label: &str, value: &str) -> String {
        match self {
            MessageTemplate::Markdown => format!("*{}:* {}", label, value),
            MessageTemplate::Plain => format!("{}: {}", label, value),
        }
    }

    fn attribution(self, site_name: &str) -> String {
        match self {
            MessageTemplate::Markdown => format!("_Sent from the {} website_", site_name),
            MessageTemplate::Plain => format!("Sent from the {} website", site_name),
        }
    }
}

/// Renders the chat message for a validated inquiry. Values go in as typed;
/// the link builder is responsible for percent-encoding.
pub fn format_message(
    inquiry: &ValidInquiry,
    timestamp: NaiveDateTime,
    template: MessageTemplate,
    site_name: &str,
) -> String {
    let lines = [
        template.banner().to_string(),
        String::new(),
        template.line("Date", &timestamp.format(TIMESTAMP_FORMAT).to_string()),
        template.line("Name", inquiry.name()),
        template.line("Email", inquiry.email()),
        template.line("Project type", inquiry.category().label()),
        template.line("Message", inquiry.message()),
        String::new(),
        template.attribution(site_name),
    ];
    lines.join("\n")
}
