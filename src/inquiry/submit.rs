#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use chrono::NaiveDateTime;
use log::{debug, info};

use super::dispatch::{build_link, dispatch, DispatchOutcome, LinkOpener};
use super::format::format_message;
use super::model::InquiryRequest;
use super::validate::validate;
use crate::config::SiteConfig;
use crate::error::SubmitError;

/// Validates the form, renders the message and hands the link to the
/// browser. Nothing reaches `opener` unless validation passed.
pub fn submit<O: LinkOpener + ?Sized>(
    request: &InquiryRequest,
    config: &SiteConfig,
    now: NaiveDateTime,
    opener: &O,
    user_agent: &str,
) -> Result<DispatchOutcome, SubmitError> {
    let valid = validate(request, &config.limits).map_err(|found| {
        debug!("Inquiry rejected: {}", found);
        SubmitError::Invalid(found)
    })?;

    let text = format_message(&valid, now, config.template, &config.site_name);
    let url = build_link(&config.messaging_host, &config.recipient_id, &text);
    let strategy = config.dispatch.strategy(user_agent);

    let outcome = dispatch(opener, &url, strategy).map_err(SubmitError::Dispatch)?;
    info!("Inquiry dispatched ({:?})", outcome);
    Ok(outcome)
}
