use chrono::Local;
use log::error;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::browser::{self, BrowserOpener, DeferredTask};
use crate::components::notice::NoticeKind;
use crate::config::SiteConfig;
use crate::error::{SubmitError, ValidationErrors};
use crate::inquiry::dispatch::DispatchOutcome;
use crate::inquiry::model::{Category, Field, InquiryRequest};
use crate::inquiry::submit::submit;
use crate::inquiry::validate::clamp_message;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub config: SiteConfig,
    pub on_notice: Callback<(NoticeKind, String)>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let request = use_state(InquiryRequest::default);
    let errors = use_state(ValidationErrors::default);
    let is_sending = use_state(|| false);
    let reset_task = use_mut_ref(DeferredTask::default);
    let reenable_task = use_mut_ref(DeferredTask::default);

    let max_message = props.config.limits.max_message;

    let on_text_input = |field: Field| {
        let request = request.clone();
        Callback::from(move |e: InputEvent| {
            let value = if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                input.value()
            } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                clamp_message(&area.value(), max_message)
            } else {
                return;
            };
            let mut next = (*request).clone();
            next.set(field, value);
            request.set(next);
        })
    };

    let on_category_change = {
        let request = request.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*request).clone();
            next.category = select.value();
            request.set(next);
        })
    };

    let on_submit = {
        let request = request.clone();
        let errors = errors.clone();
        let is_sending = is_sending.clone();
        let reset_task = reset_task.clone();
        let reenable_task = reenable_task.clone();
        let config = props.config.clone();
        let on_notice = props.on_notice.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_sending {
                return;
            }

            // A fresh submission supersedes any reset still pending.
            reset_task.borrow_mut().cancel();
            reenable_task.borrow_mut().cancel();
            errors.set(ValidationErrors::default());

            let now = Local::now().naive_local();
            match submit(&request, &config, now, &BrowserOpener, &browser::user_agent()) {
                Ok(outcome) => {
                    is_sending.set(true);
                    if outcome != DispatchOutcome::NavigatedSameTab {
                        on_notice.emit((
                            NoticeKind::Success,
                            "Opening WhatsApp to send your message. Please complete the conversation there."
                                .to_string(),
                        ));
                    }

                    let request = request.clone();
                    reset_task.borrow_mut().schedule(config.timings.reset_delay_ms, move || {
                        request.set(InquiryRequest::default());
                    });

                    let is_sending = is_sending.clone();
                    reenable_task.borrow_mut().schedule(config.timings.reenable_delay_ms, move || {
                        is_sending.set(false);
                    });
                }
                Err(SubmitError::Invalid(found)) => errors.set(found),
                Err(SubmitError::Dispatch(e)) => {
                    error!("Inquiry dispatch failed: {}", e);
                    on_notice.emit((NoticeKind::Error, e.to_string()));
                    browser::alert(&format!(
                        "{}. Please try again, or reach us directly at {}.",
                        e, config.fallback_contact
                    ));
                    is_sending.set(false);
                }
            }
        })
    };

    let field_class = |field: Field| {
        classes!("form-group", errors.for_field(field).is_some().then(|| "error"))
    };

    let field_error = |field: Field| match errors.for_field(field) {
        Some(e) => html! { <span class="error-message">{e.to_string()}</span> },
        None => html! {},
    };

    let message_len = request.message.chars().count();
    let counter_class = classes!(
        "char-count",
        (message_len * 10 >= max_message * 9).then(|| "warning")
    );

    html! {
        <form id="contactForm" class="contact-form" onsubmit={on_submit}>
            <div class={field_class(Field::Name)}>
                <label for={Field::Name.input_id()}>{"Name"}</label>
                <input
                    type="text"
                    id={Field::Name.input_id()}
                    name="name"
                    placeholder="Your name"
                    value={request.name.clone()}
                    oninput={on_text_input(Field::Name)}
                />
                { field_error(Field::Name) }
            </div>
            <div class={field_class(Field::Email)}>
                <label for={Field::Email.input_id()}>{"Email"}</label>
                <input
                    type="text"
                    inputmode="email"
                    autocomplete="email"
                    id={Field::Email.input_id()}
                    name="email"
                    placeholder="you@example.com"
                    value={request.email.clone()}
                    oninput={on_text_input(Field::Email)}
                />
                { field_error(Field::Email) }
            </div>
            <div class={field_class(Field::Category)}>
                <label for={Field::Category.input_id()}>{"Project type"}</label>
                <select
                    id={Field::Category.input_id()}
                    name="subject"
                    onchange={on_category_change}
                >
                    <option value="" selected={request.category.is_empty()}>{"Select a project type"}</option>
                    { for Category::ALL.iter().map(|c| html! {
                        <option value={c.value()} selected={request.category == c.value()}>
                            {c.label()}
                        </option>
                    }) }
                </select>
                { field_error(Field::Category) }
            </div>
            <div class={field_class(Field::Message)}>
                <label for={Field::Message.input_id()}>{"Message"}</label>
                <textarea
                    id={Field::Message.input_id()}
                    name="message"
                    rows="5"
                    maxlength={max_message.to_string()}
                    placeholder="Tell me about your project"
                    value={request.message.clone()}
                    oninput={on_text_input(Field::Message)}
                />
                <div class={counter_class}>{format!("{}/{}", message_len, max_message)}</div>
                { field_error(Field::Message) }
            </div>
            <button type="submit" class="submit-btn" disabled={*is_sending}>
                { if *is_sending { "Sending..." } else { "Send via WhatsApp" } }
            </button>
        </form>
    }
}
