use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub message: Option<(NoticeKind, String)>,
    pub duration_ms: u32,
    pub on_dismiss: Callback<()>,
}

/// Transient, dismissible banner in the corner of the page.
#[function_component(Notice)]
pub fn notice(props: &NoticeProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        let duration = props.duration_ms;
        use_effect_with_deps(
            move |message| {
                let timeout = message.as_ref().map(|_| {
                    Timeout::new(duration, move || {
                        on_dismiss.emit(());
                    })
                });
                move || drop(timeout) // Cancels a pending auto-dismiss
            },
            props.message.clone(),
        );
    }

    let Some((kind, message)) = props.message.clone() else {
        return html! {};
    };

    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    let kind_class = match kind {
        NoticeKind::Success => "notice-success",
        NoticeKind::Error => "notice-error",
    };

    html! {
        <div class={classes!("notice", kind_class)} role="status">
            <span class="notice-message">{message}</span>
            <button class="notice-close" onclick={dismiss} aria-label="Dismiss">{"✕"}</button>
        </div>
    }
}
