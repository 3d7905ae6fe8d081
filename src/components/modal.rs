use yew::prelude::*;

use crate::ui::modal::ModalName;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub name: ModalName,
    pub title: AttrValue,
    pub open: bool,
    pub on_close: Callback<ModalName>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let name = props.name;

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(name);
        })
    };

    // Clicks inside the dialog must not reach the backdrop.
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div
            id={name.id()}
            class={classes!("modal", props.open.then(|| "active"))}
            aria-hidden={(!props.open).to_string()}
            onclick={close.clone()}
        >
            <div
                class="modal-content"
                role="dialog"
                aria-modal="true"
                aria-labelledby={format!("{}-title", name)}
                onclick={keep_open}
            >
                <div class="modal-header">
                    <h2 id={format!("{}-title", name)}>{props.title.clone()}</h2>
                    <button class="modal-close" onclick={close} aria-label="Close">{"✕"}</button>
                </div>
                <div class="modal-body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
