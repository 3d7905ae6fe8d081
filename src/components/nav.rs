use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::SectionInfo;
use crate::ui::scroll_spy::ScrollAxis;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub site_name: AttrValue,
    pub sections: Vec<SectionInfo>,
    pub axis: ScrollAxis,
    pub active: Option<String>,
    pub menu_open: bool,
    pub on_select: Callback<String>,
    pub on_toggle_menu: Callback<()>,
    pub on_close_menu: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps {
        site_name,
        sections,
        axis,
        active,
        menu_open,
        on_select,
        on_toggle_menu,
        on_close_menu,
    } = props;

    let select = |id: String| {
        let on_select = on_select.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_select.emit(id.clone());
        })
    };

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let close_menu = {
        let on_close_menu = on_close_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close_menu.emit(());
        })
    };

    let is_active = |id: &str| active.as_deref() == Some(id);

    html! {
        <>
            <nav class="top-nav">
                <div class="nav-content">
                    <a href="#home" class="nav-logo" onclick={select("home".to_string())}>
                        {site_name.clone()}
                    </a>
                    <div class="nav-links">
                        { for sections.iter().map(|s| html! {
                            <a
                                href={format!("#{}", s.id)}
                                class={classes!("nav-link", is_active(&s.id).then(|| "active"))}
                                onclick={select(s.id.clone())}
                            >
                                {&s.title}
                            </a>
                        }) }
                    </div>
                    <button class="mobile-menu-btn" onclick={toggle_menu} aria-label="Open menu">
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </nav>

            if *axis == ScrollAxis::Horizontal {
                <div class="nav-dots">
                    { for sections.iter().map(|s| html! {
                        <button
                            class={classes!("dot", is_active(&s.id).then(|| "active"))}
                            data-section={s.id.clone()}
                            title={s.title.clone()}
                            onclick={select(s.id.clone())}
                        ></button>
                    }) }
                </div>
            }

            <div class={classes!("mobile-nav", menu_open.then(|| "active"))}>
                // Clicking anywhere outside the menu panel closes it.
                <div class="mobile-nav-backdrop" onclick={close_menu.clone()}></div>
                <div class="mobile-nav-panel">
                    <button class="close-menu" onclick={close_menu} aria-label="Close menu">{"✕"}</button>
                    { for sections.iter().map(|s| html! {
                        <a
                            href={format!("#{}", s.id)}
                            class={classes!("mobile-nav-item", is_active(&s.id).then(|| "active"))}
                            onclick={select(s.id.clone())}
                        >
                            {&s.title}
                        </a>
                    }) }
                </div>
            </div>
        </>
    }
}
