use gloo_timers::callback::Timeout;
use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, IntersectionObserver, IntersectionObserverEntry, KeyboardEvent, WheelEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::browser::{self, DeferredTask, MAIN_CONTAINER_ID};
use crate::components::contact_form::ContactForm;
use crate::components::modal::Modal;
use crate::components::nav::Nav;
use crate::components::notice::{Notice, NoticeKind};
use crate::config::{SectionInfo, SiteConfig};
use crate::ui::modal::ModalName;
use crate::ui::reveal::{self, RevealedCards, CARD_INDEX_ATTR, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::ui::scroll_spy::{self, Direction, ScrollAxis};
use crate::ui::state::{ScrollRequest, UiAction, UiState};

const SERVICES: &[(&str, &str)] = &[
    ("Web Development", "Fast, accessible websites and web apps built to last."),
    ("Mobile Apps", "Cross-platform apps that feel native on every phone."),
    ("UI/UX Design", "Interfaces people understand on the first try."),
    ("Consulting", "Architecture reviews, audits, and hands-on mentoring."),
];

const FLOATING_ICONS: &[&str] = &["💻", "📱", "🎨", "⚡"];

const PROJECTS: &[(&str, &str)] = &[
    ("Shop Front", "E-commerce storefront with M-Pesa checkout."),
    ("Clinic Booking", "Appointment scheduling for a network of clinics."),
    ("Field Reports", "Offline-first data collection app for survey teams."),
];

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub config: SiteConfig,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let config = &props.config;
    let ui = use_reducer({
        let ids = config.section_ids();
        move || UiState::new(ids)
    });
    let notice = use_state(|| None::<(NoticeKind, String)>);
    let settle_task = use_mut_ref(DeferredTask::default);
    let revealed = use_reducer(RevealedCards::default);
    let seen_active = use_mut_ref(|| ui.active_section.clone());

    // Background scroll follows the menu and modals.
    use_effect_with_deps(
        |locked| {
            browser::set_body_scroll_locked(*locked);
            || ()
        },
        ui.body_scroll_locked(),
    );

    // Scroll spy
    {
        let dispatcher = ui.dispatcher();
        let axis = config.scroll_axis;
        let header_offset = config.header_offset;
        let ids = config.section_ids();
        use_effect_with_deps(
            move |_| {
                let source = browser::scroll_source(axis);
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let action = match axis {
                        ScrollAxis::Vertical => UiAction::ScrolledVertical {
                            sections: browser::section_bounds(&ids),
                            offset: browser::scroll_y(),
                            header_offset,
                        },
                        ScrollAxis::Horizontal => UiAction::ScrolledHorizontal {
                            scroll_left: browser::container_scroll_left(),
                            viewport_width: browser::viewport_width(),
                        },
                    };
                    dispatcher.dispatch(action);
                }) as Box<dyn FnMut()>);

                match &source {
                    Some(source) => {
                        let _ = source.add_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                    None => warn!("No scroll source found, scroll spy disabled"),
                }

                move || {
                    if let Some(source) = source {
                        let _ = source.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // Horizontal layout pages one section per wheel notch.
    {
        let dispatcher = ui.dispatcher();
        let axis = config.scroll_axis;
        use_effect_with_deps(
            move |_| {
                let source = match axis {
                    ScrollAxis::Horizontal => browser::scroll_source(axis),
                    ScrollAxis::Vertical => None,
                };
                let wheel_callback = Closure::wrap(Box::new(move |e: WheelEvent| {
                    e.prevent_default();
                    if let Some(direction) = Direction::from_wheel(e.delta_y()) {
                        dispatcher.dispatch(UiAction::Step(direction));
                    }
                }) as Box<dyn FnMut(WheelEvent)>);

                if let Some(source) = &source {
                    // Must not be passive, or prevent_default is ignored.
                    let options = AddEventListenerOptions::new();
                    options.set_passive(false);
                    let _ = source.add_event_listener_with_callback_and_add_event_listener_options(
                        "wheel",
                        wheel_callback.as_ref().unchecked_ref(),
                        &options,
                    );
                }

                move || {
                    if let Some(source) = source {
                        let _ = source.remove_event_listener_with_callback(
                            "wheel",
                            wheel_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    {
        let dispatcher = ui.dispatcher();
        let axis = config.scroll_axis;
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            let key = e.key();
            if key == "Escape" {
                dispatcher.dispatch(UiAction::Escape);
                return;
            }
            if axis != ScrollAxis::Horizontal || browser::focus_in_form_control() {
                return;
            }
            if let Some(direction) = Direction::from_key(&key) {
                e.prevent_default();
                dispatcher.dispatch(UiAction::Step(direction));
            }
        });
    }

    // Perform scrolls the reducer asked for, then release the lock.
    {
        let dispatcher = ui.dispatcher();
        let settle_task = settle_task.clone();
        let axis = config.scroll_axis;
        let ids = config.section_ids();
        let header_offset = config.header_offset;
        let lock_ms = config.timings.scroll_lock_ms;
        use_effect_with_deps(
            move |request: &Option<ScrollRequest>| {
                if let Some(request) = request {
                    browser::scroll_to_section(axis, &ids, &request.section, header_offset);
                    settle_task.borrow_mut().schedule(lock_ms, move || {
                        dispatcher.dispatch(UiAction::ScrollSettled);
                    });
                }
                || ()
            },
            ui.scroll_request.clone(),
        );
    }

    // Keep the address bar on the active section, however it was reached.
    use_effect_with_deps(
        move |active: &Option<String>| {
            let previous = seen_active.replace(active.clone());
            if let Some(id) = scroll_spy::hash_update(&browser::current_hash(), previous.as_deref(), active.as_deref()) {
                browser::push_hash(id);
            }
            || ()
        },
        ui.active_section.clone(),
    );

    // Service cards fade in the first time they scroll into view.
    {
        let revealed = revealed.dispatcher();
        use_effect_with_deps(
            move |_| {
                let reveal_callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        if !entry.is_intersecting() {
                            continue;
                        }
                        if let Some(index) = reveal::card_index(entry.target().get_attribute(CARD_INDEX_ATTR)) {
                            revealed.dispatch(index);
                        }
                    }
                }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                let observer = browser::observe_all(
                    ".service-card",
                    reveal_callback.as_ref().unchecked_ref(),
                    REVEAL_THRESHOLD,
                    REVEAL_ROOT_MARGIN,
                );

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(reveal_callback);
                }
            },
            (),
        );
    }

    // Deep link to a section on first load.
    {
        let dispatcher = ui.dispatcher();
        let ids = config.section_ids();
        let delay = config.timings.initial_hash_delay_ms;
        use_effect_with_deps(
            move |_| {
                let hash = browser::current_hash();
                let timeout = scroll_spy::section_from_hash(&ids, &hash).map(|id| {
                    info!("Restoring section {} from URL", id);
                    let id = id.to_string();
                    Timeout::new(delay, move || dispatcher.dispatch(UiAction::NavSelected(id)))
                });
                move || drop(timeout)
            },
            (),
        );
    }

    let on_select = {
        let dispatcher = ui.dispatcher();
        Callback::from(move |id: String| dispatcher.dispatch(UiAction::NavSelected(id)))
    };
    let on_toggle_menu = {
        let dispatcher = ui.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(UiAction::ToggleMenu))
    };
    let on_close_menu = {
        let dispatcher = ui.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(UiAction::CloseMenu))
    };
    let on_close_modal = {
        let dispatcher = ui.dispatcher();
        Callback::from(move |name: ModalName| dispatcher.dispatch(UiAction::CloseModal(name)))
    };
    let open_modal = |name: ModalName| {
        let dispatcher = ui.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(UiAction::OpenModal(name));
        })
    };
    let on_notice = {
        let notice = notice.clone();
        Callback::from(move |message: (NoticeKind, String)| notice.set(Some(message)))
    };
    let on_dismiss_notice = {
        let notice = notice.clone();
        Callback::from(move |_: ()| notice.set(None))
    };

    let contact_form = html! {
        <ContactForm config={config.clone()} on_notice={on_notice.clone()} />
    };

    let render_section = |section: &SectionInfo| {
        let body = match section.id.as_str() {
            "home" => html! {
                <div class="hero">
                    <div class="floating-icons" aria-hidden="true">
                        { for FLOATING_ICONS.iter().enumerate().map(|(i, icon)| html! {
                            <span class="floating-icon" style={format!("animation-delay: {}", reveal::float_delay(i))}>
                                {*icon}
                            </span>
                        }) }
                    </div>
                    <h1>{"Building digital products that people enjoy"}</h1>
                    <p>{"Websites, apps and the design work in between."}</p>
                    <a href="#contact" class="cta-btn" onclick={
                        let on_select = on_select.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            on_select.emit("contact".to_string());
                        })
                    }>{"Start a project"}</a>
                </div>
            },
            "about" => html! {
                <p class="about-text">
                    {"Independent developer and designer working with startups and small businesses across East Africa."}
                </p>
            },
            "services" => html! {
                <>
                    <div class="card-grid">
                        { for SERVICES.iter().enumerate().map(|(i, (title, text))| html! {
                            <div
                                class={classes!("service-card", revealed.is_revealed(i).then(|| "revealed"))}
                                data-card={i.to_string()}
                            >
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        }) }
                    </div>
                    if config.modals {
                        <button class="more-btn" onclick={open_modal(ModalName::Services)}>{"Learn more"}</button>
                    }
                </>
            },
            "projects" => html! {
                <>
                    <div class="card-grid">
                        { for PROJECTS.iter().map(|(title, text)| html! {
                            <div class="project-card">
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        }) }
                    </div>
                    if config.modals {
                        <button class="more-btn" onclick={open_modal(ModalName::Projects)}>{"View all projects"}</button>
                    }
                </>
            },
            "contact" => {
                if config.modals {
                    html! {
                        <button class="cta-btn" onclick={open_modal(ModalName::Contact)}>{"Get in touch"}</button>
                    }
                } else {
                    contact_form.clone()
                }
            }
            _ => html! {},
        };

        html! {
            <section
                id={section.id.clone()}
                class={classes!("section", ui.is_active(&section.id).then(|| "active"))}
            >
                <h2 class="section-title">{&section.title}</h2>
                { body }
            </section>
        }
    };

    let container_class = match config.scroll_axis {
        ScrollAxis::Horizontal => "main-container horizontal",
        ScrollAxis::Vertical => "main-container",
    };

    html! {
        <>
            <style>
                {r#"
                    .main-container.horizontal {
                        display: flex;
                        overflow-x: auto;
                        overflow-y: hidden;
                        height: 100vh;
                        scroll-snap-type: x mandatory;
                    }
                    .main-container.horizontal .section {
                        flex: 0 0 100vw;
                        height: 100vh;
                        scroll-snap-align: start;
                        overflow-y: auto;
                    }
                    .main-container .section {
                        min-height: 100vh;
                        padding: 6rem 2rem 2rem;
                        box-sizing: border-box;
                    }
                    .nav-link.active, .mobile-nav-item.active, .dot.active {
                        color: #7EB2FF;
                        border-color: #7EB2FF;
                    }
                    .mobile-nav {
                        display: none;
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                    }
                    .mobile-nav.active {
                        display: block;
                    }
                    .mobile-nav-backdrop {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.6);
                    }
                    .mobile-nav-panel {
                        position: absolute;
                        top: 0;
                        right: 0;
                        width: 70%;
                        height: 100%;
                        background: #1a1a1a;
                        display: flex;
                        flex-direction: column;
                        padding: 2rem;
                    }
                    .modal {
                        display: none;
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.7);
                        z-index: 60;
                        align-items: center;
                        justify-content: center;
                    }
                    .modal.active {
                        display: flex;
                    }
                    .modal-content {
                        background: #1e1e1e;
                        border-radius: 16px;
                        padding: 2rem;
                        max-width: 640px;
                        width: 90%;
                        max-height: 90vh;
                        overflow-y: auto;
                    }
                    .service-card {
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 0.5s ease, transform 0.5s ease;
                    }
                    .service-card.revealed {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .project-card {
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .project-card:hover {
                        transform: translateY(-10px);
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.4);
                    }
                    .floating-icon {
                        display: inline-block;
                        font-size: 2rem;
                        margin: 0 0.75rem;
                        animation: float 3s ease-in-out infinite;
                    }
                    @keyframes float {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-15px); }
                    }
                    .form-group.error input,
                    .form-group.error select,
                    .form-group.error textarea {
                        border-color: #ff6b6b;
                    }
                    .error-message {
                        color: #ff6b6b;
                        font-size: 0.85rem;
                    }
                    .char-count.warning {
                        color: #ffb347;
                    }
                    .notice {
                        position: fixed;
                        bottom: 2rem;
                        right: 2rem;
                        padding: 1rem 1.5rem;
                        border-radius: 8px;
                        z-index: 70;
                        display: flex;
                        gap: 1rem;
                    }
                    .notice-success { background: #1f7a3a; }
                    .notice-error { background: #8b1e1e; }
                    @media (min-width: 769px) {
                        .mobile-menu-btn { display: none; }
                    }
                    @media (max-width: 768px) {
                        .nav-links { display: none; }
                    }
                "#}
            </style>
            <Nav
                site_name={config.site_name.clone()}
                sections={config.sections.clone()}
                axis={config.scroll_axis}
                active={ui.active_section.clone()}
                menu_open={ui.menu_open}
                on_select={on_select.clone()}
                on_toggle_menu={on_toggle_menu}
                on_close_menu={on_close_menu}
            />
            <main id={MAIN_CONTAINER_ID} class={container_class}>
                { for config.sections.iter().map(render_section) }
            </main>
            if config.modals {
                <>
                <Modal
                    name={ModalName::Services}
                    title="Services"
                    open={ui.modals.is_open(ModalName::Services)}
                    on_close={on_close_modal.clone()}
                >
                    <ul class="modal-list">
                        { for SERVICES.iter().map(|(title, text)| html! {
                            <li><strong>{*title}</strong>{": "}{*text}</li>
                        }) }
                    </ul>
                </Modal>
                <Modal
                    name={ModalName::Projects}
                    title="Projects"
                    open={ui.modals.is_open(ModalName::Projects)}
                    on_close={on_close_modal.clone()}
                >
                    <ul class="modal-list">
                        { for PROJECTS.iter().map(|(title, text)| html! {
                            <li><strong>{*title}</strong>{": "}{*text}</li>
                        }) }
                    </ul>
                </Modal>
                <Modal
                    name={ModalName::Contact}
                    title="Get in touch"
                    open={ui.modals.is_open(ModalName::Contact)}
                    on_close={on_close_modal}
                >
                    { contact_form }
                </Modal>
                </>
            }
            <Notice
                message={(*notice).clone()}
                duration_ms={config.timings.notice_ms}
                on_dismiss={on_dismiss_notice}
            />
        </>
    }
}
