use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::shell::{is_scrolled, Section};

const NAV_LINKS: [(Section, &str); 4] = [
    (Section::HowItWorks, "How It Works"),
    (Section::Features, "Features"),
    (Section::Pricing, "Pricing"),
    (Section::Faq, "FAQ"),
];

/// Smoothly scrolls the element with `id` to the top of the viewport.
/// Missing elements are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id))
    else {
        debug!("No section #{} to scroll to", id);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub scroll_threshold: f64,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        let threshold = props.scroll_threshold;
        use_effect_with_deps(
            move |_| {
                let window = window();
                let scroll_callback = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        let y = window
                            .as_ref()
                            .and_then(|w| w.scroll_y().ok())
                            .unwrap_or(0.0);
                        scrolled.set(is_scrolled(y, threshold));
                    }) as Box<dyn FnMut()>)
                };

                if let Some(window) = window.as_ref() {
                    if let Err(e) = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        warn!("Failed to attach nav scroll listener: {:?}", e);
                    }
                }

                move || {
                    if let Some(window) = window.as_ref() {
                        if let Err(e) = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        ) {
                            warn!("Failed to detach nav scroll listener: {:?}", e);
                        }
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let links = |close_menu: bool| -> Html {
        html! {
            <>
                {
                    for NAV_LINKS.iter().map(|(section, label)| {
                        let id = section.id();
                        let menu_open = menu_open.clone();
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            scroll_to_section(id);
                            if close_menu {
                                menu_open.set(false);
                            }
                        });
                        html! {
                            <a href={format!("#{}", id)} class="nav-link" {onclick}>{*label}</a>
                        }
                    })
                }
            </>
        }
    };

    html! {
        <nav class={classes!("top-nav", (*scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="nav-logo gradient-text">{"MCD"}</div>
                <div class="nav-right">
                    { links(false) }
                    <button class="nav-cta">{"Start Free Trial"}</button>
                </div>
                <button class="burger-menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
                {
                    if *menu_open {
                        html! {
                            <div class="mobile-menu">
                                { links(true) }
                                <button class="nav-cta">{"Start Free Trial"}</button>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </nav>
    }
}
