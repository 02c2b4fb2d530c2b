use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::content::{Section, NAV_LINKS};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub is_scrolled: bool,
    pub is_menu_open: bool,
    pub active: Section,
    pub on_navigate: Callback<Section>,
    pub on_toggle_menu: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps {
        is_scrolled,
        is_menu_open,
        active,
        on_navigate,
        on_toggle_menu,
    } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let link_buttons = |class: &'static str| -> Html {
        NAV_LINKS
            .iter()
            .map(|link| {
                let target = link.target;
                let onclick = on_navigate.reform(move |_: MouseEvent| target);
                html! {
                    <button
                        key={target.id()}
                        class={classes!(class, (*active == target).then(|| "active"))}
                        {onclick}
                    >
                        {link.label}
                    </button>
                }
            })
            .collect()
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <span class="nav-logo">{config::BRAND}</span>

                <div class="nav-desktop">
                    { link_buttons("nav-link") }
                </div>

                <button
                    class="nav-toggle"
                    aria-label={if *is_menu_open { "Close menu" } else { "Open menu" }}
                    aria-expanded={is_menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    { if *is_menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            {
                if *is_menu_open {
                    html! {
                        <div class="nav-mobile">
                            { link_buttons("nav-mobile-link") }
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }

                .top-nav.scrolled {
                    background: #ffffff;
                    box-shadow: 0 4px 12px rgba(15, 23, 42, 0.08);
                }

                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: var(--primary);
                }

                .nav-desktop {
                    display: flex;
                    gap: 1rem;
                }

                .nav-link,
                .nav-mobile-link {
                    background: none;
                    border: none;
                    padding: 0.5rem 0.75rem;
                    font-size: 0.9rem;
                    font-weight: 500;
                    color: var(--foreground);
                    cursor: pointer;
                    transition: color 0.2s ease;
                }

                .nav-link:hover,
                .nav-mobile-link:hover,
                .nav-link.active,
                .nav-mobile-link.active {
                    color: var(--primary);
                }

                .nav-toggle {
                    display: none;
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    padding: 0.5rem;
                    color: var(--foreground);
                    cursor: pointer;
                }

                .nav-mobile {
                    display: none;
                    background: #ffffff;
                    border-top: 1px solid var(--border);
                    padding: 0.5rem 0.5rem 0.75rem;
                }

                .nav-mobile-link {
                    display: block;
                    width: 100%;
                    text-align: left;
                    font-size: 1rem;
                }

                @media (max-width: 768px) {
                    .nav-desktop {
                        display: none;
                    }

                    .nav-toggle,
                    .nav-mobile {
                        display: block;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
