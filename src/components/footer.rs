use chrono::Datelike;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::content::{Section, FOOTER_COLUMNS};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand animate-fade-in">
                    <h3>{config::BRAND}</h3>
                    <p>{"SEO & web design for European small businesses. Premium results, personal service."}</p>
                </div>

                { for FOOTER_COLUMNS.iter().enumerate().map(|(idx, column)| html! {
                    <div
                        class="footer-column animate-fade-in"
                        style={format!("animation-delay: {}ms", (idx + 1) * 100)}
                    >
                        <h4>{column.heading}</h4>
                        <ul>
                            { for column.links.iter().map(|link| {
                                let target = link.target;
                                let onclick = props.on_navigate.reform(move |e: MouseEvent| {
                                    e.prevent_default();
                                    target
                                });
                                html! {
                                    <li>
                                        <a href={format!("#{}", target.id())} {onclick}>{link.label}</a>
                                    </li>
                                }
                            }) }
                        </ul>
                    </div>
                }) }

                <div class="footer-column animate-fade-in" style="animation-delay: 300ms">
                    <h4>{"Contact"}</h4>
                    <p><a href={config::TEL_URI} class="footer-phone">{config::PHONE_DISPLAY}</a></p>
                    <p>{config::LOCATION}</p>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{format!("© {} {}. All rights reserved.", year, config::COMPANY_NAME)}</p>
                <div class="legal-links">
                    // No policy pages yet
                    <a href="#">{"Privacy Policy"}</a>
                    <a href="#">{"Terms of Service"}</a>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: rgba(30, 64, 175, 0.08);
                    border-top: 1px solid rgba(30, 64, 175, 0.2);
                    padding: 4rem 1.5rem;
                }

                .footer-grid {
                    max-width: 80rem;
                    margin: 0 auto 3rem;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 3rem;
                }

                .footer-brand h3 {
                    font-size: 1.9rem;
                    color: var(--primary);
                    margin-bottom: 0.75rem;
                }

                .footer-brand p,
                .footer-column li,
                .footer-column p {
                    color: var(--muted-foreground);
                    font-size: 0.9rem;
                    line-height: 1.6;
                }

                .footer-column h4 {
                    font-size: 1.1rem;
                    margin-bottom: 1rem;
                }

                .footer-column ul {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    gap: 0.75rem;
                }

                .footer-column a,
                .legal-links a {
                    color: inherit;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .footer-column a:hover,
                .legal-links a:hover {
                    color: var(--primary);
                }

                .footer-phone {
                    font-weight: 600;
                }

                .footer-bottom {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(30, 64, 175, 0.2);
                    display: flex;
                    justify-content: space-between;
                    color: var(--muted-foreground);
                    font-size: 0.9rem;
                }

                .legal-links {
                    display: flex;
                    gap: 1.5rem;
                }

                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }

                    .footer-bottom {
                        flex-direction: column;
                        align-items: center;
                        gap: 1rem;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
