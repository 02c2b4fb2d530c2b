use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::ContactMessage;
use crate::content::CONTACT_CARDS;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    /// Section has scrolled into view at least once.
    pub visible: bool,
    #[prop_or_default]
    pub on_submit: Callback<ContactMessage>,
}

fn input_value(input: &NodeRef) -> String {
    input
        .cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let website_ref = use_node_ref();
    let message_ref = use_node_ref();

    let onsubmit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let website_ref = website_ref.clone();
        let message_ref = message_ref.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let message = message_ref
                .cast::<HtmlTextAreaElement>()
                .map(|textarea| textarea.value())
                .unwrap_or_default();
            on_submit.emit(ContactMessage::from_fields(
                &input_value(&name_ref),
                &input_value(&email_ref),
                &input_value(&website_ref),
                &message,
            ));
        })
    };

    html! {
        <section
            id="contact"
            data-animate=""
            class={classes!("contact", "reveal", props.visible.then(|| "is-visible"))}
        >
            <div class="container">
                <div class="section-header animate-fade-in">
                    <h2>{"Let's Work Together"}</h2>
                    <p>{"Ready to grow your business? Get in touch today."}</p>
                </div>

                <div class="contact-cards">
                    { for CONTACT_CARDS.iter().enumerate().map(|(idx, card)| html! {
                        <div class="contact-card animate-slide-up" style={format!("animation-delay: {}ms", idx * 100)}>
                            <div class="card-icon">{card.icon}</div>
                            <h3>{card.title}</h3>
                            <p class="card-value">{card.value}</p>
                            {
                                match card.link {
                                    Some(link) => html! { <a href={link} class="card-link">{"Get in touch →"}</a> },
                                    None => html! {},
                                }
                            }
                        </div>
                    }) }
                </div>

                <div class="contact-grid">
                    <form class="contact-form animate-fade-in" style="animation-delay: 300ms" {onsubmit}>
                        <h3>{"Send a Message"}</h3>
                        <label>
                            <span>{"Name"}</span>
                            <input ref={name_ref} type="text" name="name" placeholder="Your name" />
                        </label>
                        <label>
                            <span>{"Email"}</span>
                            <input ref={email_ref} type="email" name="email" placeholder="your@email.com" />
                        </label>
                        <label>
                            <span>{"Website URL (optional)"}</span>
                            <input ref={website_ref} type="url" name="website" placeholder="https://yoursite.com" />
                        </label>
                        <label>
                            <span>{"Message"}</span>
                            <textarea ref={message_ref} name="message" rows="5" placeholder="Tell me about your project..." />
                        </label>
                        <button type="submit" class="btn btn-primary btn-block">{"Send Message"}</button>
                    </form>

                    <div class="contact-side">
                        <div class="direct-contact animate-fade-in" style="animation-delay: 400ms">
                            <h3>{"Direct Contact"}</h3>
                            <div class="direct-phone">
                                <p>{"Immediate Response"}</p>
                                <a href={config::TEL_URI}>{config::PHONE_DISPLAY}</a>
                            </div>
                            <a
                                href={config::whatsapp_url()}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="whatsapp-link"
                            >
                                {"💬 Chat on WhatsApp"}
                            </a>
                        </div>

                        <div class="response-time animate-fade-in" style="animation-delay: 500ms">
                            <h4>{"Response Time"}</h4>
                            <p>{"Typically respond within 24 hours during EU working hours."}</p>
                            <div class="availability">
                                <span class="pulse-dot"></span>
                                {"Available for consultation"}
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .contact {
                    background: linear-gradient(to bottom, var(--primary-soft), var(--background));
                }

                .contact-cards {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    margin-bottom: 3rem;
                }

                .contact-card {
                    background: #ffffff;
                    border: 1px solid var(--border);
                    border-radius: 0.5rem;
                    padding: 2rem;
                    text-align: center;
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }

                .contact-card:hover {
                    transform: translateY(-0.25rem);
                    border-color: rgba(30, 64, 175, 0.5);
                }

                .contact-card h3 {
                    font-size: 0.9rem;
                    color: var(--muted-foreground);
                    margin-bottom: 0.5rem;
                }

                .card-value {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: var(--primary);
                    margin: 0 0 1rem;
                }

                .card-link {
                    color: var(--primary);
                    font-weight: 600;
                    text-decoration: none;
                }

                .card-link:hover {
                    text-decoration: underline;
                }

                .contact-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                }

                .contact-form {
                    background: #ffffff;
                    border: 1px solid var(--border);
                    border-radius: 0.5rem;
                    padding: 2rem;
                    display: grid;
                    gap: 1.5rem;
                    box-shadow: 0 4px 12px rgba(15, 23, 42, 0.06);
                }

                .contact-form label span {
                    display: block;
                    font-size: 0.9rem;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }

                .contact-form input,
                .contact-form textarea {
                    box-sizing: border-box;
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border: 1px solid var(--border);
                    border-radius: 0.5rem;
                    font: inherit;
                    resize: none;
                }

                .contact-form input:focus,
                .contact-form textarea:focus {
                    outline: none;
                    box-shadow: 0 0 0 2px var(--primary);
                }

                .contact-side {
                    display: grid;
                    gap: 1.5rem;
                    align-content: start;
                }

                .direct-contact {
                    background: linear-gradient(135deg, var(--primary), rgba(30, 64, 175, 0.8));
                    color: #ffffff;
                    border-radius: 0.5rem;
                    padding: 2rem;
                }

                .direct-contact h3 {
                    font-size: 1.9rem;
                    margin-bottom: 2rem;
                }

                .direct-phone {
                    padding-bottom: 1.5rem;
                    margin-bottom: 1.5rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.2);
                }

                .direct-phone p {
                    margin: 0 0 0.5rem;
                    font-size: 0.9rem;
                    opacity: 0.8;
                }

                .direct-phone a {
                    color: #ffffff;
                    font-size: 1.9rem;
                    font-weight: 700;
                    text-decoration: none;
                }

                .whatsapp-link {
                    display: block;
                    text-align: center;
                    background: #ffffff;
                    color: var(--primary);
                    border-radius: 0.5rem;
                    padding: 1rem 1.5rem;
                    font-weight: 700;
                    text-decoration: none;
                }

                .response-time {
                    background: #ffffff;
                    border: 2px solid rgba(30, 64, 175, 0.2);
                    border-radius: 0.5rem;
                    padding: 2rem;
                }

                .response-time p {
                    color: var(--muted-foreground);
                }

                .availability {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.9rem;
                    font-weight: 600;
                    color: var(--primary);
                }

                .pulse-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    background: #22c55e;
                    animation: pulse 2s ease-in-out infinite;
                }

                @keyframes pulse {
                    50% { opacity: 0.4; }
                }

                @media (max-width: 768px) {
                    .contact-cards,
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
