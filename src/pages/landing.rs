use log::{debug, info};
use yew::prelude::*;

use crate::components::faq_item::FaqList;
use crate::components::footer::Footer;
use crate::components::nav::Nav;
use crate::contact::ContactMessage;
use crate::content::{
    Section, ABOUT_BADGES, ABOUT_FACTS, ABOUT_PARAGRAPHS, CASE_STUDIES, PROCESS_STEPS,
    SERVICES,
};
use crate::navigation::{navigate, DomScroller};
use crate::pages::contact::Contact;
use crate::pages::pricing::Pricing;
use crate::viewport::{use_viewport_tracker, ViewAction, ViewState};

/// Class list for a section; animated sections get `reveal` and, once seen, `is-visible`.
fn section_classes(base: &'static str, section: Section, view: &ViewState) -> Classes {
    classes!(
        base,
        section.animates().then(|| "reveal"),
        view.is_visible(section.id()).then(|| "is-visible"),
    )
}

fn delay(ms: usize) -> String {
    format!("animation-delay: {}ms", ms)
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let view = use_viewport_tracker();

    let on_navigate = {
        let view = view.clone();
        Callback::from(move |section: Section| {
            info!("Navigating to #{}", section.id());
            if let Some(action) = navigate(&DomScroller, section.id()) {
                view.dispatch(action);
            }
        })
    };

    let on_toggle_menu = {
        let view = view.clone();
        Callback::from(move |_| view.dispatch(ViewAction::ToggleMenu))
    };

    let on_contact_submit = Callback::from(|message: ContactMessage| {
        let keys: Vec<&str> = message.to_pairs().into_iter().map(|(key, _)| key).collect();
        debug!("Contact form captured {:?}, no delivery configured", keys);
    });

    let go_to = |section: Section| on_navigate.reform(move |_: MouseEvent| section);

    html! {
        <div class="landing-page">
            <Nav
                is_scrolled={view.is_scrolled}
                is_menu_open={view.is_menu_open}
                active={view.active_section}
                on_navigate={on_navigate.clone()}
                {on_toggle_menu}
            />

            // Hero Section
            <section id="hero" class="hero">
                <div class="hero-glow"></div>
                <div class="hero-content">
                    <h2>{"SEO-Driven Websites & Analytics for European Businesses"}</h2>
                    <p class="hero-subtitle">
                        {"I help small businesses improve visibility, speed, and conversions through clean websites, SEO, and clear monthly reports."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="btn btn-primary btn-lg" onclick={go_to(Section::Contact)}>
                            {"Request Free Website Audit"}
                        </button>
                        <button class="btn btn-outline btn-lg" onclick={go_to(Section::Services)}>
                            {"View Services"}
                        </button>
                    </div>
                </div>
            </section>

            // Services Section
            <section id="services" class={section_classes("services", Section::Services, &view)}>
                <div class="container">
                    <div class="section-header">
                        <h2>{"Our Services"}</h2>
                        <p>{"Comprehensive digital solutions tailored to your business needs"}</p>
                    </div>
                    <div class="services-grid">
                        { for SERVICES.iter().map(|service| html! {
                            <div class="service-card">
                                <div class="card-icon">{service.icon}</div>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            // Process Section
            <section
                id="process"
                data-animate=""
                class={section_classes("process", Section::Process, &view)}
            >
                <div class="container">
                    <div class="section-header animate-fade-in">
                        <h2>{"Our Process"}</h2>
                        <p>{"A proven 4-step approach to delivering results"}</p>
                    </div>
                    <div class="process-track">
                        <div class="process-connector"></div>
                        <div class="process-grid">
                            { for PROCESS_STEPS.iter().enumerate().map(|(idx, item)| html! {
                                <div class="process-step animate-slide-up" style={delay(idx * 150)}>
                                    <div class="card-icon">{item.icon}</div>
                                    <div class="step-badge">{item.step}</div>
                                    <h3>{item.title}</h3>
                                    <p>{item.description}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </section>

            // Results Section
            <section id="work" class={section_classes("work", Section::Work, &view)}>
                <div class="container">
                    <div class="section-header">
                        <h2>{"Results & Client Work"}</h2>
                        <p>{"A showcase of real projects I’ve delivered for international clients"}</p>
                    </div>
                    <div class="work-grid">
                        { for CASE_STUDIES.iter().map(|study| html! {
                            <div class="work-card">
                                <h3>{study.title}</h3>
                                <p>{study.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            // About Section
            <section
                id="about"
                data-animate=""
                class={section_classes("about", Section::About, &view)}
            >
                <div class="container about-grid">
                    <div class="about-portrait animate-fade-in">
                        <div class="portrait-glow"></div>
                        <img src="/dp.png" alt="Dirushan - Founder" loading="lazy" />
                    </div>
                    <div class="about-body animate-fade-in" style={delay(200)}>
                        <h2>{"About Dirushan"}</h2>
                        { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }

                        <div class="badge-grid">
                            { for ABOUT_BADGES.iter().enumerate().map(|(idx, badge)| html! {
                                <div class="badge animate-slide-up" style={delay(300 + idx * 100)}>
                                    <span class="check">{"✓"}</span>
                                    <span>{*badge}</span>
                                </div>
                            }) }
                        </div>

                        <div class="about-facts">
                            { for ABOUT_FACTS.iter().enumerate().map(|(idx, fact)| html! {
                                <div class="about-fact animate-fade-in" style={delay(500 + idx * 100)}>
                                    <span class="fact-icon">{fact.icon}</span>
                                    <div>
                                        <p class="fact-label">{fact.label}</p>
                                        <p class="fact-value">{fact.value}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </section>

            <Pricing on_navigate={on_navigate.clone()} />

            // FAQ Section
            <section id="faq" class={section_classes("faq", Section::Faq, &view)}>
                <div class="container narrow">
                    <div class="section-header">
                        <h2>{"Frequently Asked Questions"}</h2>
                    </div>
                    <FaqList />
                </div>
            </section>

            <Contact
                visible={view.is_visible(Section::Contact.id())}
                on_submit={on_contact_submit}
            />

            <Footer on_navigate={on_navigate.clone()} />

            <style>
                {r#"
                :root {
                    --primary: #1e40af;
                    --primary-soft: rgba(30, 64, 175, 0.06);
                    --secondary: #0ea5e9;
                    --foreground: #0f172a;
                    --muted: #f1f5f9;
                    --muted-foreground: #64748b;
                    --border: #e2e8f0;
                    --background: #f8fafc;
                }

                html {
                    scroll-behavior: smooth;
                }

                body {
                    margin: 0;
                    font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
                    color: var(--foreground);
                    background: var(--background);
                    -webkit-font-smoothing: antialiased;
                }

                .landing-page h1,
                .landing-page h2,
                .landing-page h3 {
                    margin-top: 0;
                }

                .container {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .container.narrow {
                    max-width: 48rem;
                }

                .landing-page section {
                    padding: 5rem 0;
                }

                .section-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .section-header h2 {
                    font-size: 2.75rem;
                    margin-bottom: 1rem;
                }

                .section-header p {
                    font-size: 1.25rem;
                    color: var(--muted-foreground);
                    max-width: 42rem;
                    margin: 0 auto;
                }

                .btn {
                    border: 2px solid var(--primary);
                    border-radius: 0.5rem;
                    padding: 0.6rem 1.25rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background 0.2s ease, opacity 0.2s ease;
                }

                .btn-lg {
                    padding: 0.8rem 1.75rem;
                    font-size: 1.05rem;
                }

                .btn-primary {
                    background: var(--primary);
                    color: #ffffff;
                }

                .btn-primary:hover {
                    opacity: 0.9;
                }

                .btn-outline {
                    background: transparent;
                    color: var(--primary);
                }

                .btn-outline:hover {
                    background: var(--primary-soft);
                }

                .btn-block {
                    width: 100%;
                }

                .hero {
                    position: relative;
                    padding: 8rem 1.5rem 5rem !important;
                    overflow: hidden;
                    background: linear-gradient(135deg, rgba(30, 64, 175, 0.05), rgba(14, 165, 233, 0.05));
                }

                .hero-glow {
                    position: absolute;
                    top: 5rem;
                    right: 0;
                    width: 24rem;
                    height: 24rem;
                    background: rgba(30, 64, 175, 0.1);
                    border-radius: 50%;
                    filter: blur(64px);
                    z-index: -1;
                }

                .hero-content {
                    max-width: 48rem;
                    margin: 0 auto;
                    text-align: center;
                }

                .hero-content h2 {
                    font-size: 3.5rem;
                    line-height: 1.15;
                    margin-bottom: 1.5rem;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: var(--muted-foreground);
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }

                .hero-cta-group {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }

                .card-icon {
                    font-size: 2.25rem;
                    margin-bottom: 1rem;
                }

                .services,
                .work {
                    background: #ffffff;
                }

                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                }

                .service-card,
                .work-card {
                    background: var(--muted);
                    border: 1px solid var(--border);
                    border-radius: 0.5rem;
                    padding: 2rem;
                    transition: border-color 0.3s ease, box-shadow 0.3s ease;
                }

                .service-card:hover,
                .work-card:hover {
                    border-color: rgba(30, 64, 175, 0.5);
                    box-shadow: 0 10px 24px rgba(15, 23, 42, 0.08);
                }

                .service-card p,
                .work-card p,
                .process-step p {
                    color: var(--muted-foreground);
                    line-height: 1.6;
                }

                .process {
                    background: linear-gradient(to bottom, var(--background), var(--primary-soft), var(--background));
                }

                .process-track {
                    position: relative;
                }

                .process-connector {
                    position: absolute;
                    top: 4rem;
                    left: 0;
                    right: 0;
                    height: 4px;
                    background: linear-gradient(to right, var(--primary), var(--secondary), var(--primary));
                    opacity: 0.3;
                }

                .process-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }

                .process-step {
                    position: relative;
                    background: #ffffff;
                    border: 2px solid rgba(30, 64, 175, 0.2);
                    border-radius: 0.5rem;
                    padding: 2rem;
                    text-align: center;
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }

                .process-step:hover {
                    transform: translateY(-0.5rem);
                    border-color: rgba(30, 64, 175, 0.5);
                }

                .step-badge {
                    width: 3rem;
                    height: 3rem;
                    margin: 0 auto 1rem;
                    border-radius: 50%;
                    background: var(--primary);
                    color: #ffffff;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .work-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .about-grid {
                    display: grid;
                    grid-template-columns: 2fr 3fr;
                    gap: 3rem;
                    align-items: center;
                    max-width: 64rem;
                }

                .about-portrait {
                    position: relative;
                }

                .portrait-glow {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(135deg, var(--primary), var(--secondary));
                    filter: blur(40px);
                    opacity: 0.2;
                    border-radius: 50%;
                }

                .about-portrait img {
                    position: relative;
                    width: 100%;
                    border-radius: 1rem;
                    border: 4px solid var(--primary);
                    object-fit: cover;
                }

                .about-body h2 {
                    font-size: 2.75rem;
                    margin-bottom: 1.5rem;
                }

                .about-body > p {
                    font-size: 1.1rem;
                    color: var(--muted-foreground);
                    line-height: 1.7;
                }

                .badge-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                    margin: 2rem 0;
                }

                .badge {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem;
                    background: #ffffff;
                    border: 1px solid rgba(30, 64, 175, 0.2);
                    border-radius: 0.5rem;
                    font-weight: 600;
                }

                .check {
                    color: var(--primary);
                    font-weight: 700;
                }

                .about-facts {
                    border-top: 1px solid var(--border);
                    padding-top: 1.5rem;
                    display: grid;
                    gap: 0.75rem;
                }

                .about-fact {
                    display: flex;
                    gap: 1rem;
                    align-items: flex-start;
                }

                .fact-icon {
                    font-size: 1.5rem;
                }

                .fact-label {
                    margin: 0;
                    font-size: 0.85rem;
                    color: var(--muted-foreground);
                }

                .fact-value {
                    margin: 0;
                    font-weight: 600;
                    font-size: 1.1rem;
                }

                @keyframes fade-in {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @keyframes slide-up {
                    from { opacity: 0; transform: translateY(1.5rem); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .animate-fade-in {
                    opacity: 0;
                    animation: fade-in 0.7s ease-out forwards;
                }

                .animate-slide-up {
                    opacity: 0;
                    animation: slide-up 0.7s ease-out forwards;
                }

                .reveal:not(.is-visible) .animate-fade-in,
                .reveal:not(.is-visible) .animate-slide-up {
                    animation: none;
                }

                @media (max-width: 768px) {
                    .hero-content h2 {
                        font-size: 2.5rem;
                    }

                    .services-grid,
                    .process-grid,
                    .work-grid,
                    .about-grid,
                    .badge-grid {
                        grid-template-columns: 1fr;
                    }

                    .process-connector {
                        display: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}
