use yew::prelude::*;

use crate::content::{Section, PRICING_PLANS};

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    let get_started = props.on_navigate.reform(|_: MouseEvent| Section::Contact);

    html! {
        <section id="pricing" class="pricing">
            <div class="container">
                <div class="section-header">
                    <h2>{"Simple, Transparent Pricing"}</h2>
                    <p>{"Fixed pricing with no surprises. Let's talk about what's right for your business."}</p>
                </div>

                <div class="pricing-grid">
                    { for PRICING_PLANS.iter().map(|plan| html! {
                        <div class={classes!("pricing-card", plan.featured.then(|| "featured"))}>
                            <h3>{plan.title}</h3>
                            <div class="price">
                                <span class="amount">{plan.price}</span>
                                <span class="period">{plan.period}</span>
                            </div>
                            <ul>
                                { for plan.features.iter().map(|feature| html! {
                                    <li><span class="check">{"✓"}</span><span>{*feature}</span></li>
                                }) }
                            </ul>
                            <button class="btn btn-primary btn-block" onclick={get_started.clone()}>
                                {"Get Started"}
                            </button>
                        </div>
                    }) }
                </div>

                <div class="pricing-note">
                    <p>{"Pricing is transparent and fixed after a free audit. Let's discuss your specific needs."}</p>
                </div>
            </div>

            <style>
                {r#"
                .pricing {
                    background: #ffffff;
                }

                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .pricing-card {
                    border: 2px solid var(--border);
                    border-radius: 0.5rem;
                    padding: 2rem;
                }

                .pricing-card.featured {
                    border-color: var(--primary);
                    background: var(--primary-soft);
                }

                .pricing-card h3 {
                    font-size: 1.5rem;
                    margin-bottom: 0.5rem;
                }

                .price {
                    margin-bottom: 1.5rem;
                }

                .price .amount {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: var(--primary);
                }

                .price .period {
                    margin-left: 0.5rem;
                    color: var(--muted-foreground);
                }

                .pricing-card ul {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2rem;
                    display: grid;
                    gap: 1rem;
                }

                .pricing-card li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .pricing-note {
                    margin-top: 3rem;
                    padding: 1.5rem;
                    background: var(--muted);
                    border-radius: 0.5rem;
                    text-align: center;
                    font-size: 1.1rem;
                    font-weight: 600;
                }

                @media (max-width: 768px) {
                    .pricing-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
