use yew::prelude::*;

use crate::content::{FaqEntry, FAQ_ENTRIES};

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: AttrValue,
    pub answer: AttrValue,
}

/// One question/answer pair rendered as a `<details>` element. The browser keeps
/// the open flag; entries share no `name`, so any number can be open at once.
#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    html! {
        <details class="faq-item">
            <summary class="faq-question">
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{"⌄"}</span>
            </summary>
            <p class="faq-answer">{&props.answer}</p>
        </details>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    #[prop_or(FAQ_ENTRIES)]
    pub entries: &'static [FaqEntry],
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    html! {
        <div class="faq-list">
            { for props.entries.iter().map(|entry| html! {
                <FaqItem question={entry.question} answer={entry.answer} />
            }) }

            <style>
                {r#"
                .faq-list {
                    display: grid;
                    gap: 1.5rem;
                }

                .faq-item {
                    background: #ffffff;
                    border: 1px solid var(--border);
                    border-radius: 0.5rem;
                    padding: 1.5rem;
                    cursor: pointer;
                    transition: border-color 0.2s ease;
                }

                .faq-item:hover {
                    border-color: rgba(30, 64, 175, 0.5);
                }

                .faq-question {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    list-style: none;
                    font-size: 1.1rem;
                    font-weight: 600;
                }

                .faq-question::-webkit-details-marker {
                    display: none;
                }

                .toggle-icon {
                    transition: transform 0.2s ease;
                }

                .faq-item[open] .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    margin: 1rem 0 0;
                    color: var(--muted-foreground);
                    line-height: 1.6;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    const CLOSED_ITEM: &str = r#"<details class="faq-item">"#;

    #[tokio::test]
    async fn item_is_a_collapsed_native_disclosure() {
        let html = ServerRenderer::<FaqItem>::with_props(|| FaqItemProps {
            question: "How long does a website project take?".into(),
            answer: "Typically 3-4 weeks from kickoff to launch.".into(),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains(CLOSED_ITEM), "{html}");
        assert!(html.contains(r#"<summary class="faq-question">"#));
        assert!(html.contains("How long does a website project take?"));
        // The answer is always in the markup; the closed `<details>` hides it.
        assert!(html.contains("Typically 3-4 weeks from kickoff to launch."));
        assert!(!html.contains("<button"));
    }

    #[tokio::test]
    async fn every_entry_starts_closed_and_ungrouped() {
        let html = ServerRenderer::<FaqList>::with_props(|| FaqListProps { entries: FAQ_ENTRIES })
            .hydratable(false)
            .render()
            .await;

        assert_eq!(html.matches("<details").count(), FAQ_ENTRIES.len());
        assert_eq!(html.matches(CLOSED_ITEM).count(), FAQ_ENTRIES.len());
        assert_eq!(html.matches(r#"<p class="faq-answer">"#).count(), FAQ_ENTRIES.len());
        // A shared `name` would make the browser close the others when one opens.
        assert!(!html.contains("name="));
        for entry in FAQ_ENTRIES {
            assert!(html.contains(entry.question), "missing {}", entry.question);
        }
    }

    #[tokio::test]
    async fn list_renders_the_entries_it_is_given() {
        const ONE: &[FaqEntry] = &[FaqEntry {
            question: "Do you require long contracts?",
            answer: "No contracts.",
        }];

        let html = ServerRenderer::<FaqList>::with_props(|| FaqListProps { entries: ONE })
            .hydratable(false)
            .render()
            .await;

        assert_eq!(html.matches(CLOSED_ITEM).count(), 1);
        assert!(html.contains("No contracts."));
    }
}
