use yew::prelude::*;
use web_sys::MouseEvent;

use crate::pages::sections::{CtaSection, Hero};

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "What does an accessibility audit include?",
        answer: "We test your key user journeys with automated tools, manual keyboard and screen reader checks, and a review against every WCAG 2.2 AA success criterion. You receive a prioritised report with code-level fixes.",
    },
    FaqEntry {
        question: "How long does it take to become compliant?",
        answer: "Most teams close their critical issues within six to ten weeks. The timeline depends on the size of the product and how much of the work your own engineers take on.",
    },
    FaqEntry {
        question: "Do you work with our existing design system?",
        answer: "Yes. We review your components where they live, whether that is Figma, Storybook or production code, and help you fix patterns once so every page benefits.",
    },
    FaqEntry {
        question: "Is an automated scan enough?",
        answer: "No. Automated tools catch roughly a third of real barriers. A free scan is a useful starting point, but only manual testing with assistive technology shows how people actually experience your site.",
    },
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: AttrValue,
    answer: AttrValue,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    let answer_id = format!("faq-answer-{}", props.index);

    html! {
        <div class={classes!("faq-item", "border-b", "border-slate-200", is_open.then(|| "open"))}>
            <h3>
                <button
                    type="button"
                    class="faq-question flex w-full items-center justify-between py-6 text-left text-lg font-semibold text-slate-900 focus:outline-none focus-visible:ring-2 focus-visible:ring-indigo-600"
                    aria-expanded={if *is_open { "true" } else { "false" }}
                    aria-controls={answer_id.clone()}
                    onclick={toggle}
                >
                    <span class="question-text">{&props.question}</span>
                    <span class="toggle-icon ml-4 text-2xl" aria-hidden="true">{if *is_open { "−" } else { "+" }}</span>
                </button>
            </h3>
            <div id={answer_id} class={classes!("faq-answer", "pb-6", "text-slate-700", (!*is_open).then(|| "hidden"))}>
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    html! {
        <section class="faq-section bg-white py-24" aria-labelledby="faq-heading">
            <div class="mx-auto max-w-3xl px-6">
                <h2 id="faq-heading" class="mb-12 text-center text-4xl font-bold text-slate-900">
                    {"Frequently Asked Questions"}
                </h2>
                { for FAQ_ENTRIES.iter().enumerate().map(|(i, entry)| html! {
                    <FaqItem
                        key={entry.question}
                        index={i}
                        question={entry.question}
                        answer={entry.answer}
                    />
                }) }
            </div>
        </section>
    }
}

#[function_component(FaqPage)]
pub fn faq_page() -> Html {
    html! {
        <div class="faq-page">
            <Hero
                title="Questions, Answered"
                subtitle="Everything you need to know before starting your accessibility work with us."
                cta_label="Ask us directly"
            />
            <FaqSection />
            <CtaSection />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn renders_every_entry_in_order() {
        let html = ServerRenderer::<FaqSection>::new()
            .hydratable(false)
            .render()
            .await;

        assert_eq!(FAQ_ENTRIES.len(), 4);
        assert_eq!(html.matches("faq-question").count(), 4);
        assert_eq!(html.matches(r#"class="faq-answer"#).count(), 4);

        let mut last = 0;
        for (i, entry) in FAQ_ENTRIES.iter().enumerate() {
            let q = html.find(entry.question).expect("question rendered verbatim");
            let a = html.find(entry.answer).expect("answer rendered verbatim");
            assert!(q >= last, "question {} out of order", i);
            assert!(a > q, "answer {} precedes its question", i);
            if let Some(next) = FAQ_ENTRIES.get(i + 1) {
                let next_q = html.find(next.question).expect("next question");
                assert!(a < next_q, "answer {} is not paired with its question", i);
            }
            last = a;
        }
    }

    #[tokio::test]
    async fn answers_start_collapsed() {
        let html = ServerRenderer::<FaqSection>::new()
            .hydratable(false)
            .render()
            .await;
        assert_eq!(html.matches(r#"aria-expanded="false""#).count(), 4);
        assert!(html.contains(r#"aria-controls="faq-answer-0""#));
        assert!(html.contains(r#"id="faq-answer-3""#));
    }
}
