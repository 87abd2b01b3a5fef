use yew::prelude::*;

use crate::shell::FaqState;

pub const FAQS: [(&str, &str); 5] = [
    (
        "Won't customers notice price changes?",
        "Changes are typically 2-5% and happen gradually. In 3 years of operation, we've had zero customer complaints about price adjustments. The smoothing algorithm ensures changes are virtually invisible to customers.",
    ),
    (
        "What if prices go too high?",
        "You set the maximum cap (usually 15%). MCD will never exceed your comfort zone, and the self-balancing nature brings prices down if sales drop. You have complete control over the limits.",
    ),
    (
        "How quickly will I see results?",
        "Most businesses see margin improvements within the first week. Full optimization typically occurs within 30 days as the system learns your marketing patterns.",
    ),
    (
        "Does this work with my platform?",
        "MCD integrates with Shopify, WooCommerce, BigCommerce, and custom platforms via API. Setup takes less than 10 minutes with our guided integration.",
    ),
    (
        "Can I exclude certain products?",
        "Yes, you have complete control over which products use MCD pricing. You can exclude specific products, categories, or set different rules for different product lines.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}

/// Accordion of the questions above; opening one closes the others.
#[function_component(FaqList)]
pub fn faq_list() -> Html {
    let state = use_state(FaqState::default);

    html! {
        <div class="faq-list">
            {
                for FAQS.iter().enumerate().map(|(index, (question, answer))| {
                    let on_toggle = {
                        let state = state.clone();
                        Callback::from(move |_| {
                            let mut next = *state;
                            next.toggle(index);
                            state.set(next);
                        })
                    };
                    html! {
                        <FaqItem
                            key={index}
                            question={*question}
                            answer={*answer}
                            open={state.is_open(index)}
                            {on_toggle}
                        />
                    }
                })
            }
        </div>
    }
}
