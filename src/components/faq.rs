use web_sys::MouseEvent;
use yew::prelude::*;

use crate::i18n::{t, Lang};

/// Question/answer translation keys, in display order.
pub const FAQ_ITEMS: &[(&str, &str)] = &[
    ("faq_q1", "faq_a1"),
    ("faq_q2", "faq_a2"),
    ("faq_q3", "faq_a3"),
    ("faq_q4", "faq_a4"),
    ("faq_q5", "faq_a5"),
    ("faq_q6", "faq_a6"),
    ("faq_q7", "faq_a7"),
    ("faq_q8", "faq_a8"),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: &'static str,
    answer: &'static str,
    open: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <div class={classes!("faq-item", if props.open { "active" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqSectionProps {
    pub lang: Lang,
}

/// State after clicking item `clicked`: the open item closes, anything else
/// becomes the one open item.
fn next_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// The accordion: opening an item closes whichever one was open before, so
/// at most one answer shows at a time.
#[function_component(FaqSection)]
pub fn faq_section(props: &FaqSectionProps) -> Html {
    let open = use_state(|| None::<usize>);

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |index: usize| {
            open.set(next_open(*open, index));
        })
    };

    let lang = props.lang;
    html! {
        <div class="faq-list">
            { for FAQ_ITEMS.iter().enumerate().map(|(index, &(question, answer))| html! {
                <FaqItem
                    key={index}
                    {index}
                    question={t(lang, question)}
                    answer={t(lang, answer)}
                    open={*open == Some(index)}
                    on_toggle={on_toggle.clone()}
                />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{next_open, FAQ_ITEMS};
    use crate::i18n::{lookup, Lang};

    #[test]
    fn eight_items() {
        assert_eq!(FAQ_ITEMS.len(), 8);
    }

    #[test]
    fn opening_a_second_item_closes_the_first() {
        let open = next_open(None, 2);
        assert_eq!(open, Some(2));
        assert_eq!(next_open(open, 5), Some(5));
    }

    #[test]
    fn clicking_the_open_item_leaves_none_open() {
        assert_eq!(next_open(Some(3), 3), None);
    }

    #[test]
    fn every_item_is_translated_in_both_languages() {
        for &(question, answer) in FAQ_ITEMS {
            for lang in [Lang::En, Lang::Fr] {
                assert!(lookup(lang, question).is_some(), "missing {question}");
                assert!(lookup(lang, answer).is_some(), "missing {answer}");
            }
        }
    }
}
