use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::scroll;

/// Floating control that appears once the page has been scrolled well past
/// the hero. Visibility runs on its own unthrottled listener, separate from
/// the nav's unified handler.
#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                let scroll_callback = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        let y = window.scroll_y().unwrap_or(0.0);
                        visible.set(scroll::back_to_top_visible(y));
                    }) as Box<dyn FnMut()>)
                };

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll::scroll_to_top();
    });

    html! {
        <button
            id="backToTop"
            class={classes!("back-to-top", (*visible).then(|| "show"))}
            {onclick}
            aria-label="Back to top"
        >
            {"↑"}
        </button>
    }
}
