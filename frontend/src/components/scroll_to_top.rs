use web_sys::{window, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

const SHOW_AFTER_PX: f64 = 300.0;

#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let (_, y) = use_window_scroll();

    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(window) = window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    if y <= SHOW_AFTER_PX {
        return html! {};
    }

    html! {
        <>
            <style>
                {r#"
                .scroll-to-top {
                    position: fixed;
                    bottom: 2rem;
                    left: 2rem;
                    width: 44px;
                    height: 44px;
                    border-radius: 50%;
                    border: 1px solid rgba(30, 144, 255, 0.3);
                    background: rgba(30, 30, 30, 0.8);
                    color: #7EB2FF;
                    font-size: 1.25rem;
                    cursor: pointer;
                    -webkit-backdrop-filter: blur(10px);
                    backdrop-filter: blur(10px);
                    z-index: 900;
                }
                "#}
            </style>
            <button class="scroll-to-top" {onclick} aria-label="Scroll to top">{"↑"}</button>
        </>
    }
}
