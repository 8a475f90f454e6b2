use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub mod config;
pub mod error;
pub mod rate_limiter;
pub mod sanitize;
pub mod validation;
pub mod contact {
    pub mod client;
    pub mod form;
    pub mod models;
    pub mod submission;
}
pub mod seo {
    pub mod head;
    pub mod hook;
    pub mod meta;
}
pub mod components {
    pub mod countdown;
    pub mod notification;
    pub mod scroll_to_top;
}
pub mod pages {
    pub mod contact;
    pub mod home;
    pub mod not_found;
}

use components::scroll_to_top::ScrollToTop;
use pages::{
    contact::ContactPage,
    home::{Home, BUSINESS_NAME},
    not_found::NotFound,
};
use rate_limiter::{RateLimiter, SharedRateLimiter};

const SCROLLED_THRESHOLD_PX: i32 = 80;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route, limiter: SharedRateLimiter) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage {limiter} /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.clone().and_then(|window| {
                let document = window.document()?;
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document
                        .document_element()
                        .map(|el| el.scroll_top())
                        .unwrap_or(0);
                    is_scrolled.set(scroll_top > SCROLLED_THRESHOLD_PX);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .ok()?;
                Some(scroll_callback)
            });

            move || {
                if let (Some(window), Some(callback)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {BUSINESS_NAME}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Services"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Contact} classes="nav-login-button">
                            {"Contact"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
pub fn App() -> Html {
    // One limiter per visitor session, owned here and lent to the contact form
    let limiter = use_memo(|_| SharedRateLimiter::new(RateLimiter::default()), ());
    let limiter = (*limiter).clone();

    let render = Callback::from(move |route: Route| switch(route, limiter.clone()));

    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> {render} />
            <ScrollToTop />
        </BrowserRouter>
    }
}
