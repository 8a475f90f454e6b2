use yew::prelude::*;
use yew_router::prelude::*;

use crate::seo::hook::use_page_meta;
use crate::seo::meta::PageMeta;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_page_meta(PageMeta::new("Page not found", "This page does not exist.").noindex());

    html! {
        <div class="not-found" style="min-height: 70vh; display: flex; flex-direction: column; align-items: center; justify-content: center; color: #fff;">
            <h1>{"404"}</h1>
            <p>{"We couldn't find that page."}</p>
            <Link<Route> to={Route::Home} classes="forward-link">
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}
