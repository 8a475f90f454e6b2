use yew::prelude::*;
use yew_router::prelude::*;

use crate::seo::head::sync_head;
use crate::seo::meta::PageMeta;

/// Re-applies `meta` to the document head whenever the path or the
/// metadata itself changes.
#[hook]
pub fn use_page_meta(meta: PageMeta) {
    let pathname = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    use_effect_with_deps(
        move |(pathname, meta)| {
            sync_head(meta, pathname);
            || ()
        },
        (pathname, meta),
    );
}
