//! Keeps `<head>` in step with the current page's [`PageMeta`].
//!
//! [`HeadState`] is the desired head for one route; [`reconcile`] pushes it
//! into anything implementing [`HeadDocument`]. Tags are located by selector
//! and updated in place, so reconciling the same state any number of times
//! leaves one description, one canonical link and one robots tag at most.
//! Structured-data scripts we inject carry [`STRUCTURED_DATA_MARKER`] and are
//! replaced wholesale; scripts without the marker are never touched.

use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlHeadElement};

use crate::seo::meta::PageMeta;

pub const STRUCTURED_DATA_MARKER: &str = "data-page-meta";
pub const NOINDEX: &str = "noindex, nofollow";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadState {
    pub title: Option<String>,
    pub description: String,
    pub keywords: Option<String>,
    pub canonical: String,
    pub robots: Option<&'static str>,
    pub structured_data: Vec<String>,
}

impl HeadState {
    pub fn from_meta(meta: &PageMeta, origin: &str, pathname: &str) -> Self {
        let canonical = meta
            .canonical
            .clone()
            .unwrap_or_else(|| format!("{}{}", origin.trim_end_matches('/'), pathname));

        let structured_data = meta
            .structured_data
            .iter()
            .filter_map(|item| match serde_json::to_string(item) {
                Ok(json) => Some(json),
                Err(e) => {
                    log::warn!("Skipping structured data that failed to serialize: {}", e);
                    None
                }
            })
            .collect();

        Self {
            title: Some(meta.title.clone()).filter(|t| !t.is_empty()),
            description: meta.description.clone(),
            keywords: meta.keywords.clone(),
            canonical,
            robots: meta.noindex.then_some(NOINDEX),
            structured_data,
        }
    }
}

pub trait HeadDocument {
    fn set_title(&mut self, title: &str);
    fn upsert_meta(&mut self, name: &str, content: &str);
    fn remove_meta(&mut self, name: &str);
    fn upsert_canonical(&mut self, href: &str);
    /// Removes only the scripts previously added by `push_structured_data`.
    fn clear_structured_data(&mut self);
    fn push_structured_data(&mut self, json: &str);
}

pub fn reconcile<D: HeadDocument + ?Sized>(doc: &mut D, state: &HeadState) {
    if let Some(title) = &state.title {
        doc.set_title(title);
    }

    doc.upsert_meta("description", &state.description);

    match &state.keywords {
        Some(keywords) => doc.upsert_meta("keywords", keywords),
        None => doc.remove_meta("keywords"),
    }

    doc.upsert_canonical(&state.canonical);

    match state.robots {
        Some(robots) => doc.upsert_meta("robots", robots),
        None => doc.remove_meta("robots"),
    }

    doc.clear_structured_data();
    for json in &state.structured_data {
        doc.push_structured_data(json);
    }
}

/// [`HeadDocument`] over the live browser document.
pub struct BrowserHead {
    document: Document,
    head: HtmlHeadElement,
}

impl BrowserHead {
    pub fn new() -> Option<Self> {
        let document = window()?.document()?;
        let head = document.head()?;
        Some(Self { document, head })
    }

    fn find(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn find_or_create(&self, selector: &str, tag: &str, attrs: &[(&str, &str)]) -> Option<Element> {
        if let Some(el) = self.find(selector) {
            return Some(el);
        }
        let el = self.document.create_element(tag).ok()?;
        for (name, value) in attrs {
            let _ = el.set_attribute(name, value);
        }
        if let Err(e) = self.head.append_child(&el) {
            log::warn!("Failed to append <{}> to head: {:?}", tag, e);
            return None;
        }
        Some(el)
    }
}

impl HeadDocument for BrowserHead {
    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn upsert_meta(&mut self, name: &str, content: &str) {
        let selector = format!("meta[name=\"{}\"]", name);
        if let Some(el) = self.find_or_create(&selector, "meta", &[("name", name)]) {
            let _ = el.set_attribute("content", content);
        }
    }

    fn remove_meta(&mut self, name: &str) {
        if let Some(el) = self.find(&format!("meta[name=\"{}\"]", name)) {
            el.remove();
        }
    }

    fn upsert_canonical(&mut self, href: &str) {
        if let Some(el) = self.find_or_create("link[rel=\"canonical\"]", "link", &[("rel", "canonical")]) {
            let _ = el.set_attribute("href", href);
        }
    }

    fn clear_structured_data(&mut self) {
        let selector = format!("script[type=\"application/ld+json\"][{}]", STRUCTURED_DATA_MARKER);
        let Ok(nodes) = self.document.query_selector_all(&selector) else {
            return;
        };
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                el.remove();
            }
        }
    }

    fn push_structured_data(&mut self, json: &str) {
        let Ok(script) = self.document.create_element("script") else {
            return;
        };
        let _ = script.set_attribute("type", "application/ld+json");
        let _ = script.set_attribute(STRUCTURED_DATA_MARKER, "true");
        script.set_text_content(Some(json));
        if let Err(e) = self.head.append_child(&script) {
            log::warn!("Failed to append structured data: {:?}", e);
        }
    }
}

/// Applies `meta` to the browser head for the route at `pathname`.
pub fn sync_head(meta: &PageMeta, pathname: &str) {
    let Some(mut head) = BrowserHead::new() else {
        log::warn!("No document head available, skipping page metadata");
        return;
    };
    let origin = window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    let state = HeadState::from_meta(meta, &origin, pathname);
    log::debug!("Applying page metadata for {}", pathname);
    reconcile(&mut head, &state);
}
