use serde_json::json;
use yew::prelude::*;

use crate::contact::form::ContactForm;
use crate::pages::home::BUSINESS_NAME;
use crate::rate_limiter::SharedRateLimiter;
use crate::seo::hook::use_page_meta;
use crate::seo::meta::PageMeta;

#[derive(Properties, PartialEq)]
pub struct ContactPageProps {
    pub limiter: SharedRateLimiter,
}

pub fn contact_meta() -> PageMeta {
    PageMeta::new(
        format!("Contact | {}", BUSINESS_NAME),
        "Send us a message and our Australian or South African team will get back to you within one business day.",
    )
    .keywords("contact ict support, it help, book a technician")
    .structured_data(json!({
        "@context": "https://schema.org",
        "@type": "ContactPage",
        "name": format!("Contact {}", BUSINESS_NAME),
    }))
}

#[function_component]
pub fn ContactPage(props: &ContactPageProps) -> Html {
    use_page_meta(contact_meta());

    html! {
        <div class="contact-page">
            <div class="contact-container">
                <h1>{"Get in touch"}</h1>
                <p class="contact-subtitle">
                    {"Tell us a little about what you need. Fields marked * are required."}
                </p>
                <ContactForm limiter={props.limiter.clone()} />
            </div>
            <style>
                {r#"
                .contact-page {
                    min-height: 100vh;
                    display: flex;
                    justify-content: center;
                    padding: 6rem 1rem 3rem;
                    background: #1a1a1a;
                    color: #fff;
                }
                .contact-container {
                    width: 100%;
                    max-width: 640px;
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                    padding: 2.5rem;
                    -webkit-backdrop-filter: blur(10px);
                    backdrop-filter: blur(10px);
                }
                .contact-subtitle { color: rgba(255, 255, 255, 0.7); }
                .form-row { margin-bottom: 1.25rem; display: flex; flex-direction: column; }
                .form-row.split { flex-direction: row; gap: 1rem; }
                .form-row.split > div { flex: 1; display: flex; flex-direction: column; }
                .contact-input {
                    padding: 0.75rem;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: rgba(0, 0, 0, 0.3);
                    color: #fff;
                    font: inherit;
                    -webkit-appearance: none;
                    appearance: none;
                }
                .contact-input.invalid { border-color: #e05252; }
                .field-error { color: #ff7b7b; font-size: 0.85rem; margin: 0.35rem 0 0; }
                .form-hint { color: rgba(255, 255, 255, 0.6); font-size: 0.9rem; }
                .contact-submit {
                    width: 100%;
                    padding: 0.9rem;
                    border: none;
                    border-radius: 8px;
                    background: #1E90FF;
                    color: #fff;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .contact-submit:disabled { opacity: 0.6; cursor: not-allowed; }
                .loading-spinner {
                    display: inline-block;
                    width: 16px;
                    height: 16px;
                    border: 3px solid rgba(255,255,255,.3);
                    border-radius: 50%;
                    border-top-color: #fff;
                    animation: spin 1s ease-in-out infinite;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                @media (max-width: 600px) {
                    .form-row.split { flex-direction: column; }
                    .contact-container { padding: 1.5rem; }
                }
                "#}
            </style>
        </div>
    }
}
