use serde_json::json;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::seo::hook::use_page_meta;
use crate::seo::meta::PageMeta;
use crate::Route;

pub const BUSINESS_NAME: &str = "Southern Cross ICT Support";

struct SupportFeature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: &[SupportFeature] = &[
    SupportFeature {
        icon: "🛠️",
        title: "Managed IT Support",
        body: "Proactive monitoring, patching and a helpdesk that picks up the phone.",
    },
    SupportFeature {
        icon: "🌐",
        title: "Networks & Wi-Fi",
        body: "Office networks designed, installed and documented so they keep working.",
    },
    SupportFeature {
        icon: "🔒",
        title: "Cybersecurity",
        body: "Backups, MFA and endpoint protection sized for small and medium business.",
    },
    SupportFeature {
        icon: "☁️",
        title: "Cloud & Microsoft 365",
        body: "Migrations, licensing and day-to-day administration handled for you.",
    },
];

pub fn home_meta() -> PageMeta {
    PageMeta::new(
        format!("{} | IT support for small business", BUSINESS_NAME),
        "Friendly, local ICT support in Australia and South Africa: managed IT, networks, \
         cybersecurity and Microsoft 365.",
    )
    .keywords("ict support, managed it services, network setup, cybersecurity, microsoft 365")
    .structured_data(json!({
        "@context": "https://schema.org",
        "@type": "ProfessionalService",
        "name": BUSINESS_NAME,
        "areaServed": ["AU", "ZA"],
        "serviceType": FEATURES.iter().map(|f| f.title).collect::<Vec<_>>(),
    }))
}

#[function_component(Home)]
pub fn home() -> Html {
    use_page_meta(home_meta());

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-background"></div>
                <div class="hero-content">
                    <h1>{"IT support that speaks your language"}</h1>
                    <p class="hero-subtitle">
                        {"We keep your computers, networks and cloud services running so you can get back to running your business."}
                    </p>
                    <div class="hero-cta-group">
                        <Link<Route> to={Route::Contact} classes="forward-link">
                            <button class="hero-cta">{"Get in touch"}</button>
                        </Link<Route>>
                    </div>
                </div>
            </header>

            <section class="acknowledgement">
                <p>
                    {"We acknowledge the Traditional Custodians of the lands on which we work and live, and pay our respects to Elders past and present."}
                </p>
            </section>

            <section class="features">
                <h2>{"How we can help"}</h2>
                <div class="features-grid">
                    { for FEATURES.iter().map(|f| html! {
                        <div class="feature-item">
                            <span class="feature-icon">{f.icon}</span>
                            <h3>{f.title}</h3>
                            <p>{f.body}</p>
                        </div>
                    }) }
                </div>
                <Link<Route> to={Route::Contact} classes="forward-link">
                    {"Tell us what you need →"}
                </Link<Route>>
            </section>

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #1a1a1a;
                    color: #ffffff;
                    overflow-x: hidden;
                }
                .hero {
                    position: relative;
                    min-height: 80vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 6rem 2rem;
                    text-align: center;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(120deg, #0d1b2a, #1b263b, #0d1b2a);
                    background-size: 300% 300%;
                    -webkit-animation: drift 18s ease infinite;
                    animation: drift 18s ease infinite;
                    z-index: 0;
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 720px;
                }
                .hero h1 {
                    font-size: 3rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle {
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 1.2rem;
                    margin: 1.5rem 0 2rem;
                }
                .hero-cta {
                    padding: 0.9rem 2rem;
                    border-radius: 8px;
                    border: none;
                    background: #1E90FF;
                    color: #fff;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .acknowledgement {
                    padding: 2rem;
                    text-align: center;
                    font-style: italic;
                    color: rgba(255, 255, 255, 0.7);
                    border-top: 1px solid rgba(30, 144, 255, 0.1);
                    border-bottom: 1px solid rgba(30, 144, 255, 0.1);
                }
                .features {
                    padding: 4rem 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    text-align: center;
                }
                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                    margin: 2rem 0;
                }
                .feature-item {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                    padding: 1.5rem;
                }
                .feature-icon { font-size: 2rem; }
                .forward-link { color: #7EB2FF; text-decoration: none; }
                @-webkit-keyframes drift {
                    0% { background-position: 0% 50%; }
                    50% { background-position: 100% 50%; }
                    100% { background-position: 0% 50%; }
                }
                @keyframes drift {
                    0% { background-position: 0% 50%; }
                    50% { background-position: 100% 50%; }
                    100% { background-position: 0% 50%; }
                }
                @media (max-width: 768px) {
                    .hero h1 { font-size: 2.2rem; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_meta_describes_the_business() {
        let meta = home_meta();
        assert!(meta.title.starts_with(BUSINESS_NAME));
        assert!(!meta.noindex);
        assert_eq!(meta.structured_data.len(), 1);
        assert_eq!(meta.structured_data[0]["serviceType"][0], "Managed IT Support");
    }
}
