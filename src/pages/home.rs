use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::faq::FaqSection;
use crate::components::reveal::RevealWatcher;
use crate::config;
use crate::i18n::{t, Lang};
use crate::scroll;
use crate::Route;

/// Title/description keys for the three value cards.
const VALUES: &[(&str, &str)] = &[
    ("val_quality_title", "val_quality_desc"),
    ("val_consistency_title", "val_consistency_desc"),
    ("val_performance_title", "val_performance_desc"),
];

/// Title/description keys for the six category preview cards.
const PRODUCT_PREVIEWS: &[(&str, &str)] = &[
    ("prod_fert_title", "prod_fert_desc"),
    ("prod_feed_title", "prod_feed_desc"),
    ("prod_chem_title", "prod_chem_desc"),
    ("prod_grain_title", "prod_grain_desc"),
    ("prod_crop_title", "prod_crop_desc"),
    ("prod_dairy_title", "prod_dairy_desc"),
];

#[function_component(Home)]
pub fn home() -> Html {
    let lang = use_context::<Lang>().unwrap_or_default();

    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            let watcher = RevealWatcher::start();
            move || {
                if let Some(watcher) = watcher {
                    watcher.stop();
                }
            }
        },
        (),
    );

    let scroll_to_contact = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll::scroll_to_fragment("contact");
    });

    html! {
        <div class="home-page">
            <section id="home" class="hero">
                <div class="hero-content">
                    <h1>{t(lang, "hero_title")}</h1>
                    <p class="hero-subtitle">{t(lang, "hero_subtitle")}</p>
                    <div class="hero-buttons">
                        <Link<Route> to={Route::Products} classes="btn btn-primary">
                            {t(lang, "btn_products")}
                        </Link<Route>>
                        <button class="btn btn-secondary" onclick={scroll_to_contact.clone()}>
                            {t(lang, "btn_contact")}
                        </button>
                    </div>
                </div>
            </section>

            <section id="values" class="values">
                <h2>{t(lang, "values_title")}</h2>
                <div class="values-grid">
                    { for VALUES.iter().map(|&(title, desc)| html! {
                        <div class="value-card fade-in" key={title}>
                            <h3>{t(lang, title)}</h3>
                            <p>{t(lang, desc)}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="about" class="about">
                <h2>{t(lang, "about_title")}</h2>
                <div class="about-content fade-in">
                    <h3>{t(lang, "about_subtitle")}</h3>
                    <p>{t(lang, "about_text_1")}</p>
                    <p>{t(lang, "about_text_2")}</p>
                    <p>{t(lang, "about_text_3")}</p>
                </div>
            </section>

            <section id="products" class="products-preview">
                <h2>{t(lang, "products_title")}</h2>
                <div class="products-grid">
                    { for PRODUCT_PREVIEWS.iter().map(|&(title, desc)| html! {
                        <div class="product-card fade-in" key={title}>
                            <h3>{t(lang, title)}</h3>
                            <p>{t(lang, desc)}</p>
                            <div class="card-actions">
                                <Link<Route> to={Route::Products} classes="btn btn-small">
                                    {t(lang, "btn_learn_more")}
                                </Link<Route>>
                                <button class="btn btn-small btn-outline" onclick={scroll_to_contact.clone()}>
                                    {t(lang, "btn_request_quote")}
                                </button>
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <section id="faq" class="faq">
                <h2>{t(lang, "faq_title")}</h2>
                <FaqSection {lang} />
            </section>

            <section id="contact" class="contact">
                <h2>{t(lang, "contact_title")}</h2>
                <div class="contact-grid">
                    <ContactForm {lang} />
                    <div class="get-in-touch fade-in">
                        <h3>{t(lang, "get_touch_title")}</h3>
                        <p><strong>{t(lang, "contact_addr_label")}</strong>{": "}{config::CONTACT_ADDRESS}</p>
                        <p><strong>{t(lang, "contact_phone_label")}</strong>{": "}{config::CONTACT_PHONE}</p>
                        <p><strong>{t(lang, "contact_email_label")}</strong>{": "}{config::CONTACT_EMAIL}</p>
                        <p><strong>{t(lang, "contact_whatsapp_label")}</strong>{": "}{config::CONTACT_WHATSAPP}</p>
                    </div>
                </div>
            </section>

            <footer class="site-footer">
                <p>{"Agrochemicals Consulting, Conakry"}</p>
            </footer>

            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 6rem 2rem 4rem;
                        background: linear-gradient(160deg, #1b4332, #2d6a4f);
                        color: #fff;
                    }
                    .hero h1 {
                        font-size: 2.8rem;
                        margin-bottom: 1rem;
                    }
                    .hero-subtitle {
                        font-size: 1.2rem;
                        opacity: 0.9;
                        margin-bottom: 2rem;
                    }
                    .hero-buttons {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        flex-wrap: wrap;
                    }
                    .values, .about, .products-preview, .faq, .contact {
                        padding: 5rem 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .values h2, .about h2, .products-preview h2, .faq h2, .contact h2 {
                        text-align: center;
                        margin-bottom: 2.5rem;
                    }
                    .values-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 1.5rem;
                    }
                    .value-card {
                        background: #fff;
                        border-radius: 10px;
                        padding: 2rem;
                        box-shadow: 0 4px 14px rgba(0, 0, 0, 0.08);
                    }
                    .about-content p {
                        margin-bottom: 1rem;
                        line-height: 1.7;
                    }
                    .products-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 1.5rem;
                    }
                    .product-card {
                        background: #fff;
                        border-radius: 10px;
                        padding: 1.8rem;
                        box-shadow: 0 4px 14px rgba(0, 0, 0, 0.08);
                    }
                    .card-actions {
                        display: flex;
                        gap: 0.8rem;
                        margin-top: 1.2rem;
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 2.5rem;
                        align-items: start;
                    }
                    .get-in-touch p {
                        margin-bottom: 0.8rem;
                    }
                    .site-footer {
                        text-align: center;
                        padding: 2rem;
                        background: #1b4332;
                        color: #fff;
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{PRODUCT_PREVIEWS, VALUES};
    use crate::i18n::{lookup, Lang};

    #[test]
    fn preview_cards_are_translated_in_both_languages() {
        for &(title, desc) in VALUES.iter().chain(PRODUCT_PREVIEWS) {
            for lang in [Lang::En, Lang::Fr] {
                assert!(lookup(lang, title).is_some(), "missing {title}");
                assert!(lookup(lang, desc).is_some(), "missing {desc}");
            }
        }
    }
}
