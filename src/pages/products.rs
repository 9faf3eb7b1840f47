use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::RevealWatcher;
use crate::config;
use crate::i18n::{t, Lang};

/// Full catalog: category key, then title/details keys per product.
const CATALOG: &[(&str, &[(&str, &str)])] = &[
    (
        "cat_fertilizers",
        &[
            ("prod_urea_title", "prod_urea_details"),
            ("prod_npk_title", "prod_npk_details"),
            ("prod_dap_title", "prod_dap_details"),
            ("prod_map_title", "prod_map_details"),
            ("prod_mop_title", "prod_mop_details"),
            ("prod_ams_title", "prod_ams_details"),
            ("prod_mags_title", "prod_mags_details"),
            ("prod_pn_title", "prod_pn_details"),
        ],
    ),
    (
        "cat_animal_feed",
        &[
            ("prod_corn_title", "prod_corn_details"),
            ("prod_soya_title", "prod_soya_details"),
            ("prod_fish_title", "prod_fish_details"),
            ("prod_wheat_title", "prod_wheat_details"),
            ("prod_sugar_title", "prod_sugar_details"),
            ("prod_rice_title", "prod_rice_details"),
        ],
    ),
    (
        "cat_industrial",
        &[
            ("prod_ammonia_title", "prod_ammonia_details"),
            ("prod_caustic_title", "prod_caustic_details"),
            ("prod_phos_title", "prod_phos_details"),
            ("prod_methanol_title", "prod_methanol_details"),
            ("prod_sodsulf_title", "prod_sodsulf_details"),
        ],
    ),
    (
        "cat_polymers",
        &[
            ("prod_hdpe_title", "prod_hdpe_details"),
            ("prod_pvc_title", "prod_pvc_details"),
            ("prod_ldpe_title", "prod_ldpe_details"),
            ("prod_pet_title", "prod_pet_details"),
        ],
    ),
    (
        "cat_waxes",
        &[
            ("prod_paraffin_title", "prod_paraffin_details"),
            ("prod_jelly_title", "prod_jelly_details"),
            ("prod_baseoil_title", "prod_baseoil_details"),
        ],
    ),
    (
        "cat_minerals",
        &[
            ("prod_chromium_title", "prod_chromium_details"),
            ("prod_dicopper_title", "prod_dicopper_details"),
            ("prod_copper_title", "prod_copper_details"),
            ("prod_zinc_title", "prod_zinc_details"),
        ],
    ),
    (
        "cat_dyes",
        &[
            ("prod_sles_title", "prod_sles_details"),
            ("prod_sulphur_title", "prod_sulphur_details"),
        ],
    ),
];

#[function_component(Products)]
pub fn products() -> Html {
    let lang = use_context::<Lang>().unwrap_or_default();
    let selected = use_state_eq(|| None::<usize>);

    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    // Filter and language changes remount cards, so the watcher restarts
    // to pick up the fresh nodes.
    use_effect_with_deps(
        |_| {
            let watcher = RevealWatcher::start();
            move || {
                if let Some(watcher) = watcher {
                    watcher.stop();
                }
            }
        },
        (lang, *selected),
    );

    let on_download = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        let text = format!(
            "{}\n\n{}: {}\n{}: {}\n{}: {}",
            t(lang, "catalog_dialog"),
            t(lang, "contact_phone_label"),
            config::CONTACT_PHONE,
            t(lang, "contact_email_label"),
            config::CONTACT_EMAIL,
            t(lang, "contact_whatsapp_label"),
            config::CONTACT_WHATSAPP,
        );
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&text);
        }
    });

    let filter_button = |target: Option<usize>, label_key: &'static str| -> Html {
        let onclick = {
            let selected = selected.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                selected.set(target);
            })
        };
        let class = if *selected == target {
            "filter-button active"
        } else {
            "filter-button"
        };
        html! {
            <button {class} {onclick}>{t(lang, label_key)}</button>
        }
    };

    html! {
        <div class="products-page">
            <section class="page-hero">
                <h1>{t(lang, "products_page_title")}</h1>
                <p>{t(lang, "products_page_subtitle")}</p>
                <button class="btn btn-primary" onclick={on_download}>
                    {t(lang, "btn_download_catalog")}
                </button>
            </section>

            <section class="catalog">
                <aside class="category-filter">
                    <h3>{t(lang, "cat_filter_title")}</h3>
                    { filter_button(None, "cat_all") }
                    { for CATALOG.iter().enumerate().map(|(index, &(category, _))| {
                        filter_button(Some(index), category)
                    }) }
                </aside>

                <div class="catalog-groups">
                    { for CATALOG.iter().enumerate()
                        .filter(|(index, _)| selected.is_none() || *selected == Some(*index))
                        .map(|(index, &(category, products))| html! {
                            <div class="catalog-group" key={index}>
                                <h2>{t(lang, category)}</h2>
                                <div class="products-grid">
                                    { for products.iter().map(|&(title, details)| html! {
                                        <div class="product-card fade-in" key={title}>
                                            <h3>{t(lang, title)}</h3>
                                            <p class="product-details">{t(lang, details)}</p>
                                        </div>
                                    }) }
                                </div>
                            </div>
                        })
                    }
                </div>
            </section>

            <style>
                {r#"
                    .page-hero {
                        padding: 9rem 2rem 4rem;
                        text-align: center;
                        background: linear-gradient(160deg, #1b4332, #2d6a4f);
                        color: #fff;
                    }
                    .page-hero h1 {
                        font-size: 2.4rem;
                        margin-bottom: 0.8rem;
                    }
                    .page-hero p {
                        opacity: 0.9;
                        margin-bottom: 1.8rem;
                    }
                    .catalog {
                        display: flex;
                        gap: 2.5rem;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 4rem 2rem;
                        align-items: flex-start;
                    }
                    .category-filter {
                        flex: 0 0 220px;
                        position: sticky;
                        top: 90px;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .filter-button {
                        padding: 0.6rem 1rem;
                        border: 1px solid #d8e2dc;
                        border-radius: 8px;
                        background: #fff;
                        text-align: left;
                        cursor: pointer;
                    }
                    .filter-button.active {
                        background: #2d6a4f;
                        border-color: #2d6a4f;
                        color: #fff;
                    }
                    .catalog-groups {
                        flex: 1;
                    }
                    .catalog-group {
                        margin-bottom: 3rem;
                    }
                    .catalog-group h2 {
                        margin-bottom: 1.5rem;
                    }
                    .products-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 1.5rem;
                    }
                    .product-card {
                        background: #fff;
                        border-radius: 10px;
                        padding: 1.8rem;
                        box-shadow: 0 4px 14px rgba(0, 0, 0, 0.08);
                    }
                    .product-details {
                        color: #555;
                        line-height: 1.6;
                    }
                    @media (max-width: 768px) {
                        .catalog {
                            flex-direction: column;
                        }
                        .category-filter {
                            position: static;
                            flex-direction: row;
                            flex-wrap: wrap;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::CATALOG;
    use crate::i18n::{lookup, Lang};

    #[test]
    fn catalog_covers_seven_categories_and_thirty_two_products() {
        assert_eq!(CATALOG.len(), 7);
        let total: usize = CATALOG.iter().map(|&(_, products)| products.len()).sum();
        assert_eq!(total, 32);
    }

    #[test]
    fn every_catalog_key_is_translated_in_both_languages() {
        for &(category, products) in CATALOG {
            for lang in [Lang::En, Lang::Fr] {
                assert!(lookup(lang, category).is_some(), "missing {category}");
                for &(title, details) in products {
                    assert!(lookup(lang, title).is_some(), "missing {title}");
                    assert!(lookup(lang, details).is_some(), "missing {details}");
                }
            }
        }
    }
}
