use log::{error, info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Date;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod i18n;
mod scroll;
mod components {
    pub mod back_to_top;
    pub mod contact_form;
    pub mod faq;
    pub mod reveal;
}
mod pages {
    pub mod home;
    pub mod products;
}

use components::back_to_top::BackToTop;
use i18n::{t, Lang};
use pages::{home::Home, products::Products};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/products")]
    Products,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Products => {
            info!("Rendering Products page");
            html! { <Products /> }
        }
    }
}

/// Nav label keys and the home sections they scroll to.
const NAV_LINKS: &[(&str, &str)] = &[
    ("nav_home", "home"),
    ("nav_about", "about"),
    ("nav_products", "products"),
    ("nav_faq", "faq"),
    ("nav_contact", "contact"),
];

/// Anchors scroll in place on Home; from any other route they first route
/// back to the page that owns the sections.
fn anchor_reroutes(route: Option<&Route>) -> bool {
    !matches!(route, Some(Route::Home))
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub lang: Lang,
    pub on_switch: Callback<Lang>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);
    let active_section = use_state_eq(|| None::<String>);
    let navigator = use_navigator().unwrap();
    let reroute_anchors = anchor_reroutes(use_route::<Route>().as_ref());

    {
        let is_scrolled = is_scrolled.clone();
        let active_section = active_section.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                // One listener drives the header class, the active link and
                // the hero parallax off a single scrollY read per accepted
                // tick. Dropped ticks do nothing at all.
                let mut throttle = scroll::Throttle::new(scroll::THROTTLE_WINDOW_MS);
                let scroll_callback = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        if !throttle.accept(Date::now()) {
                            return;
                        }
                        let y = window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll::header_scrolled(y));
                        let sections = scroll::measure_sections(&document);
                        active_section
                            .set(scroll::active_section(y, &sections).map(String::from));
                        scroll::apply_hero_parallax(&window, &document, y);
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

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let on_lang = {
        let on_switch = props.on_switch.clone();
        let lang = props.lang;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_switch.emit(lang.other());
        })
    };

    let menu_class = if *menu_open { "nav-menu active" } else { "nav-menu" };
    let burger_class = if *menu_open { "hamburger active" } else { "hamburger" };

    html! {
        <header id="header" class={classes!("header", (*is_scrolled).then(|| "scrolled"))}>
            <nav class="navbar">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Agrochemicals Consulting"}
                </Link<Route>>

                <button class={burger_class} onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|&(key, fragment)| {
                        let menu_open = menu_open.clone();
                        let navigator = navigator.clone();
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            // closing is unconditional, a no-op on desktop
                            menu_open.set(false);
                            if reroute_anchors {
                                navigator.push(&Route::Home);
                                scroll::scroll_to_fragment_on_next_frame(fragment);
                            } else {
                                scroll::scroll_to_fragment(fragment);
                            }
                        });
                        let class = if (*active_section).as_deref() == Some(fragment) {
                            "nav-link active"
                        } else {
                            "nav-link"
                        };
                        html! {
                            <a href={format!("#{fragment}")} {class} {onclick}>
                                {t(props.lang, key)}
                            </a>
                        }
                    }) }
                    <button id="languageToggle" class="lang-toggle" onclick={on_lang}>
                        {props.lang.toggle_label()}
                    </button>
                </div>
            </nav>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    let lang = use_state_eq(i18n::stored_lang);

    {
        let lang = *lang;
        use_effect_with_deps(
            move |lang: &Lang| {
                i18n::remember(*lang);
                i18n::set_document_lang(*lang);
                || ()
            },
            lang,
        );
    }

    let on_switch = {
        let lang = lang.clone();
        Callback::from(move |next: Lang| lang.set(next))
    };

    html! {
        <BrowserRouter>
            <ContextProvider<Lang> context={*lang}>
                <Nav lang={*lang} on_switch={on_switch} />
                <Switch<Route> render={switch} />
                <BackToTop />
            </ContextProvider<Lang>>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    if let Err(keys) = i18n::verify_tables() {
        error!("translation tables disagree on: {keys:?}");
    }

    info!("Starting Agrochemicals Consulting site");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::{anchor_reroutes, Route, NAV_LINKS};
    use crate::i18n::{lookup, Lang};

    #[test]
    fn nav_labels_exist_in_both_languages() {
        for &(key, _) in NAV_LINKS {
            assert!(lookup(Lang::En, key).is_some(), "missing en {key}");
            assert!(lookup(Lang::Fr, key).is_some(), "missing fr {key}");
        }
    }

    #[test]
    fn nav_fragments_name_the_home_sections() {
        let fragments: Vec<&str> = NAV_LINKS.iter().map(|&(_, fragment)| fragment).collect();
        assert_eq!(fragments, ["home", "about", "products", "faq", "contact"]);
    }

    #[test]
    fn anchors_reroute_from_every_route_but_home() {
        assert!(!anchor_reroutes(Some(&Route::Home)));
        assert!(anchor_reroutes(Some(&Route::Products)));
        assert!(anchor_reroutes(None));
    }
}
