use gloo_console::log;
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::{relay_outcome, ContactFields, FormStatus, RelayResponse};
use crate::i18n::{t, Lang};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub lang: Lang,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let fields = use_state(ContactFields::default);
    let status = use_state_eq(|| FormStatus::Idle);
    let sending = use_state_eq(|| false);

    let onsubmit = {
        let fields = fields.clone();
        let status = status.clone();
        let sending = sending.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }

            let current = (*fields).clone();
            if let Err(problem) = current.validate() {
                status.set(FormStatus::Invalid(problem));
                return;
            }
            if !config::relay_ready() {
                status.set(FormStatus::NotConfigured);
                return;
            }

            sending.set(true);
            status.set(FormStatus::Idle);

            let fields = fields.clone();
            let status = status.clone();
            let sending = sending.clone();
            spawn_local(async move {
                let outcome = post_to_relay(&current).await;
                if outcome == FormStatus::Sent {
                    fields.set(ContactFields::default());
                }
                status.set(outcome);
                // every path re-enables the submit control
                sending.set(false);
            });
        })
    };

    let lang = props.lang;
    let button_label = if *sending {
        t(lang, "btn_sending")
    } else {
        t(lang, "btn_send")
    };

    html! {
        <form id="contactForm" class="contact-form" novalidate={true} {onsubmit}>
            <h3>{t(lang, "form_title")}</h3>
            <div class="form-group">
                <label for="name">{t(lang, "form_name_label")}</label>
                <input
                    id="name"
                    type="text"
                    value={fields.name.clone()}
                    placeholder={t(lang, "form_name_ph")}
                    oninput={let fields = fields.clone(); let status = status.clone(); move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        let mut next = (*fields).clone();
                        next.name = input.value();
                        fields.set(next);
                        status.set(FormStatus::Idle);
                    }}
                />
            </div>
            <div class="form-group">
                <label for="email">{t(lang, "form_email_label")}</label>
                <input
                    id="email"
                    type="email"
                    value={fields.email.clone()}
                    placeholder={t(lang, "form_email_ph")}
                    oninput={let fields = fields.clone(); let status = status.clone(); move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        let mut next = (*fields).clone();
                        next.email = input.value();
                        fields.set(next);
                        status.set(FormStatus::Idle);
                    }}
                />
            </div>
            <div class="form-group">
                <label for="phone">{t(lang, "form_phone_label")}</label>
                <input
                    id="phone"
                    type="tel"
                    value={fields.phone.clone()}
                    placeholder={t(lang, "form_phone_ph")}
                    oninput={let fields = fields.clone(); let status = status.clone(); move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        let mut next = (*fields).clone();
                        next.phone = input.value();
                        fields.set(next);
                        status.set(FormStatus::Idle);
                    }}
                />
            </div>
            <div class="form-group">
                <label for="message">{t(lang, "form_message_label")}</label>
                <textarea
                    id="message"
                    rows="5"
                    value={fields.message.clone()}
                    placeholder={t(lang, "form_message_ph")}
                    oninput={let fields = fields.clone(); let status = status.clone(); move |e: InputEvent| {
                        let area: HtmlTextAreaElement = e.target_unchecked_into();
                        let mut next = (*fields).clone();
                        next.message = area.value();
                        fields.set(next);
                        status.set(FormStatus::Idle);
                    }}
                />
            </div>
            <button type="submit" class="submit-button" disabled={*sending}>
                {button_label}
            </button>
            {
                if let Some(key) = status.message_key() {
                    html! {
                        <div id="formStatus" class={status.css_class()}>
                            {t(lang, key)}
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </form>
    }
}

/// Multipart POST to the relay. Field contents stay in component state, so
/// a failed attempt leaves everything the visitor typed in place.
async fn post_to_relay(fields: &ContactFields) -> FormStatus {
    let form = match FormData::new() {
        Ok(form) => form,
        Err(_) => return FormStatus::Failed,
    };
    let pairs = [
        ("access_key", config::RELAY_ACCESS_KEY),
        ("name", fields.name.as_str()),
        ("email", fields.email.as_str()),
        ("phone", fields.phone.as_str()),
        ("message", fields.message.as_str()),
    ];
    for (key, value) in pairs {
        if form.append_with_str(key, value).is_err() {
            return FormStatus::Failed;
        }
    }

    match Request::post(config::RELAY_ENDPOINT).body(form).send().await {
        Ok(response) => match response.json::<RelayResponse>().await {
            Ok(body) => {
                if !body.success {
                    log!("relay refused the message:", body.message.clone());
                }
                relay_outcome(Some(body))
            }
            Err(_) => {
                log!("relay answered with an undecodable body");
                relay_outcome(None)
            }
        },
        Err(error) => {
            log!("relay request failed:", error.to_string());
            relay_outcome(None)
        }
    }
}
