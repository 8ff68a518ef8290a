use dioxus::prelude::*;

use crate::core::config::MailApiConfig;
use crate::core::locale::SiteLocale;
use crate::t;

use super::client::SubscriptionClient;
use super::form::{EmailErrorMessage, SubmissionTicket, SubscriptionForm};

const MAIL_POPUP_CSS: Asset = asset!("/assets/styling/mail-popup.css");

/// Mailing-list popup. The parent owns visibility through `open`; the popup
/// clears it (and its own state) when dismissed.
#[component]
pub fn MailPopup(
    locale: SiteLocale,
    open: Signal<bool>,
    mail_api: MailApiConfig,
    brand: String,
) -> Element {
    let mut open = open;
    let mut form = use_signal(SubscriptionForm::new);

    let on_close = move |_: ()| {
        form.with_mut(|f| open.with_mut(|o| dismiss(f, o)));
    };

    let on_submit = move |_: ()| {
        let Some((client, ticket)) = form.with_mut(|f| prepare_submit(f, &mail_api)) else {
            return;
        };
        // Owned by this scope: Dioxus drops the task if the popup unmounts.
        spawn(async move {
            let result = client.submit(&ticket.request).await;
            form.with_mut(|f| f.finish_submit(&ticket, &result));
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIL_POPUP_CSS }

        MailPopupContent {
            locale: locale,
            brand: brand,
            open: open(),
            snapshot: form(),
            on_close: on_close,
            on_first_name: move |value: String| form.with_mut(|f| f.set_first_name(value)),
            on_email: move |value: String| form.with_mut(|f| f.set_email(value)),
            on_submit: on_submit,
        }
    }
}

/// Stateless markup of the popup for one [`SubscriptionForm`] snapshot.
///
/// The backdrop, the close button and the success "OK" button all raise
/// `on_close`; clicks inside the body do not reach the backdrop. Exactly one
/// of the form and the success panel is rendered.
#[component]
pub fn MailPopupContent(
    locale: SiteLocale,
    brand: String,
    open: bool,
    snapshot: SubscriptionForm,
    on_close: EventHandler<()>,
    on_first_name: EventHandler<String>,
    on_email: EventHandler<String>,
    on_submit: EventHandler<()>,
) -> Element {
    let popup_class = if open { "mail-popup show" } else { "mail-popup" };
    let submitting = snapshot.is_submitting();
    let button_class = if submitting {
        "mail-popup-btn loading"
    } else {
        "mail-popup-btn"
    };
    let first_name_class = input_class(snapshot.first_name_error);
    let email_class = input_class(snapshot.email_error);
    let email_error_text = match snapshot.email_error_message {
        EmailErrorMessage::Empty => t!("popup-email-empty"),
        EmailErrorMessage::Incorrect => t!("popup-email-incorrect"),
    };

    rsx! {
        div { class: popup_class, onclick: move |_| on_close.call(()),
            div { class: "mail-popup-container",
                div { class: "mail-popup-wrapper",
                    div {
                        class: "mail-popup-body",
                        onclick: move |evt: MouseEvent| evt.stop_propagation(),

                        div { class: "mail-popup-header",
                            div { class: "mail-popup-title {locale.css_class()}", {t!("popup-title")} }
                            button {
                                r#type: "button",
                                class: "mail-popup-close-btn",
                                aria_label: t!("popup-close"),
                                onclick: move |_| on_close.call(()),
                            }
                        }

                        if snapshot.is_complete() {
                            div { class: "mail-popup-success",
                                div { class: "mail-popup-success-text", {t!("popup-success")} }
                                button {
                                    r#type: "button",
                                    class: "mail-popup-success-btn",
                                    onclick: move |_| on_close.call(()),
                                    "OK"
                                }
                            }
                        } else {
                            div { class: "mail-popup-form",
                                div { class: "mail-popup-text", {t!("popup-text", brand = brand.clone())} }
                                form {
                                    class: "mail-popup-inputs",
                                    onsubmit: move |evt: FormEvent| {
                                        evt.prevent_default();
                                        on_submit.call(());
                                    },
                                    div { class: "mail-popup-input-wrapper",
                                        input {
                                            class: first_name_class,
                                            name: "firstName",
                                            value: "{snapshot.first_name}",
                                            placeholder: t!("popup-first-name"),
                                            oninput: move |evt: FormEvent| on_first_name.call(evt.value()),
                                        }
                                        if snapshot.first_name_error {
                                            div { class: "error-text", {t!("popup-first-name-empty")} }
                                        }
                                    }
                                    div { class: "mail-popup-input-wrapper",
                                        input {
                                            class: email_class,
                                            name: "email",
                                            value: "{snapshot.email}",
                                            placeholder: t!("popup-email"),
                                            oninput: move |evt: FormEvent| on_email.call(evt.value()),
                                        }
                                        if snapshot.email_error {
                                            div { class: "error-text", "{email_error_text}" }
                                        }
                                    }
                                    button {
                                        r#type: "submit",
                                        class: button_class,
                                        disabled: submitting,
                                        {t!("popup-subscribe")}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// What every dismiss control does: reset the form and hide the popup.
fn dismiss(form: &mut SubscriptionForm, open: &mut bool) {
    form.close();
    *open = false;
}

/// Runs the submit guard and, when it passes, pairs the ticket with a client
/// for the endpoint configured right now.
fn prepare_submit(
    form: &mut SubscriptionForm,
    mail_api: &MailApiConfig,
) -> Option<(SubscriptionClient, SubmissionTicket)> {
    let ticket = form.begin_submit(&mail_api.kind)?;
    Some((SubscriptionClient::from_config(mail_api), ticket))
}

fn input_class(has_error: bool) -> &'static str {
    if has_error {
        "mail-popup-input error"
    } else {
        "mail-popup-input"
    }
}
