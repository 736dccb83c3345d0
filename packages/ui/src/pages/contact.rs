use dioxus::prelude::*;
use site::{ContactDraft, DraftField, Lang, Page, SubmissionSimulator, SubmissionStatus};
use site::{CONTACT_EMAIL, CONTACT_PHONE};

use super::PageHeader;
use crate::t;

#[component]
pub fn ContactPage() -> Element {
    let status = use_signal(SubmissionStatus::default);

    rsx! {
        main { id: "main-content", class: "page",
            div { class: "container",
                if status() == SubmissionStatus::Submitted {
                    SuccessPanel {}
                } else {
                    PageHeader { title_key: "contact.title", subtitle_key: "contact.subtitle" }
                    div { class: "grid two contact_layout",
                        ContactForm { status }
                        div {
                            ContactInfo {}
                            ServiceMap {}
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ContactForm(status: Signal<SubmissionStatus>) -> Element {
    let lang = crate::use_lang();
    let config = crate::use_site_config();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut preferred = use_signal(Lang::default);
    let mut needs = use_signal(String::new);
    let mut missing = use_signal(|| None::<DraftField>);

    let submitting = status().is_submitting();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = ContactDraft {
            name: name(),
            email: email(),
            phone: phone(),
            preferred_language: preferred(),
            needs: needs(),
        };
        missing.set(draft.missing_field());
        if missing().is_some() {
            return;
        }

        let current = status();
        let simulator = SubmissionSimulator::new(config.submit_delay);
        let mut status = status;

        spawn(async move {
            let result = simulator
                .submit(current, &draft, crate::timer::sleep, move |next| status.set(next))
                .await;
            if let Err(err) = result {
                tracing::debug!("contact submit ignored: {err}");
            }
        });
    };

    rsx! {
        form { class: "card contact_form", onsubmit,
            h2 { {t(lang, "contact.form.heading")} }

            if let Some(field) = missing() {
                p { class: "form_error", role: "alert",
                    {t(lang, "contact.form.missing")}
                    " "
                    strong { {t(lang, field.label_key())} }
                }
            }

            label { r#for: "contact-name", {t(lang, "contact.form.name")} " *" }
            input {
                id: "contact-name",
                r#type: "text",
                required: true,
                placeholder: t(lang, "contact.form.name_ph"),
                value: "{name}",
                oninput: move |evt| name.set(evt.value()),
            }

            label { r#for: "contact-email", {t(lang, "contact.form.email")} " *" }
            input {
                id: "contact-email",
                r#type: "email",
                required: true,
                placeholder: t(lang, "contact.form.email_ph"),
                value: "{email}",
                oninput: move |evt| email.set(evt.value()),
            }

            label { r#for: "contact-phone", {t(lang, "contact.form.phone")} }
            input {
                id: "contact-phone",
                r#type: "tel",
                placeholder: t(lang, "contact.form.phone_ph"),
                value: "{phone}",
                oninput: move |evt| phone.set(evt.value()),
            }

            label { r#for: "contact-language", {t(lang, "contact.form.language")} }
            select {
                id: "contact-language",
                value: preferred().code(),
                onchange: move |evt| {
                    if let Some(choice) = Lang::from_code(&evt.value()) {
                        preferred.set(choice);
                    }
                },
                for choice in Lang::ALL {
                    option {
                        key: "{choice}",
                        value: choice.code(),
                        selected: choice == preferred(),
                        {t(lang, &format!("contact.form.language.{}", choice.code()))}
                    }
                }
            }

            label { r#for: "contact-needs", {t(lang, "contact.form.needs")} " *" }
            textarea {
                id: "contact-needs",
                rows: "4",
                required: true,
                placeholder: t(lang, "contact.form.needs_ph"),
                value: "{needs}",
                oninput: move |evt| needs.set(evt.value()),
            }

            button {
                class: "btn primary wide",
                r#type: "submit",
                disabled: submitting,
                "aria-busy": submitting.then_some("true"),
                if submitting {
                    {t(lang, "contact.form.sending")}
                } else {
                    {t(lang, "contact.form.submit")}
                }
            }
        }
    }
}

#[component]
fn ContactInfo() -> Element {
    let lang = crate::use_lang();

    rsx! {
        div { class: "card",
            h2 { {t(lang, "contact.info.title")} }
            ul { class: "info_list",
                li {
                    span { class: "glyph small accent_blue", "aria-hidden": "true", "✉" }
                    div {
                        h3 { {t(lang, "contact.info.email")} }
                        a { href: "mailto:{CONTACT_EMAIL}", "{CONTACT_EMAIL}" }
                    }
                }
                li {
                    span { class: "glyph small accent_green", "aria-hidden": "true", "☎" }
                    div {
                        h3 { {t(lang, "contact.info.phone")} }
                        p { "{CONTACT_PHONE}" }
                    }
                }
                li {
                    span { class: "glyph small accent_purple", "aria-hidden": "true", "⌖" }
                    div {
                        h3 { {t(lang, "contact.info.area")} }
                        p { {t(lang, "contact.info.area_value")} }
                        p { class: "muted_text", {t(lang, "contact.info.area_detail")} }
                    }
                }
                li {
                    span { class: "glyph small accent_orange", "aria-hidden": "true", "🕑" }
                    div {
                        h3 { {t(lang, "contact.info.response")} }
                        p { {t(lang, "contact.info.response_value")} }
                        p { class: "muted_text", {t(lang, "contact.info.response_days")} }
                    }
                }
            }
        }
    }
}

#[component]
fn ServiceMap() -> Element {
    let lang = crate::use_lang();

    rsx! {
        div { class: "card",
            h2 { {t(lang, "contact.map.title")} }
            div { class: "map_placeholder",
                span { "aria-hidden": "true", "⌖" }
                p { {t(lang, "contact.map.soon")} }
            }
            p { class: "muted_text", {t(lang, "contact.map.boroughs")} }
            p { class: "muted_text", {t(lang, "contact.map.online")} }
        }
    }
}

#[component]
fn SuccessPanel() -> Element {
    let lang = crate::use_lang();
    let navigator = crate::use_navigator();

    rsx! {
        div { class: "card success_panel centered",
            span { class: "glyph round accent_green", "aria-hidden": "true", "✓" }
            h1 { {t(lang, "contact.success.title")} }
            p { class: "lead", {t(lang, "contact.success.body")} }
            button {
                class: "btn primary",
                onclick: move |_| crate::navigate(navigator, Page::Home),
                {t(lang, "contact.success.home")}
            }
        }
    }
}
