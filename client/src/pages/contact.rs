//! Contact page: form bound to a `ContactController`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller owns the authoritative form and status. Inputs forward
//! every edit to it, and `PageObserver` mirrors its state into signals the
//! view reads. Notices surface as a browser alert.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::rc::Rc;

use leptos::prelude::*;
use portfolio::config::{EmailJsConfig, PublicEmailConfig};
use portfolio::contact::{
    ContactController, ContactField, ContactForm, ContactObserver, Notice, SubmissionStatus,
};
use portfolio::provider::emailjs::EmailJsClient;

use crate::components::page_transition::PageTransition;
use crate::state::site::SiteState;

const UNAVAILABLE_TEXT: &str = "The contact form is unavailable right now.";

type PageController = ContactController<EmailJsClient, PageObserver>;

/// Mirrors controller state into view signals.
#[derive(Clone, Copy)]
struct PageObserver {
    form: RwSignal<ContactForm>,
    status: RwSignal<SubmissionStatus>,
}

impl ContactObserver for PageObserver {
    fn status_changed(&self, status: &SubmissionStatus) {
        let _ = self.status.try_set(status.clone());
    }

    fn form_changed(&self, form: &ContactForm) {
        let _ = self.form.try_set(form.clone());
    }

    fn notify(&self, notice: Notice) {
        crate::util::alert::show(notice.text);
    }
}

/// Input element type for a field; `None` means a textarea.
fn input_type(field: ContactField) -> Option<&'static str> {
    match field {
        ContactField::Email => Some("email"),
        ContactField::Name | ContactField::Subject => Some("text"),
        ContactField::Message => None,
    }
}

fn field_label(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "Your Name",
        ContactField::Email => "Your Email",
        ContactField::Subject => "Subject",
        ContactField::Message => "Message",
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();

    view! {
        <PageTransition>
            <section class="contact">
                <h1 class="section-title">"Get In Touch"</h1>
                <p class="contact__intro">
                    "Have a project in mind or just want to say hello? Send me a message."
                </p>
                {move || match site.with(|s| s.email_config().cloned()) {
                    Some(config) => view! { <ContactFormPanel config=config/> }.into_any(),
                    None => {
                        view! { <p class="contact__status">{site.with(SiteState::status_text)}</p> }
                            .into_any()
                    }
                }}
            </section>
        </PageTransition>
    }
}

#[component]
fn ContactFormPanel(config: PublicEmailConfig) -> impl IntoView {
    let config = EmailJsConfig::from_public(config);
    let client = match EmailJsClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            #[cfg(feature = "csr")]
            log::error!("contact client unavailable: {e}");
            #[cfg(not(feature = "csr"))]
            let _ = e;
            return view! { <p class="contact__status">{UNAVAILABLE_TEXT}</p> }.into_any();
        }
    };

    let observer = PageObserver {
        form: RwSignal::new(ContactForm::default()),
        status: RwSignal::new(SubmissionStatus::Idle),
    };
    let controller = StoredValue::new_local(Rc::new(PageController::new(config, client, observer)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        {
            let controller = controller.get_value();
            leptos::task::spawn_local(async move {
                let _ = controller.submit().await;
            });
        }
    };

    let field_view = move |field: ContactField| {
        let value = move || observer.form.with(|f| f.get(field).to_owned());
        let on_input = move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            controller.with_value(|c| c.update_field(field, value));
        };
        let id = format!("contact-{}", field.as_str());
        let control = match input_type(field) {
            Some(kind) => view! {
                <input class="contact__input" id=id.clone() name=field.as_str() type=kind required=true
                    prop:value=value on:input=on_input/>
            }
            .into_any(),
            None => view! {
                <textarea class="contact__input contact__input--message" id=id.clone() name=field.as_str()
                    rows="6" required=true prop:value=value on:input=on_input></textarea>
            }
            .into_any(),
        };
        view! {
            <div class="contact__field">
                <label for=id>{field_label(field)}</label>
                {control}
            </div>
        }
    };

    view! {
        <form class="contact__form" on:submit=on_submit>
            {ContactField::ALL.into_iter().map(field_view).collect_view()}
            <button
                class="button contact__submit"
                type="submit"
                disabled=move || observer.status.with(SubmissionStatus::is_submitting)
            >
                {move || observer.status.with(SubmissionStatus::button_label)}
            </button>
        </form>
    }
    .into_any()
}
