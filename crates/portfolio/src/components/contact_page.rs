use crate::{
    app::AppState,
    components::{
        notification::{Notification, NotificationContext},
        page_meta::PageMeta,
    },
    contact::{ContactError, ContactField, ContactForm, FieldErrors, submit},
};
use log::{debug, error};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let app_state =
        use_context::<AppState>().expect("AppState context is set when starting the App");
    let notifications =
        use_context::<NotificationContext>().expect("should be called inside NotificationProvider");

    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let subject_ref = use_node_ref();
    let message_ref = use_node_ref();
    let field_errors = use_state(FieldErrors::default);
    let submitting = use_state(|| false);

    let onsubmit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let subject_ref = subject_ref.clone();
        let message_ref = message_ref.clone();
        let field_errors = field_errors.clone();
        let submitting = submitting.clone();
        let config = app_state.config.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            let form = ContactForm {
                name: input(&name_ref),
                email: input(&email_ref),
                subject: input(&subject_ref),
                message: message_ref
                    .cast::<HtmlTextAreaElement>()
                    .map(|area| area.value())
                    .unwrap_or_default(),
            };
            let message = match form.validate() {
                Ok(message) => message,
                Err(ContactError::Invalid(errors)) => {
                    debug!("Contact form rejected: {errors}");
                    field_errors.set(errors);
                    return;
                }
                Err(err) => {
                    error!("Unexpected validation failure: {err}");
                    return;
                }
            };
            field_errors.set(FieldErrors::default());
            submitting.set(true);

            let config = config.clone();
            let notifications = notifications.clone();
            let submitting = submitting.clone();
            let refs = [
                name_ref.clone(),
                email_ref.clone(),
                subject_ref.clone(),
            ];
            let message_ref = message_ref.clone();
            spawn_local(async move {
                match submit(&config.contact, &message).await {
                    Ok(()) => {
                        notifications.push(Notification::success(
                            "Your message has been sent. I'll get back to you soon.",
                        ));
                        for node in &refs {
                            if let Some(input) = node.cast::<HtmlInputElement>() {
                                input.set_value("");
                            }
                        }
                        if let Some(area) = message_ref.cast::<HtmlTextAreaElement>() {
                            area.set_value("");
                        }
                    }
                    Err(err) => {
                        error!("Failed to send contact message: {err}");
                        notifications.push(Notification::error(
                            "Failed to send message. Please try again later.",
                        ));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let error_for = |field: ContactField| {
        field_errors
            .for_field(field)
            .map(|message| html! { <span class="field-error">{ message }</span> })
    };

    html! {
        <section class="contact">
            <PageMeta />
            <h1>{"Contact"}</h1>
            <form class="contact-form" {onsubmit} novalidate=true>
                <label for="contact-name">{"Name"}</label>
                <input id="contact-name" type="text" ref={name_ref} />
                { error_for(ContactField::Name) }

                <label for="contact-email">{"Email"}</label>
                <input id="contact-email" type="email" ref={email_ref} />
                { error_for(ContactField::Email) }

                <label for="contact-subject">{"Subject"}</label>
                <input id="contact-subject" type="text" ref={subject_ref} />
                { error_for(ContactField::Subject) }

                <label for="contact-message">{"Message"}</label>
                <textarea id="contact-message" rows="6" ref={message_ref} />
                { error_for(ContactField::Message) }

                <button type="submit" disabled={*submitting}>
                    { if *submitting { "Sending..." } else { "Send message" } }
                </button>
            </form>
        </section>
    }
}
