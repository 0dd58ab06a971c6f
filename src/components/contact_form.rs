use leptos::form::ActionForm;
use leptos::prelude::*;

use crate::models::contact::ContactResponse;

/// Contact form backend. Goes through the same path as `POST /api/contact`.
#[server]
pub async fn submit_contact(
    name: String,
    email: String,
    message: String,
) -> Result<ContactResponse, ServerFnError> {
    use crate::mail::contact::process_contact;
    use crate::models::contact::ContactRequest;

    let state = crate::app::app_state()?;
    let request = ContactRequest {
        name,
        email,
        message,
    };
    let outcome = process_contact(state.mailer.as_deref(), &state.contact, request).await;
    Ok(outcome.response)
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let submit = ServerAction::<SubmitContact>::new();
    let pending = submit.pending();

    let status = move || {
        submit.value().get().map(|res| match res {
            Ok(ContactResponse { success: true, .. }) => view! {
                <p class="success">"Thanks! Your message has been sent."</p>
            }
            .into_any(),
            Ok(ContactResponse { error, .. }) => {
                let error = error.unwrap_or_else(|| "Message could not be sent".to_string());
                view! { <p class="error">{error}</p> }.into_any()
            }
            Err(e) => view! { <p class="error">"Error: " {e.to_string()}</p> }.into_any(),
        })
    };

    view! {
        <section id="contact" class="contact">
            <h2>"Get In Touch"</h2>
            <ActionForm action=submit>
                <input type="text" name="name" placeholder="Your name" required/>
                <input type="email" name="email" placeholder="you@example.com" required/>
                <textarea name="message" rows="5" placeholder="Your message" required></textarea>
                <button type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Sending..." } else { "Send Message" }}
                </button>
            </ActionForm>
            {status}
        </section>
    }
}
