use crate::mail::client::{Mailer, OutgoingEmail};
use crate::models::contact::{ContactRequest, ContactResponse};

/// Where contact-form messages come from and go to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSettings {
    pub from: String,
    pub to: String,
}

/// Outcome of [`process_contact`]: the response body, and whether the input
/// itself was rejected (HTTP 400) as opposed to delivery failing.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactOutcome {
    pub response: ContactResponse,
    pub rejected: bool,
}

/// Render the notification mail for a contact request.
///
/// All user-supplied text is HTML-escaped before it lands in the body.
pub fn build_contact_email(request: &ContactRequest, settings: &ContactSettings) -> OutgoingEmail {
    let name = ammonia::clean_text(request.name.trim());
    let email = ammonia::clean_text(request.email.trim());
    let message = request
        .message
        .trim()
        .lines()
        .map(ammonia::clean_text)
        .collect::<Vec<_>>()
        .join("<br>");

    let html = format!(
        concat!(
            "<div style=\"font-family: Arial, sans-serif; line-height: 1.6;\">",
            "<h3>New message from your portfolio contact form</h3>",
            "<p><strong>Name:</strong> {}</p>",
            "<p><strong>Email:</strong> {}</p>",
            "<p><strong>Message:</strong></p>",
            "<p>{}</p>",
            "</div>"
        ),
        name, email, message
    );

    OutgoingEmail {
        from: settings.from.clone(),
        to: vec![settings.to.clone()],
        subject: format!("New Message from {}", request.name.trim()),
        reply_to: request.email.trim().to_string(),
        html,
    }
}

/// Validate a contact request and forward it to the mailer.
///
/// Delivery problems are logged and reported as a generic failure; they
/// never surface as an error to the caller.
pub async fn process_contact(
    mailer: Option<&dyn Mailer>,
    settings: &ContactSettings,
    request: ContactRequest,
) -> ContactOutcome {
    if let Err(reason) = request.validate() {
        tracing::debug!("Rejected contact request: {reason}");
        return ContactOutcome {
            response: ContactResponse::failed(reason),
            rejected: true,
        };
    }

    let Some(mailer) = mailer else {
        tracing::warn!("Contact message dropped: mail delivery is not configured");
        return ContactOutcome {
            response: ContactResponse::failed("Message could not be sent"),
            rejected: false,
        };
    };

    let email = build_contact_email(&request, settings);
    let response = match mailer.send(&email).await {
        Ok(data) => {
            tracing::info!(reply_to = %email.reply_to, "Contact message sent");
            ContactResponse::sent(data)
        }
        Err(e) => {
            tracing::error!("Email send error: {e}");
            ContactResponse::failed("Message could not be sent")
        }
    };

    ContactOutcome {
        response,
        rejected: false,
    }
}
