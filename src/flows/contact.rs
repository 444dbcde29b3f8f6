// src/flows/contact.rs

//! Contact flow.
//!
//! Three required fields, one POST, nothing read back.

use crate::error::{AppError, Result};
use crate::models::{Message, MessageDraft};
use crate::services::DirectoryStore;

/// Raw contact form input.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub email: String,
    pub title: String,
    pub message: String,
}

/// Validate the form, producing the message to submit.
pub fn validate(form: &ContactForm) -> Result<MessageDraft> {
    let email = form.email.trim();
    let title = form.title.trim();
    let message = form.message.trim();

    if email.is_empty() || title.is_empty() || message.is_empty() {
        return Err(AppError::validation("please fill in all fields"));
    }

    Ok(MessageDraft {
        email: email.to_string(),
        title: title.to_string(),
        message: message.to_string(),
    })
}

/// Submit a contact message. Validation failures never reach the network.
pub async fn send_message<S: DirectoryStore + ?Sized>(
    store: &S,
    form: &ContactForm,
) -> Result<Message> {
    let draft = validate(form)?;
    store.create_message(&draft).await
}
