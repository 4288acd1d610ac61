use std::time::Duration;

use thiserror::Error;

use crate::models::{ContactForm, FieldError};

/// Errors from delivering a contact enquiry.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Contact endpoint rejected the enquiry with status {status}")]
    Rejected { status: u16 },
}

/// Where contact enquiries go.
#[derive(Clone, Debug)]
pub enum ContactSubmitter {
    /// Waits a fixed delay and accepts everything. Nothing leaves the server.
    Simulated { delay: Duration },
    /// POSTs the enquiry as JSON to an external endpoint, one attempt.
    Webhook { client: reqwest::Client, url: String },
}

impl ContactSubmitter {
    pub fn from_config(client: &reqwest::Client, webhook_url: Option<String>, delay: Duration) -> Self {
        match webhook_url {
            Some(url) => ContactSubmitter::Webhook { client: client.clone(), url },
            None => ContactSubmitter::Simulated { delay },
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ContactSubmitter::Simulated { delay } => format!("simulated ({} ms delay)", delay.as_millis()),
            ContactSubmitter::Webhook { url, .. } => format!("webhook {}", url),
        }
    }

    pub async fn submit(&self, form: &ContactForm) -> Result<(), ContactError> {
        match self {
            ContactSubmitter::Simulated { delay } => {
                tokio::time::sleep(*delay).await;
                tracing::info!(email = %form.email, company = %form.company, "Contact enquiry accepted (simulated)");
                Ok(())
            }
            ContactSubmitter::Webhook { client, url } => {
                let resp = client
                    .post(url)
                    .json(form)
                    .send()
                    .await
                    .map_err(|e| ContactError::Transport(e.to_string()))?;
                let status = resp.status();
                if !status.is_success() {
                    return Err(ContactError::Rejected { status: status.as_u16() });
                }
                tracing::info!(email = %form.email, "Contact enquiry delivered");
                Ok(())
            }
        }
    }
}

/// Trim every field in place.
pub fn normalize(form: &mut ContactForm) {
    for field in [
        &mut form.name,
        &mut form.email,
        &mut form.company,
        &mut form.phone,
        &mut form.message,
    ] {
        let trimmed = field.trim().to_string();
        if trimmed.len() != field.len() {
            *field = trimmed;
        }
    }
}

/// Name, email and message are required; the email must look like `local@domain`.
pub fn validate(form: &ContactForm) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if form.name.trim().is_empty() {
        errors.push(FieldError { field: "name", message: "Please enter your name." });
    }
    let email = form.email.trim();
    if email.is_empty() {
        errors.push(FieldError { field: "email", message: "Please enter your email address." });
    } else if !looks_like_email(email) {
        errors.push(FieldError { field: "email", message: "Please enter a valid email address." });
    }
    if form.message.trim().is_empty() {
        errors.push(FieldError { field: "message", message: "Please enter a message." });
    }
    errors
}

fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !s.chars().any(char::is_whitespace)
}
