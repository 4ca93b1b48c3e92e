//! Delivery of contact messages to the remote mailer API.
//!
//! The mailer is a black box that accepts a JSON body and answers with a
//! status code. One call here is one request: no retry, no backoff, no
//! idempotency key.

use folio_core::MessageDraft;
use gloo_net::http::Request;
use thiserror::Error;

/// Errors raised while handing a draft to the mailer endpoint.
#[derive(Debug, Error)]
pub enum MailerError {
    /// The request never completed.
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),

    /// The mailer answered with a non-success status.
    #[error("mailer responded with status {0}")]
    Status(u16),
}

/// POST a draft to the mailer endpoint.
///
/// Any HTTP 2xx counts as delivered; every other status and every transport
/// failure is an error. Callers decide what, if anything, to tell the user.
pub async fn deliver(endpoint: &str, draft: &MessageDraft) -> Result<(), MailerError> {
    let response = Request::post(endpoint).json(draft)?.send().await?;

    if response.ok() {
        Ok(())
    } else {
        Err(MailerError::Status(response.status()))
    }
}
