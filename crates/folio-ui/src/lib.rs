//! Folio UI Components
//!
//! Leptos components for the Folio frontend.
//!
//! # Components
//!
//! ## Contact
//! - [`ContactSection`] - Section wrapper composing the info panel and form
//! - [`MessageForm`] - Validated contact form with gated submission
//!
//! ## Info
//! - [`InfoPanel`] - Contact address, clipboard copy, clock, and location
//! - [`Clock`] - Local wall-clock display on a fixed refresh
//!
//! # Example
//!
//! ```ignore
//! use folio_core::ContactConfig;
//! use folio_ui::ContactSection;
//! use leptos::prelude::*;
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     let contact = ContactConfig::default();
//!
//!     view! { <ContactSection contact=contact /> }
//! }
//! ```

pub mod contact;
pub mod info;
pub mod mailer;

pub use contact::{ContactSection, MessageForm};
pub use info::{Clock, InfoPanel};
pub use mailer::{MailerError, deliver};
