//! Contact form components.
//!
//! One parameterized [`TextField`] renders every input; the form itself owns
//! the draft, the per-field validity records, and the submission lifecycle.

use folio_core::{ContactConfig, Field, FieldChecks, FieldState, MessageDraft, SubmissionStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::info::InfoPanel;
use crate::mailer;

/// Contact section composing the info panel and the message form.
#[component]
pub fn ContactSection(
    /// Contact feature configuration.
    contact: ContactConfig,
) -> impl IntoView {
    view! {
      <section class="folio-section">
        <div class="folio-contact">
          <InfoPanel
            email=contact.email
            location=contact.location
            timezone=contact.timezone
          />
          <MessageForm endpoint=contact.mailer_url />
        </div>
      </section>
    }
}

/// The contact form: four fields, a gated submit, and a confirmation modal.
///
/// Submission is permitted only while all three required fields are valid at
/// once. Entering `Sending` disables the submit control, which is the entire
/// backpressure mechanism; the validity flags are dropped at the same moment
/// so a second submit cannot pass the gate while a request is in flight.
#[component]
pub fn MessageForm(
    /// Mailer endpoint that receives the serialized draft.
    endpoint: String,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let name_check = RwSignal::new(FieldState::Unchecked);
    let email_check = RwSignal::new(FieldState::Unchecked);
    let message_check = RwSignal::new(FieldState::Unchecked);

    let status = RwSignal::new(SubmissionStatus::Idle);
    let confirmed = RwSignal::new(false);

    let ready = Signal::derive(move || {
        FieldChecks {
            name: name_check.get(),
            email: email_check.get(),
            message: message_check.get(),
        }
        .ready()
    });

    let drop_checks = move || {
        name_check.set(FieldState::Unchecked);
        email_check.set(FieldState::Unchecked);
        message_check.set(FieldState::Unchecked);
    };

    // Shared by the submit path and the modal close path. The submit path
    // runs after an await, by which point the component may already be torn
    // down; try_set drops those writes instead of touching disposed state.
    let reset_draft = move || {
        let _ = name.try_set(String::new());
        let _ = email.try_set(String::new());
        let _ = phone.try_set(String::new());
        let _ = message.try_set(String::new());
    };

    let endpoint = StoredValue::new(endpoint);
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if status.get_untracked().is_sending() || !ready.get_untracked() {
            return;
        }

        drop_checks();
        status.set(SubmissionStatus::Sending);

        let draft = MessageDraft {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            message: message.get_untracked(),
        };
        let endpoint = endpoint.get_value();

        spawn_local(async move {
            match mailer::deliver(&endpoint, &draft).await {
                Ok(()) => {
                    let _ = status.try_set(SubmissionStatus::Succeeded);
                    let _ = confirmed.try_set(true);
                }
                Err(err) => {
                    log::error!("contact message was not delivered: {err}");
                    let _ = status.try_set(SubmissionStatus::Failed);
                }
            }
            // The draft is cleared on both outcomes; the visitor does not
            // get their unsent text back after a failure.
            reset_draft();
        });
    };

    let close = Callback::new(move |_| {
        reset_draft();
        drop_checks();
        status.set(SubmissionStatus::Idle);
        confirmed.set(false);
    });

    view! {
      <div class="folio-form">
        <form id="contact-form" class="folio-form-body" on:submit=on_submit>
          <TextField field=Field::Name value=name check=name_check />
          <TextField field=Field::Email value=email check=email_check />
          <TextField field=Field::Phone value=phone />
          <TextField field=Field::Message value=message check=message_check multiline=true />

          <button
            type="submit"
            class="folio-submit"
            aria-label="Send Message"
            disabled=move || status.get().is_sending() || !ready.get()
          >
            {move || status.get().label(ready.get())}
          </button>
        </form>

        <ConfirmationModal open=confirmed.into() on_close=close />
      </div>
    }
}

/// One labelled input of the contact form.
///
/// The same component renders every field; `field` supplies the id, label,
/// and validator. Fields without a check signal are never validated.
#[component]
fn TextField(
    /// Which form field this input renders.
    field: Field,
    /// Current raw value.
    value: RwSignal<String>,
    /// Validity record, replaced wholesale on every check.
    #[prop(optional)]
    check: Option<RwSignal<FieldState>>,
    /// Render a multi-line input.
    #[prop(default = false)]
    multiline: bool,
) -> impl IntoView {
    let run_check = move |raw: &str| {
        if let Some(check) = check {
            check.set(field.validate(raw));
        }
    };

    // Checked on every keystroke and again on blur.
    let on_input = move |ev| {
        let raw = event_target_value(&ev);
        run_check(&raw);
        value.set(raw);
    };
    let on_blur = move |_| run_check(&value.get_untracked());

    let error_text = move || check.and_then(|check| check.get().message());

    view! {
      <div class="folio-field">
        <label for=field.id()>{field.label()}</label>
        {if multiline {
          view! {
            <textarea
              id=field.id()
              name=field.id()
              rows=6
              prop:value=move || value.get()
              on:input=on_input
              on:blur=on_blur
            ></textarea>
          }
            .into_any()
        } else {
          view! {
            <input
              type="text"
              id=field.id()
              name=field.id()
              prop:value=move || value.get()
              on:input=on_input
              on:blur=on_blur
            />
          }
            .into_any()
        }}
        {move || {
          error_text().map(|msg| view! { <p class="folio-field-error">{msg}</p> })
        }}
      </div>
    }
}

/// Confirmation dialog shown once the mailer accepts a message.
#[component]
fn ConfirmationModal(
    /// Whether the modal is visible.
    open: Signal<bool>,
    /// Invoked for every dismissal gesture.
    on_close: Callback<()>,
) -> impl IntoView {
    // Close on Escape key
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    };

    // Close when clicking overlay
    let on_overlay_click = move |_| on_close.run(());

    // Prevent closing when clicking modal content
    let on_content_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
      <Show when=move || open.get()>
        <div class="folio-modal-overlay" on:click=on_overlay_click on:keydown=on_keydown>
          <div class="folio-modal-content" on:click=on_content_click>
            <p class="folio-modal-title">"Thanks!"</p>
            <p class="folio-modal-text">"Your message was sent, I will get it soon."</p>
            <div class="folio-modal-actions">
              <button class="folio-modal-close" on:click=move |_| on_close.run(())>
                "OK"
              </button>
            </div>
          </div>
        </div>
      </Show>
    }
}
