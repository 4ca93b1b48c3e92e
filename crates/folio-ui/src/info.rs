//! Contact info panel: published address, clipboard copy, clock, location.

use std::time::Duration;

use chrono::NaiveTime;
use folio_core::format_clock;
use leptos::prelude::*;

/// How often the clock re-publishes the formatted time. Display precision is
/// whole minutes, so no drift correction is needed.
const CLOCK_TICK: Duration = Duration::from_secs(15);

/// How long the "Copied!" acknowledgment stays visible.
const TOOLTIP_VISIBLE: Duration = Duration::from_millis(1000);

/// Static contact information next to the message form.
#[component]
pub fn InfoPanel(
    /// Published contact address.
    email: String,
    /// Human-readable location line.
    location: String,
    /// Label for the displayed timezone.
    timezone: String,
) -> impl IntoView {
    let copied = RwSignal::new(false);
    let address = StoredValue::new(email.clone());

    let on_copy = move |_| {
        copy_to_clipboard(&address.get_value());
        copied.set(true);
        set_timeout(
            move || {
                let _ = copied.try_set(false);
            },
            TOOLTIP_VISIBLE,
        );
    };

    view! {
      <div class="folio-info">
        <h2 class="folio-info-heading">"Let's Connect"</h2>

        <div class="folio-info-row">
          <span id="email-address" class="folio-info-address">
            {email}
          </span>
          <button class="folio-copy" on:click=on_copy aria-label="Copy to clipboard">
            "Copy"
          </button>
          <Show when=move || copied.get()>
            <span class="folio-tooltip">"Copied!"</span>
          </Show>
        </div>

        <div class="folio-info-row">
          <span class="folio-info-label">{timezone}</span>
          <Clock />
        </div>

        <div class="folio-info-row">
          <span class="folio-info-label">{location}</span>
        </div>
      </div>
    }
}

/// Local wall-clock display.
///
/// Publishes the formatted time immediately on mount, then on a fixed
/// interval until the component is torn down.
#[component]
pub fn Clock() -> impl IntoView {
    let time = RwSignal::new(String::new());

    Effect::new(move |_| {
        time.set(local_clock_text());

        match set_interval_with_handle(move || time.set(local_clock_text()), CLOCK_TICK) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => log::warn!("clock timer was not scheduled: {err:?}"),
        }
    });

    view! {
      <span id="current-time" class="folio-clock">
        {move || time.get()}
      </span>
    }
}

/// Current time of day in the browser's local timezone.
fn local_clock_text() -> String {
    let now = js_sys::Date::new_0();
    NaiveTime::from_hms_opt(now.get_hours(), now.get_minutes(), 0)
        .map(format_clock)
        .unwrap_or_default()
}

/// Best-effort clipboard write. The returned promise is dropped, so a denied
/// permission silently no-ops.
fn copy_to_clipboard(text: &str) {
    let _ = window().navigator().clipboard().write_text(text);
}
