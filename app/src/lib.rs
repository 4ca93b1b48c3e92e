use folio_core::{Config, ContactConfig};
use folio_ui::ContactSection;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

/// Site configuration, embedded at build time.
fn site_config() -> Config {
    Config::from_toml_str(include_str!("../site.toml")).unwrap_or_else(|err| {
        log::warn!("falling back to default site configuration: {err}");
        Config::default()
    })
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = site_config();
    let title = config.site.title.clone();
    let contact = config.contact;

    view! {
      // sets the document title
      <Title text=title />

      <Router>
        <main>
          <Routes fallback=|| "Page not found.".into_view()>
            <Route
              path=StaticSegment("")
              view=move || view! { <HomePage contact=contact.clone() /> }
            />
          </Routes>
        </main>
      </Router>
    }
}

/// Renders the landing page with the contact section.
#[component]
fn HomePage(
    /// Contact feature configuration.
    contact: ContactConfig,
) -> impl IntoView {
    view! {
      <div class="folio-page">
        <ContactSection contact=contact />
      </div>
    }
}
