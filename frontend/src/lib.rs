use app::App;
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point, called by the generated module loader once the bundle
/// has been instantiated.
#[wasm_bindgen]
pub fn hydrate() {
    // set up logging and panic reporting before anything renders
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::mount_to_body(App);
}
