//! Sensor Continuum dashboard - Leptos frontend
//!
//! Drill-down UI over the Sensor Continuum API: regions, macrozones, zones,
//! their hubs and sensors, and on-demand raw, aggregated and analysis data.
//! The same components render on the server for the first paint (`ssr`) and
//! mount in the browser (`csr`).
#![recursion_limit = "256"]

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod endpoints;
pub mod fetch;
pub mod filter;
pub mod format;
pub mod nav;
pub mod pages;
pub mod query;
pub mod seed;
pub mod state;
pub mod table;
pub mod zones;

pub use app::App;
pub use config::ClientConfig;

/// Id of the element the application mounts into
pub const ROOT_ELEMENT_ID: &str = "continuum";

/// Browser entry point: reads the embedded configuration and seed, then
/// replaces the server-rendered markup with the live application
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();

    let config = read_embedded::<ClientConfig>(config::CONFIG_ELEMENT_ID).unwrap_or_default();
    let seed = read_embedded::<seed::ScreenSeed>(seed::SEED_ELEMENT_ID);
    let Some(root) = document()
        .get_element_by_id(ROOT_ELEMENT_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        tracing::warn!("mount point #{} not found", ROOT_ELEMENT_ID);
        return;
    };
    root.set_inner_html("");
    leptos::mount::mount_to(root, move || view! { <App config=config seed=seed /> }).forget();
}

/// JSON embedded in the page under `id`; missing or invalid content yields
/// `None`
#[cfg(feature = "csr")]
fn read_embedded<T: serde::de::DeserializeOwned>(id: &str) -> Option<T> {
    let raw = leptos::prelude::document()
        .get_element_by_id(id)
        .and_then(|el| el.text_content())?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("invalid embedded #{}: {}", id, e);
            None
        }
    }
}
