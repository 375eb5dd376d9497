//! Configuration and the server seed travelling as Leptos context

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::config::{ClientConfig, DisplaySettings};
use crate::endpoints::Endpoints;
use crate::nav::Route;
use crate::seed::{PendingSeed, ScreenSeed};
use crate::state::RoutedScreen;

/// Make endpoints and display settings available to every descendant
pub fn provide_config(config: &ClientConfig) {
    provide_context(config.api.clone());
    provide_context(config.display());
}

pub fn use_endpoints() -> Endpoints {
    use_context::<Endpoints>().unwrap_or_default()
}

pub fn use_display() -> DisplaySettings {
    use_context::<DisplaySettings>().unwrap_or_default()
}

#[derive(Clone, Copy)]
struct SeedSlot(StoredValue<PendingSeed>);

pub fn provide_seed(seed: Option<ScreenSeed>) {
    provide_context(SeedSlot(StoredValue::new(PendingSeed::new(seed))));
}

/// Initial state of the screen for `route`: ready when the page was served
/// with its entity, loading otherwise
pub fn initial_screen<T: DeserializeOwned>(route: Route) -> RoutedScreen<Route, T> {
    let seeded = use_context::<SeedSlot>()
        .and_then(|slot| slot.0.try_update_value(|pending| pending.take_for(&route)))
        .flatten();
    match seeded {
        Some(screen) => RoutedScreen::seeded(route, screen),
        None => RoutedScreen::default(),
    }
}

/// Provides the configuration to `children`; used where no [`crate::App`]
/// wraps the view, as in server rendering
#[component]
pub fn ConfigScope(config: ClientConfig, children: Children) -> impl IntoView {
    provide_config(&config);
    children()
}
