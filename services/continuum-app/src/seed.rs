//! Server-fetched entity handed to the browser
//!
//! The server renders each route with the entity it fetched and embeds that
//! entity in the page under [`SEED_ELEMENT_ID`]. On mount the routed screen
//! claims it and starts ready instead of fetching the same entity again.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::nav::Route;
use crate::state::Screen;

/// Id of the `<script type="application/json">` element holding the seed
pub const SEED_ELEMENT_ID: &str = "continuum-seed";

/// Outcome of the server's fetch for the page at `path`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenSeed {
    pub path: String,
    /// `None` when the fetch failed and the page shows "not found"
    pub entity: Option<serde_json::Value>,
}

impl ScreenSeed {
    /// Seed for `screen` rendered at `route`; a loading screen has nothing
    /// to hand over
    pub fn new<T: Serialize>(route: &Route, screen: &Screen<T>) -> Option<Self> {
        let entity = match screen {
            Screen::Loading => return None,
            Screen::NotFound => None,
            Screen::Ready(value) => match serde_json::to_value(value) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!("failed to serialise seed for {}: {}", route.path(), e);
                    return None;
                }
            },
        };
        Some(Self {
            path: route.path(),
            entity,
        })
    }
}

/// Seed waiting for the first routed screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingSeed(Option<ScreenSeed>);

impl PendingSeed {
    pub fn new(seed: Option<ScreenSeed>) -> Self {
        Self(seed)
    }

    /// Claim the seed for `route`. The first call consumes it whether or not
    /// it matches, so every later navigation fetches.
    pub fn take_for<T: DeserializeOwned>(&mut self, route: &Route) -> Option<Screen<T>> {
        let seed = self.0.take()?;
        if Route::parse(&seed.path).as_ref() != Some(route) {
            tracing::debug!("seed for {} does not match {}", seed.path, route.path());
            return None;
        }
        match seed.entity {
            None => Some(Screen::NotFound),
            Some(value) => match serde_json::from_value(value) {
                Ok(entity) => Some(Screen::Ready(entity)),
                Err(e) => {
                    tracing::debug!("unusable seed for {}: {}", seed.path, e);
                    None
                }
            },
        }
    }
}
