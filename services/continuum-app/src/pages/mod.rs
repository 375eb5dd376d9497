//! Route-level screens
//!
//! Every dashboard comes in two parts: a routed component that fetches its
//! primary entity in the browser, and a `*Screen` component rendering a
//! [`crate::state::Screen`] that the server also uses for the first paint.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use crate::endpoints::TemplateError;
use crate::fetch::get_templated;
use crate::nav::Route;
use crate::state::{request, RoutedScreen};

pub mod macrozone_dashboard;
pub mod main_dashboard;
pub mod region_dashboard;

/// Show `route` in `state` and fetch its entity from `url`, unless the
/// entity the page was served with already covers it
fn load_screen<T>(
    state: RwSignal<RoutedScreen<Route, T>>,
    route: Route,
    url: Result<String, TemplateError>,
) where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let task = request(
        move || {
            state
                .try_maybe_update(|s| {
                    let ticket = s.begin(route);
                    (ticket.is_some(), ticket)
                })
                .flatten()
        },
        move || get_templated::<T>(url),
        move |ticket, result| {
            state.update(|s| {
                s.resolve(ticket, result);
            });
        },
    );
    if let Some(task) = task {
        spawn_local(task);
    }
}
