//! Root application component

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::config::ClientConfig;
use crate::context::{provide_config, provide_seed};
use crate::pages::macrozone_dashboard::MacrozoneDashboard;
use crate::pages::main_dashboard::MainDashboard;
use crate::pages::region_dashboard::RegionDashboard;
use crate::seed::ScreenSeed;

/// Page wrapper shared by the browser build and server rendering
pub const MAIN_STYLE: &str =
    "font-family: system-ui, sans-serif; max-width: 1200px; margin: 0 auto; padding: 1rem;";

/// Root application component with the three drill-down routes; `seed` is
/// the entity the server rendered the current page with
#[component]
pub fn App(config: ClientConfig, seed: Option<ScreenSeed>) -> impl IntoView {
    provide_meta_context();
    provide_config(&config);
    provide_seed(seed);

    view! {
        <Title text="Sensor Continuum" />
        <Router>
            <main class="app" style=MAIN_STYLE>
                <Routes fallback=|| view! { <p>"Pagina non trovata."</p> }>
                    <Route path=path!("/") view=MainDashboard />
                    <Route path=path!("/region/:name") view=RegionDashboard />
                    <Route
                        path=path!("/macrozone/:region_name/:macrozone_name")
                        view=MacrozoneDashboard
                    />
                </Routes>
            </main>
        </Router>
    }
}
