use leptos::prelude::*;

use crate::api::Region;
use crate::components::cards::RegionCard;
use crate::components::location_search::LocationSearch;
use crate::context::{initial_screen, use_endpoints};
use crate::nav::Route;
use crate::pages::load_screen;
use crate::state::Screen;

/// Root screen: fetches the region list once
#[component]
pub fn MainDashboard() -> impl IntoView {
    let endpoints = use_endpoints();
    let state = RwSignal::new(initial_screen::<Vec<Region>>(Route::Regions));

    Effect::new(move |_| load_screen(state, Route::Regions, endpoints.region_list_url()));

    move || view! { <RegionsScreen screen=state.with(|s| s.screen().clone()) /> }
}

/// Region list; a failed fetch shows an empty list
#[component]
pub fn RegionsScreen(screen: Screen<Vec<Region>>) -> impl IntoView {
    let content = match screen {
        Screen::Loading => view! { <p>"Caricamento..."</p> }.into_any(),
        Screen::Ready(regions) => view! {
            <div class="region-cards-container" style="display: flex; gap: 1rem; flex-wrap: wrap;">
                {regions
                    .into_iter()
                    .map(|region| view! { <RegionCard region=region /> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
        Screen::NotFound => {
            view! { <div class="region-cards-container"></div> }.into_any()
        }
    };

    view! {
        <div class="main-dashboard">
            <header class="main-dashboard-header">
                <h1 class="main-dashboard-title">"Sensor Continuum"</h1>
            </header>
            {content}
            <LocationSearch />
        </div>
    }
}
