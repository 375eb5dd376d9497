use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::api::Region;
use crate::components::back_button::BackButton;
use crate::components::cards::{HubCard, MacrozoneCard};
use crate::components::loader::Loader;
use crate::components::panels::{CorrelationPanel, TrendPanel, VariationPanel};
use crate::context::{initial_screen, use_endpoints};
use crate::nav::Route;
use crate::pages::load_screen;
use crate::state::Screen;

/// `/region/:name`; refetches when the name changes
#[component]
pub fn RegionDashboard() -> impl IntoView {
    let endpoints = use_endpoints();
    let params = use_params_map();
    let name = move || params.read().get("name").unwrap_or_default();
    let state = RwSignal::new(initial_screen::<Region>(Route::Region {
        name: untrack(name),
    }));

    Effect::new(move |_| {
        let name = name();
        let url = endpoints.region_url(&name);
        load_screen(state, Route::Region { name }, url);
    });

    move || view! { <RegionScreen screen=state.with(|s| s.screen().clone()) /> }
}

#[component]
pub fn RegionScreen(screen: Screen<Region>) -> impl IntoView {
    match screen {
        Screen::Loading => view! { <Loader text="Caricamento dati macrozone..." /> }.into_any(),
        Screen::NotFound => view! {
            <div class="dashboard">
                <p>"Regione non trovata."</p>
            </div>
        }
        .into_any(),
        Screen::Ready(region) => view! { <RegionDetail region=region /> }.into_any(),
    }
}

#[component]
fn RegionDetail(region: Region) -> impl IntoView {
    let Region {
        name,
        macrozones,
        hubs,
        ..
    } = region;

    let macrozone_cards = macrozones
        .into_iter()
        .map(|macrozone| view! { <MacrozoneCard region=name.clone() macrozone=macrozone /> })
        .collect::<Vec<_>>();
    let hub_cards = hubs
        .into_iter()
        .map(|hub| view! { <HubCard hub=hub /> })
        .collect::<Vec<_>>();

    view! {
        <div class="region-dashboard">
            <header class="region-dashboard-header" style="display: flex; align-items: center; margin-bottom: 1.5rem;">
                <BackButton />
                <h1 class="region-dashboard-title" style="margin: 0;">{name.clone()}</h1>
            </header>
            <div class="macrozone-cards-container" style="display: flex; gap: 1rem; flex-wrap: wrap; margin-bottom: 1.5rem;">
                {macrozone_cards}
            </div>
            <div class="region-hubs-container" style="margin-bottom: 1.5rem;">
                <h2>"Hubs"</h2>
                <div class="region-hubs-list" style="display: flex; gap: 1rem; flex-wrap: wrap;">
                    {hub_cards}
                </div>
            </div>
            <VariationPanel region=name.clone() />
            <CorrelationPanel region=name.clone() />
            <TrendPanel region=name />
        </div>
    }
}
