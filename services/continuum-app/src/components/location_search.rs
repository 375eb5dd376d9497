use leptos::prelude::*;

use crate::api::AggregatePoint;
use crate::components::loader::Loader;
use crate::components::panels::submit_query;
use crate::components::tables::AggregateTable;
use crate::context::use_endpoints;
use crate::query::{parse_number_input, LocationQuery};
use crate::state::QueryPanel;

/// Aggregated data of the macrozones around a point
#[component]
pub fn LocationSearch() -> impl IntoView {
    let endpoints = StoredValue::new(use_endpoints());
    let lat_input = RwSignal::new(String::new());
    let lon_input = RwSignal::new(String::new());
    let radius_input = RwSignal::new(String::new());
    let panel = RwSignal::new(QueryPanel::<LocationQuery, Vec<AggregatePoint>>::new(
        LocationQuery::default(),
    ));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let query = LocationQuery {
            lat: parse_number_input(&lat_input.get_untracked()),
            lon: parse_number_input(&lon_input.get_untracked()),
            radius: parse_number_input(&radius_input.get_untracked()),
        };
        submit_query(panel, query, |q| {
            endpoints.with_value(|e| e.location_aggregate_url(q))
        });
    };
    let loading = move || panel.with(|p| p.is_loading());

    let field = move |label: &'static str, input: RwSignal<String>| {
        view! {
            <label>
                {label}
                <input
                    type="number"
                    step="any"
                    class="form-control"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <section class="location-search" style="margin-top: 2rem;">
            <form
                class="search-form"
                style="padding: 1rem; border: 1px solid #dee2e6; border-radius: 0.5rem;"
                on:submit=on_submit
            >
                <h3>"Dati aggregati per posizione"</h3>
                <div style="display: flex; gap: 1rem; flex-wrap: wrap; margin-bottom: 0.75rem;">
                    {field("Latitudine: ", lat_input)}
                    {field("Longitudine: ", lon_input)}
                    {field("Raggio: ", radius_input)}
                </div>
                <button type="submit" class="btn btn-primary" disabled=loading>
                    {move || if loading() { "Caricamento..." } else { "Cerca" }}
                </button>
            </form>
            {move || {
                if loading() {
                    return Some(view! { <Loader text="Caricamento dati aggregati..." /> }.into_any());
                }
                panel.with(|p| {
                    p.has_submitted()
                        .then(|| view! { <AggregateTable rows=p.result().clone() /> }.into_any())
                })
            }}
        </section>
    }
}
