use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::api::{Macrozone, Sensor, Zone};
use crate::components::back_button::BackButton;
use crate::components::loader::Loader;
use crate::components::modals::{
    open_detail, MacrozoneAggregateModal, MacrozoneModalState, SensorDataModal, SensorModalState,
    ZoneAggregateModal, ZoneModalState,
};
use crate::components::tables::HubTable;
use crate::components::zone_card::ZoneCard;
use crate::context::{initial_screen, use_endpoints};
use crate::nav::Route;
use crate::pages::load_screen;
use crate::state::Screen;
use crate::zones::group_by_zone;

/// `/macrozone/:region_name/:macrozone_name`
#[component]
pub fn MacrozoneDashboard() -> impl IntoView {
    let endpoints = use_endpoints();
    let params = use_params_map();
    let route = move || {
        params.with(|p| Route::Macrozone {
            region: p.get("region_name").unwrap_or_default(),
            macrozone: p.get("macrozone_name").unwrap_or_default(),
        })
    };
    let state = RwSignal::new(initial_screen::<Macrozone>(untrack(route)));

    Effect::new(move |_| {
        let route = route();
        let Route::Macrozone { region, macrozone } = &route else {
            return;
        };
        let url = endpoints.macrozone_url(region, macrozone);
        load_screen(state, route, url);
    });

    move || {
        state.with(|s| {
            let (region, macrozone) = match s.route().cloned().unwrap_or_else(|| untrack(route)) {
                Route::Macrozone { region, macrozone } => (region, macrozone),
                _ => Default::default(),
            };
            view! { <MacrozoneScreen region=region macrozone=macrozone screen=s.screen().clone() /> }
        })
    }
}

/// Macrozone screen; `region` and `macrozone` are the names from the route,
/// used to address the detail endpoints
#[component]
pub fn MacrozoneScreen(region: String, macrozone: String, screen: Screen<Macrozone>) -> impl IntoView {
    match screen {
        Screen::Loading => view! { <Loader text="Caricamento dati zone..." /> }.into_any(),
        Screen::NotFound => view! {
            <div class="dashboard">
                <p>"Macrozone non trovata."</p>
            </div>
        }
        .into_any(),
        Screen::Ready(data) => {
            view! { <MacrozoneDetail region=region macrozone=macrozone data=data /> }.into_any()
        }
    }
}

#[component]
fn MacrozoneDetail(region: String, macrozone: String, data: Macrozone) -> impl IntoView {
    let endpoints = StoredValue::new(use_endpoints());
    let names = StoredValue::new((region, macrozone));
    let sensor_modal = RwSignal::new(SensorModalState::default());
    let zone_modal = RwSignal::new(ZoneModalState::default());
    let macrozone_modal = RwSignal::new(MacrozoneModalState::default());

    let on_sensor = Callback::new(move |sensor: Sensor| {
        let url = endpoints.with_value(|e| {
            names.with_value(|(region, macrozone)| {
                e.sensor_raw_data_url(region, macrozone, &sensor.zone_name, &sensor.id)
            })
        });
        open_detail(sensor_modal, sensor, url);
    });
    let on_zone = Callback::new(move |zone: Zone| {
        let url = endpoints.with_value(|e| {
            names.with_value(|(region, macrozone)| e.zone_aggregate_url(region, macrozone, &zone.name))
        });
        open_detail(zone_modal, zone, url);
    });
    let on_macrozone = move |_| {
        let (url, name) = endpoints.with_value(|e| {
            names.with_value(|(region, macrozone)| {
                (e.macrozone_aggregate_url(region, macrozone), macrozone.clone())
            })
        });
        open_detail(macrozone_modal, name, url);
    };

    let title = format!("Macrozona: {}", data.name);
    let zone_cards = group_by_zone(&data)
        .into_iter()
        .map(|group| view! { <ZoneCard group=group on_aggregate=on_zone on_sensor=on_sensor /> })
        .collect::<Vec<_>>();

    view! {
        <div class="macrozone-dashboard">
            <div class="macrozone-header-card" style="margin: 1.5rem 0; border: 1px solid #0d6efd; border-radius: 0.5rem;">
                <div
                    class="macrozone-header"
                    style="display: flex; justify-content: space-between; align-items: center; \
                           padding: 0.5rem 1rem; background: #0d6efd; color: #fff;"
                >
                    <BackButton />
                    <h1 style="margin: 0;"><b>{title}</b></h1>
                    <button
                        type="button"
                        class="btn btn-sm btn-light"
                        title="Visualizza dati aggregati macrozona"
                        on:click=on_macrozone
                    >
                        <i class="bi bi-eye"></i>
                    </button>
                </div>
                <div class="macrozone-hubs" style="padding: 1rem;">
                    <h2 style="color: #0dcaf0;">"Hubs Macrozona"</h2>
                    <HubTable rows=data.hubs />
                </div>
            </div>
            {zone_cards}
            <MacrozoneAggregateModal modal=macrozone_modal />
            <ZoneAggregateModal modal=zone_modal />
            <SensorDataModal modal=sensor_modal />
        </div>
    }
}
