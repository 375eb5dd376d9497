use leptos::prelude::*;

use crate::api::{Sensor, Zone};
use crate::components::tables::{HubTable, SensorTable};
use crate::zones::ZoneGroup;

/// Collapsible card for one zone; starts collapsed, collapsed content stays
/// in the page hidden
#[component]
pub fn ZoneCard(
    group: ZoneGroup,
    on_aggregate: Callback<Zone>,
    on_sensor: Callback<Sensor>,
) -> impl IntoView {
    let collapsed = RwSignal::new(true);
    let ZoneGroup { zone, hubs, sensors } = group;
    let title = format!("Zona: {}", zone.name);

    view! {
        <div class="zone-card" style="margin-bottom: 1.5rem; border: 1px solid #0dcaf0; border-radius: 0.5rem;">
            <div
                class="zone-card-header"
                style="display: flex; justify-content: space-between; align-items: center; \
                       padding: 0.5rem 1rem; background: #0dcaf0; color: #fff;"
            >
                <span><b>{title}</b></span>
                <div style="display: flex; gap: 0.5rem;">
                    <button
                        type="button"
                        class="btn btn-sm btn-light"
                        title="Visualizza dati aggregati zona"
                        on:click=move |_| on_aggregate.run(zone.clone())
                    >
                        <i class="bi bi-eye"></i>
                    </button>
                    <button
                        type="button"
                        class="btn btn-sm btn-light zone-toggle"
                        on:click=move |_| collapsed.update(|c| *c = !*c)
                    >
                        <i class=move || if collapsed.get() { "bi bi-plus" } else { "bi bi-dash" }></i>
                    </button>
                </div>
            </div>
            <div class="zone-card-body" style="padding: 1rem;" hidden=move || collapsed.get()>
                <h3>"Hubs:"</h3>
                <HubTable rows=hubs />
                <h3 style="margin-top: 1.5rem;">"Sensori:"</h3>
                <SensorTable rows=sensors on_view=on_sensor />
            </div>
        </div>
    }
}
