//! Detail modals
//!
//! Each modal owns a [`DetailModal`] signal. [`open_detail`] shows it,
//! issues exactly one fetch and applies the response only if the modal is
//! still waiting for that request.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use crate::api::{AggregatePoint, Sensor, TimeSeriesPoint, Zone};
use crate::components::loader::Loader;
use crate::components::tables::{AggregateTable, ReadingTable};
use crate::endpoints::TemplateError;
use crate::fetch::get_templated;
use crate::state::{request, DetailModal};

pub type SensorModalState = DetailModal<Sensor, Vec<TimeSeriesPoint>>;
pub type ZoneModalState = DetailModal<Zone, Vec<AggregatePoint>>;
pub type MacrozoneModalState = DetailModal<String, Vec<AggregatePoint>>;

/// Open `modal` on `selection` and load its data from `url`
pub fn open_detail<S, D>(
    modal: RwSignal<DetailModal<S, D>>,
    selection: S,
    url: Result<String, TemplateError>,
) where
    S: Send + Sync + 'static,
    D: DeserializeOwned + Default + Send + Sync + 'static,
{
    let task = request(
        move || modal.try_update(|m| m.open(selection)),
        move || get_templated::<D>(url),
        move |ticket, result| {
            modal.update(|m| {
                m.resolve(ticket, result);
            });
        },
    );
    if let Some(task) = task {
        spawn_local(task);
    }
}

/// Overlay with a title bar and a close button
#[component]
fn ModalFrame(title: String, on_close: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div
            class="modal-backdrop"
            style="position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); \
                   display: flex; align-items: center; justify-content: center; z-index: 1000;"
        >
            <div
                class="modal-dialog"
                role="dialog"
                style="background: #fff; border-radius: 0.5rem; width: min(900px, 95vw); \
                       max-height: 90vh; overflow: auto;"
            >
                <div
                    class="modal-header"
                    style="display: flex; justify-content: space-between; align-items: center; \
                           padding: 1rem; border-bottom: 1px solid #dee2e6;"
                >
                    <h5 class="modal-title" style="margin: 0;">{title}</h5>
                    <button
                        type="button"
                        class="btn-close"
                        title="Chiudi"
                        on:click=move |_| on_close.run(())
                    >
                        "\u{00D7}"
                    </button>
                </div>
                <div class="modal-body" style="padding: 1rem;">{children()}</div>
            </div>
        </div>
    }
}

#[component]
pub fn SensorDataModal(modal: RwSignal<SensorModalState>) -> impl IntoView {
    let close = Callback::new(move |_: ()| modal.update(|m| m.close()));

    move || {
        modal.with(|m| {
            if !m.is_visible() {
                return None;
            }
            let title = format!(
                "Rilevazioni sensore {}",
                m.selection().map(|s| s.id.as_str()).unwrap_or_default()
            );
            let body = if m.is_loading() {
                view! { <Loader text="Caricamento dati sensore..." /> }.into_any()
            } else {
                view! { <ReadingTable rows=m.data().clone() /> }.into_any()
            };
            Some(view! { <ModalFrame title=title on_close=close>{body}</ModalFrame> })
        })
    }
}

#[component]
pub fn ZoneAggregateModal(modal: RwSignal<ZoneModalState>) -> impl IntoView {
    let close = Callback::new(move |_: ()| modal.update(|m| m.close()));

    move || {
        modal.with(|m| {
            if !m.is_visible() {
                return None;
            }
            let title = format!(
                "Dati aggregati zona {}",
                m.selection().map(|z| z.name.as_str()).unwrap_or_default()
            );
            let body = if m.is_loading() {
                view! { <Loader text="Caricamento dati zona..." /> }.into_any()
            } else {
                view! { <AggregateTable rows=m.data().clone() /> }.into_any()
            };
            Some(view! { <ModalFrame title=title on_close=close>{body}</ModalFrame> })
        })
    }
}

#[component]
pub fn MacrozoneAggregateModal(modal: RwSignal<MacrozoneModalState>) -> impl IntoView {
    let close = Callback::new(move |_: ()| modal.update(|m| m.close()));

    move || {
        modal.with(|m| {
            if !m.is_visible() {
                return None;
            }
            let title = format!(
                "Dati aggregati macrozona {}",
                m.selection().map(String::as_str).unwrap_or_default()
            );
            let body = if m.is_loading() {
                view! { <Loader text="Caricamento dati macrozona..." /> }.into_any()
            } else {
                view! { <AggregateTable rows=m.data().clone() /> }.into_any()
            };
            Some(view! { <ModalFrame title=title on_close=close>{body}</ModalFrame> })
        })
    }
}
