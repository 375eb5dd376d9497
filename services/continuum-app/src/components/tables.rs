//! Data tables
//!
//! Each table keeps the full row set it was given and derives the visible
//! page on every change of search, sort or page. Nothing is re-fetched.

use chrono::Utc;
use leptos::prelude::*;

use crate::api::{AggregatePoint, Hub, Sensor, TimeSeriesPoint};
use crate::components::status_badge::StatusBadge;
use crate::components::table_controls::{
    Pager, SearchBox, SortHeader, CELL_STYLE, HEADER_ROW_STYLE, ROW_STYLE, TABLE_STYLE,
};
use crate::context::use_display;
use crate::filter::filter_rows;
use crate::format::{format_date, format_epoch, is_active, DateStyle, MACROZONE_ACTIVE_WINDOW};
use crate::table::{
    paginate, sort_rows, AggregateColumn, HubColumn, ReadingColumn, SensorColumn, Sort,
};

/// Raw reading or aggregate value as the backend sent it
fn format_value(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

#[component]
fn EmptyRow(columns: usize, text: &'static str) -> impl IntoView {
    view! {
        <tr>
            <td colspan=columns.to_string() style="padding: 1rem; text-align: center; color: #6c757d;">
                {text}
            </td>
        </tr>
    }
}

/// Hubs with search, sorting, pagination and a ten minute activity badge
#[component]
pub fn HubTable(rows: Vec<Hub>) -> impl IntoView {
    let display = use_display();
    let rows = StoredValue::new(rows);
    let query = RwSignal::new(String::new());
    let sort = RwSignal::new(None::<Sort<HubColumn>>);
    let page = RwSignal::new(1usize);

    let matching = move || {
        let mut matching = rows.with_value(|rows| filter_rows(rows, &query.get()));
        sort_rows(&mut matching, sort.get());
        matching
    };
    let total = Signal::derive(move || matching().len());

    view! {
        <div class="hub-table">
            <SearchBox query=query page=page />
            <table style=TABLE_STYLE>
                <thead>
                    <tr style=HEADER_ROW_STYLE>
                        <SortHeader label="ID" column=HubColumn::Id sort=sort />
                        <SortHeader label="Servizio" column=HubColumn::Service sort=sort />
                        <SortHeader label="Registrazione" column=HubColumn::Registration sort=sort />
                        <SortHeader label="Ultima attività" column=HubColumn::LastSeen sort=sort />
                        <th style=CELL_STYLE>"Stato"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let visible = paginate(&matching(), page.get(), display.page_size);
                        if visible.is_empty() {
                            return view! { <EmptyRow columns=5 text="Nessun hub" /> }.into_any();
                        }
                        let now = Utc::now();
                        visible
                            .into_iter()
                            .map(|hub| {
                                let active = is_active(hub.last_seen.as_deref(), now, MACROZONE_ACTIVE_WINDOW);
                                let registered = format_date(hub.registration_time.as_deref(), DateStyle::Table, display.timezone);
                                let last_seen = format_date(hub.last_seen.as_deref(), DateStyle::Table, display.timezone);
                                view! {
                                    <tr class="hub-row" style=ROW_STYLE>
                                        <td style=CELL_STYLE>{hub.id}</td>
                                        <td style=CELL_STYLE>{hub.service}</td>
                                        <td style=CELL_STYLE>{registered}</td>
                                        <td style=CELL_STYLE>{last_seen}</td>
                                        <td style=CELL_STYLE><StatusBadge active=active /></td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </tbody>
            </table>
            <Pager page=page total=total page_size=display.page_size />
        </div>
    }
}

/// Sensors with search, sorting, pagination and a button opening the
/// sensor's raw readings
#[component]
pub fn SensorTable(rows: Vec<Sensor>, on_view: Callback<Sensor>) -> impl IntoView {
    let display = use_display();
    let rows = StoredValue::new(rows);
    let query = RwSignal::new(String::new());
    let sort = RwSignal::new(None::<Sort<SensorColumn>>);
    let page = RwSignal::new(1usize);

    let matching = move || {
        let mut matching = rows.with_value(|rows| filter_rows(rows, &query.get()));
        sort_rows(&mut matching, sort.get());
        matching
    };
    let total = Signal::derive(move || matching().len());

    view! {
        <div class="sensor-table">
            <SearchBox query=query page=page />
            <table style=TABLE_STYLE>
                <thead>
                    <tr style=HEADER_ROW_STYLE>
                        <SortHeader label="ID" column=SensorColumn::Id sort=sort />
                        <SortHeader label="Tipo" column=SensorColumn::Kind sort=sort />
                        <SortHeader label="Riferimento" column=SensorColumn::Reference sort=sort />
                        <SortHeader label="Registrazione" column=SensorColumn::Registration sort=sort />
                        <SortHeader label="Ultima attività" column=SensorColumn::LastSeen sort=sort />
                        <th style=CELL_STYLE>"Stato"</th>
                        <th style=CELL_STYLE></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let visible = paginate(&matching(), page.get(), display.page_size);
                        if visible.is_empty() {
                            return view! { <EmptyRow columns=7 text="Nessun sensore" /> }.into_any();
                        }
                        let now = Utc::now();
                        visible
                            .into_iter()
                            .map(|sensor| {
                                let active = is_active(sensor.last_seen.as_deref(), now, MACROZONE_ACTIVE_WINDOW);
                                let registered = format_date(sensor.registration_time.as_deref(), DateStyle::Table, display.timezone);
                                let last_seen = format_date(sensor.last_seen.as_deref(), DateStyle::Table, display.timezone);
                                let selected = sensor.clone();
                                view! {
                                    <tr class="sensor-row" style=ROW_STYLE>
                                        <td style=CELL_STYLE>{sensor.id}</td>
                                        <td style=CELL_STYLE>{sensor.kind}</td>
                                        <td style=CELL_STYLE>{sensor.reference}</td>
                                        <td style=CELL_STYLE>{registered}</td>
                                        <td style=CELL_STYLE>{last_seen}</td>
                                        <td style=CELL_STYLE><StatusBadge active=active /></td>
                                        <td style=CELL_STYLE>
                                            <button
                                                type="button"
                                                class="btn btn-sm btn-outline-primary"
                                                title="Visualizza rilevazioni"
                                                on:click=move |_| on_view.run(selected.clone())
                                            >
                                                <i class="bi bi-eye"></i>
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </tbody>
            </table>
            <Pager page=page total=total page_size=display.page_size />
        </div>
    }
}

/// Raw sensor readings
#[component]
pub fn ReadingTable(rows: Vec<TimeSeriesPoint>) -> impl IntoView {
    let display = use_display();
    let rows = StoredValue::new(rows);
    let sort = RwSignal::new(None::<Sort<ReadingColumn>>);
    let page = RwSignal::new(1usize);

    let sorted = move || {
        let mut sorted = rows.get_value();
        sort_rows(&mut sorted, sort.get());
        sorted
    };
    let total = Signal::derive(move || rows.with_value(Vec::len));

    view! {
        <table class="reading-table" style=TABLE_STYLE>
            <thead>
                <tr style=HEADER_ROW_STYLE>
                    <SortHeader label="Timestamp" column=ReadingColumn::Timestamp sort=sort />
                    <SortHeader label="Tipo" column=ReadingColumn::Kind sort=sort />
                    <SortHeader label="Valore" column=ReadingColumn::Value sort=sort />
                </tr>
            </thead>
            <tbody>
                {move || {
                    let visible = paginate(&sorted(), page.get(), display.page_size);
                    if visible.is_empty() {
                        return view! { <EmptyRow columns=3 text="Nessuna rilevazione" /> }.into_any();
                    }
                    visible
                        .into_iter()
                        .map(|point| {
                            view! {
                                <tr style=ROW_STYLE>
                                    <td style=CELL_STYLE>{format_epoch(point.timestamp, display.timezone)}</td>
                                    <td style=CELL_STYLE>{point.kind}</td>
                                    <td style=CELL_STYLE>{format_value(point.data)}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </tbody>
        </table>
        <Pager page=page total=total page_size=display.page_size />
    }
}

/// Aggregated min/max/average rows
#[component]
pub fn AggregateTable(rows: Vec<AggregatePoint>) -> impl IntoView {
    let display = use_display();
    let rows = StoredValue::new(rows);
    let sort = RwSignal::new(None::<Sort<AggregateColumn>>);
    let page = RwSignal::new(1usize);

    let sorted = move || {
        let mut sorted = rows.get_value();
        sort_rows(&mut sorted, sort.get());
        sorted
    };
    let total = Signal::derive(move || rows.with_value(Vec::len));

    view! {
        <table class="aggregate-table" style=TABLE_STYLE>
            <thead>
                <tr style=HEADER_ROW_STYLE>
                    <SortHeader label="Timestamp" column=AggregateColumn::Timestamp sort=sort />
                    <SortHeader label="Tipo" column=AggregateColumn::Kind sort=sort />
                    <SortHeader label="Min" column=AggregateColumn::Min sort=sort />
                    <SortHeader label="Max" column=AggregateColumn::Max sort=sort />
                    <SortHeader label="Media" column=AggregateColumn::Avg sort=sort />
                </tr>
            </thead>
            <tbody>
                {move || {
                    let visible = paginate(&sorted(), page.get(), display.page_size);
                    if visible.is_empty() {
                        return view! { <EmptyRow columns=5 text="Nessun dato aggregato" /> }.into_any();
                    }
                    visible
                        .into_iter()
                        .map(|point| {
                            view! {
                                <tr style=ROW_STYLE>
                                    <td style=CELL_STYLE>{format_epoch(point.timestamp, display.timezone)}</td>
                                    <td style=CELL_STYLE>{point.kind}</td>
                                    <td style=CELL_STYLE>{format_value(point.min)}</td>
                                    <td style=CELL_STYLE>{format_value(point.max)}</td>
                                    <td style=CELL_STYLE>{format_value(point.avg)}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </tbody>
        </table>
        <Pager page=page total=total page_size=display.page_size />
    }
}
