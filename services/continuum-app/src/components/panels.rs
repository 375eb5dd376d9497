//! Region analysis panels: trend similarity, year-over-year variation and
//! variation correlation
//!
//! Each panel keeps the raw text of its inputs, builds its query on submit
//! and replaces its own result map independently of the other panels.

use chrono::{NaiveDate, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use crate::api::{ByMacrozone, TrendEntry, VariationCorrelationEntry, VariationEntry};
use crate::components::loader::Loader;
use crate::context::{use_display, use_endpoints};
use crate::endpoints::TemplateError;
use crate::fetch::get_templated;
use crate::format::{format_fixed, format_scientific, Divergence, Indicator, Trend, NOT_AVAILABLE};
use crate::query::{
    format_date_input, latest_analysis_date, parse_date_input, parse_number_input,
    CorrelationQuery, TrendQuery, VariationQuery, DEFAULT_CORRELATION_RADIUS, DEFAULT_TREND_DAYS,
};
use crate::state::{request, QueryPanel};

const FORM_STYLE: &str = "margin: 1.5rem 0 0.5rem; padding: 1rem; border: 1px solid #dee2e6; border-radius: 0.5rem;";
const FIELDS_STYLE: &str = "display: flex; gap: 1rem; flex-wrap: wrap; margin-bottom: 0.75rem;";
const GROUP_STYLE: &str = "margin-bottom: 1rem; padding: 0.75rem; border: 1px solid #dee2e6; border-radius: 0.5rem;";
const TYPE_CARD_STYLE: &str = "min-width: 14rem; padding: 0.5rem 0.75rem; border-radius: 0.5rem; background: #f8f9fa;";
const NO_DATA_STYLE: &str = "color: #6c757d; font-style: italic;";

/// Replace the panel's query with `query` and fetch `url_for(query)`
pub fn submit_query<Q, R>(
    panel: RwSignal<QueryPanel<Q, R>>,
    query: Q,
    url_for: impl FnOnce(&Q) -> Result<String, TemplateError>,
) where
    Q: Send + Sync + 'static,
    R: DeserializeOwned + Default + Send + Sync + 'static,
{
    let url = url_for(&query);
    let task = request(
        move || {
            panel.try_update(|p| {
                p.query = query;
                p.submit()
            })
        },
        move || get_templated::<R>(url),
        move |ticket, result| {
            panel.update(|p| {
                p.resolve(ticket, result);
            });
        },
    );
    if let Some(task) = task {
        spawn_local(task);
    }
}

fn today(display_tz: chrono_tz::Tz) -> NaiveDate {
    Utc::now().with_timezone(&display_tz).date_naive()
}

fn macrozone_label(name: Option<&str>) -> String {
    name.filter(|n| !n.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

/// One labelled value, optionally followed by an indicator icon
#[component]
fn Metric(
    label: &'static str,
    value: String,
    #[prop(optional)] indicator: Option<Indicator>,
) -> impl IntoView {
    view! {
        <p style="margin: 0.25rem 0;">
            <strong>{label}": "</strong>
            {value}
            {indicator.map(|i| view! { " " <i class=i.class() style=i.style()></i> })}
        </p>
    }
}

/// Results grouped by macrozone, one card per reading type
fn render_groups<T: Clone>(
    result: &ByMacrozone<T>,
    empty_text: &'static str,
    render_entry: impl Fn(&str, &T) -> AnyView,
) -> AnyView {
    if result.is_empty() {
        return view! { <p class="panel-no-data" style=NO_DATA_STYLE>{empty_text}</p> }.into_any();
    }
    result
        .iter()
        .map(|(macrozone, types)| {
            let cards = types
                .iter()
                .map(|(kind, entry)| render_entry(kind, entry))
                .collect::<Vec<_>>();
            view! {
                <div class="panel-macrozone" style=GROUP_STYLE>
                    <h2 style="font-size: 1.25rem;">{macrozone.clone()}</h2>
                    <div style="display: flex; gap: 0.75rem; flex-wrap: wrap;">{cards}</div>
                </div>
            }
        })
        .collect::<Vec<_>>()
        .into_any()
}

fn trend_card(kind: &str, entry: &TrendEntry) -> AnyView {
    view! {
        <div class="panel-type-card" style=TYPE_CARD_STYLE>
            <h4 style="font-size: 1rem;">{kind.to_string()}</h4>
            <Metric label="Macrozone" value=macrozone_label(entry.macrozone.as_deref()) />
            <Metric label="Correlation" value=format_fixed(entry.correlation, 3) />
            <Metric
                label="Slope Macro"
                value=format_scientific(entry.slope_macro)
                indicator=Trend::from_slope(entry.slope_macro).indicator()
            />
            <Metric
                label="Slope Region"
                value=format_scientific(entry.slope_region)
                indicator=Trend::from_slope(entry.slope_region).indicator()
            />
            <Metric
                label="Divergence"
                value=format_scientific(entry.divergence)
                indicator=Divergence::classify(entry.divergence).indicator()
            />
        </div>
    }
    .into_any()
}

fn variation_card(kind: &str, entry: &VariationEntry) -> AnyView {
    view! {
        <div class="panel-type-card" style=TYPE_CARD_STYLE>
            <h4 style="font-size: 1rem;">{kind.to_string()}</h4>
            <Metric label="Macrozone" value=macrozone_label(entry.macrozone.as_deref()) />
            <Metric label="Current" value=format_fixed(entry.current, 2) />
            <Metric label="Previous" value=format_fixed(entry.previous, 2) />
            <Metric
                label="Delta %"
                value=format_fixed(entry.delta_perc, 2)
                indicator=Trend::from_delta(entry.delta_perc).indicator()
            />
        </div>
    }
    .into_any()
}

fn correlation_card(kind: &str, entry: &VariationCorrelationEntry) -> AnyView {
    let variation = entry.variation.as_ref();
    view! {
        <div class="panel-type-card" style=TYPE_CARD_STYLE>
            <h4 style="font-size: 1rem;">{kind.to_string()}</h4>
            <Metric label="Macrozone" value=macrozone_label(entry.macrozone.as_deref()) />
            <Metric label="Current Variation" value=format_fixed(variation.and_then(|v| v.current), 2) />
            <Metric label="Previous Variation" value=format_fixed(variation.and_then(|v| v.previous), 2) />
            <Metric label="Neighbor Mean" value=format_fixed(entry.neighbor_mean, 2) />
            <Metric label="Neighbor Std Dev" value=format_fixed(entry.neighbor_std_dev, 2) />
            <Metric label="Abs Error" value=format_fixed(entry.abs_error, 2) />
            <Metric label="Z-score" value=format_fixed(entry.z_score, 2) />
        </div>
    }
    .into_any()
}

/// Year-over-year variation for one day
#[component]
pub fn VariationPanel(region: String) -> impl IntoView {
    let endpoints = StoredValue::new(use_endpoints());
    let region = StoredValue::new(region);
    let max_date = latest_analysis_date(today(use_display().timezone));
    let date_input = RwSignal::new(format_date_input(Some(max_date)));
    let panel = RwSignal::new(QueryPanel::<VariationQuery, ByMacrozone<VariationEntry>>::new(
        VariationQuery::default(),
    ));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let query = VariationQuery {
            date: parse_date_input(&date_input.get_untracked()),
        };
        submit_query(panel, query, |q| {
            endpoints.with_value(|e| region.with_value(|r| e.variation_url(r, q)))
        });
    };
    let loading = move || panel.with(|p| p.is_loading());

    view! {
        <form class="search-form variation-form" style=FORM_STYLE on:submit=on_submit>
            <h3>"Variazioni Annuali Macrozone"</h3>
            <div style=FIELDS_STYLE>
                <label>
                    "Giorno: "
                    <input
                        type="date"
                        class="form-control"
                        max=format_date_input(Some(max_date))
                        prop:value=move || date_input.get()
                        on:input=move |ev| date_input.set(event_target_value(&ev))
                    />
                </label>
            </div>
            <button type="submit" class="btn btn-primary" disabled=loading>
                {move || if loading() { "Caricamento..." } else { "Cerca" }}
            </button>
        </form>
        <div class="variation-results">
            {move || {
                if loading() {
                    return view! { <Loader text="Caricamento variazioni..." /> }.into_any();
                }
                panel.with(|p| render_groups(p.result(), "Nessun dato disponibile.", variation_card))
            }}
        </div>
    }
}

/// Variation of each macrozone against its neighbours within a radius
#[component]
pub fn CorrelationPanel(region: String) -> impl IntoView {
    let endpoints = StoredValue::new(use_endpoints());
    let region = StoredValue::new(region);
    let radius_input = RwSignal::new(DEFAULT_CORRELATION_RADIUS.to_string());
    let panel = RwSignal::new(QueryPanel::<
        CorrelationQuery,
        ByMacrozone<VariationCorrelationEntry>,
    >::new(CorrelationQuery::default()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let query = CorrelationQuery {
            radius: parse_number_input(&radius_input.get_untracked()),
        };
        submit_query(panel, query, |q| {
            endpoints.with_value(|e| region.with_value(|r| e.correlation_url(r, q)))
        });
    };
    let loading = move || panel.with(|p| p.is_loading());

    view! {
        <form class="search-form correlation-form" style=FORM_STYLE on:submit=on_submit>
            <h3>"Correlazione Variazioni Annuali"</h3>
            <div style=FIELDS_STYLE>
                <label>
                    "Raggio: "
                    <input
                        type="number"
                        class="form-control"
                        min="1"
                        prop:value=move || radius_input.get()
                        on:input=move |ev| radius_input.set(event_target_value(&ev))
                    />
                </label>
            </div>
            <button type="submit" class="btn btn-primary" disabled=loading>
                {move || if loading() { "Calcolo in corso..." } else { "Calcola Correlazione" }}
            </button>
        </form>
        <div class="correlation-results">
            {move || {
                if loading() {
                    return view! { <Loader text="Calcolo correlazioni..." /> }.into_any();
                }
                panel.with(|p| {
                    render_groups(
                        p.result(),
                        "Nessun dato di correlazione disponibile.",
                        correlation_card,
                    )
                })
            }}
        </div>
    }
}

/// Similarity between each macrozone trend and the region trend
#[component]
pub fn TrendPanel(region: String) -> impl IntoView {
    let endpoints = StoredValue::new(use_endpoints());
    let region = StoredValue::new(region);
    let max_date = latest_analysis_date(today(use_display().timezone));
    let days_input = RwSignal::new(DEFAULT_TREND_DAYS.to_string());
    let date_input = RwSignal::new(format_date_input(Some(max_date)));
    let panel = RwSignal::new(QueryPanel::<TrendQuery, ByMacrozone<TrendEntry>>::new(
        TrendQuery::default(),
    ));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let query = TrendQuery {
            days: parse_number_input(&days_input.get_untracked()),
            date: parse_date_input(&date_input.get_untracked()),
        };
        submit_query(panel, query, |q| {
            endpoints.with_value(|e| region.with_value(|r| e.trend_url(r, q)))
        });
    };
    let loading = move || panel.with(|p| p.is_loading());

    view! {
        <form class="search-form trend-form" style=FORM_STYLE on:submit=on_submit>
            <h3>"Trend Macrozone"</h3>
            <div style=FIELDS_STYLE>
                <label>
                    "Giorni da considerare: "
                    <input
                        type="number"
                        class="form-control"
                        min="1"
                        prop:value=move || days_input.get()
                        on:input=move |ev| days_input.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Giorno: "
                    <input
                        type="date"
                        class="form-control"
                        max=format_date_input(Some(max_date))
                        prop:value=move || date_input.get()
                        on:input=move |ev| date_input.set(event_target_value(&ev))
                    />
                </label>
            </div>
            <button type="submit" class="btn btn-primary" disabled=loading>
                {move || if loading() { "Ricerca in corso..." } else { "Cerca trend" }}
            </button>
        </form>
        <div class="trend-results">
            {move || {
                if loading() {
                    return view! { <Loader text="Caricamento trend..." /> }.into_any();
                }
                panel.with(|p| render_groups(p.result(), "Nessun dato di trend disponibile.", trend_card))
            }}
        </div>
    }
}
