//! Summary cards for regions, macrozones and hubs
//!
//! Region and macrozone cards are links to their detail screen. Hub cards
//! show activity against the five minute card window.

use chrono::Utc;
use leptos::prelude::*;

use crate::api::{Hub, Macrozone, Region};
use crate::components::status_badge::StatusBadge;
use crate::context::use_display;
use crate::format::{format_date, is_active, DateStyle, CARD_ACTIVE_WINDOW};
use crate::nav::Route;

const LINK_CARD_STYLE: &str = "display: block; min-width: 14rem; padding: 1rem; \
     border: 1px solid #dee2e6; border-radius: 0.5rem; color: inherit; text-decoration: none;";

const ENTITY_CARD_STYLE: &str = "display: flex; flex-direction: column; gap: 0.25rem; \
     min-width: 14rem; padding: 0.75rem; border: 1px solid #dee2e6; border-radius: 0.5rem;";

/// Round badge with a short code, e.g. "R" or "MZ"
#[component]
fn CardIcon(code: &'static str) -> impl IntoView {
    view! {
        <svg width="22" height="22" viewBox="0 0 24 24">
            <circle cx="12" cy="12" r="10" fill="#1976d2"></circle>
            <text x="12" y="16" text-anchor="middle" font-size="12" fill="#fff">{code}</text>
        </svg>
    }
}

#[component]
pub fn RegionCard(region: Region) -> impl IntoView {
    let href = Route::Region {
        name: region.name.clone(),
    }
    .path();

    view! {
        <a class="region-card" href=href style=LINK_CARD_STYLE>
            <div class="region-card-header" style="display: flex; align-items: center; gap: 0.5rem;">
                <CardIcon code="R" />
                <h2 style="margin: 0;">{region.name}</h2>
            </div>
            <p>"Macrozone: "<b>{region.macrozone_count}</b></p>
        </a>
    }
}

#[component]
pub fn MacrozoneCard(region: String, macrozone: Macrozone) -> impl IntoView {
    let display = use_display();
    let href = Route::Macrozone {
        region,
        macrozone: macrozone.name.clone(),
    }
    .path();
    let created = format_date(
        macrozone.creation_time.as_deref(),
        DateStyle::Creation,
        display.timezone,
    );

    view! {
        <a class="macrozone-card" href=href style=LINK_CARD_STYLE>
            <div class="macrozone-card-header" style="display: flex; align-items: center; gap: 0.5rem;">
                <CardIcon code="MZ" />
                <h2 style="margin: 0;">{macrozone.name}</h2>
            </div>
            <p>"Zone: "<b>{macrozone.zone_count}</b></p>
            <p>{format!("Lat: {}, Lon: {}", macrozone.lat, macrozone.lon)}</p>
            <p>"Creato il: "{created}</p>
        </a>
    }
}

#[component]
pub fn HubCard(hub: Hub) -> impl IntoView {
    let display = use_display();
    let active = is_active(hub.last_seen.as_deref(), Utc::now(), CARD_ACTIVE_WINDOW);
    let class = if active {
        "hub-card active-hub"
    } else {
        "hub-card inactive-hub"
    };
    let registered = format_date(
        hub.registration_time.as_deref(),
        DateStyle::Card,
        display.timezone,
    );
    let last_seen = format_date(hub.last_seen.as_deref(), DateStyle::Card, display.timezone);

    view! {
        <div class=class style=ENTITY_CARD_STYLE>
            <span class="hub-id"><b>{hub.id}</b></span>
            <span class="hub-service">{hub.service}</span>
            <span class="hub-date">"Registrato: "{registered}</span>
            <span class="hub-date">"Ultima attività: "{last_seen}</span>
            <span class="hub-status"><StatusBadge active=active /></span>
        </div>
    }
}
