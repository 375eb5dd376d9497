//! Activity badge component

use leptos::prelude::*;

/// A coloured badge showing Attivo (green) or Non attivo (red)
#[component]
pub fn StatusBadge(active: bool) -> impl IntoView {
    let (label, color, bg) = if active {
        ("Attivo", "#155724", "#d4edda")
    } else {
        ("Non attivo", "#721c24", "#f8d7da")
    };

    let style = format!(
        "display: inline-block; padding: 0.25em 0.6em; border-radius: 0.25rem; \
         font-size: 0.85em; font-weight: 600; color: {}; background-color: {};",
        color, bg
    );

    view! {
        <span class="status-badge" style=style>{label}</span>
    }
}
