//! Search box, sortable header and pager shared by the data tables

use leptos::prelude::*;

use crate::table::{page_count, range_label, Sort};

pub const TABLE_STYLE: &str = "width: 100%; border-collapse: collapse;";
pub const HEADER_ROW_STYLE: &str = "border-bottom: 2px solid #dee2e6;";
pub const ROW_STYLE: &str = "border-bottom: 1px solid #dee2e6;";
pub const CELL_STYLE: &str = "padding: 0.5rem;";
const HEADER_CELL_STYLE: &str = "padding: 0.5rem; text-align: left; cursor: pointer; user-select: none;";

/// Free-text search input; typing resets the table to its first page
#[component]
pub fn SearchBox(query: RwSignal<String>, page: RwSignal<usize>) -> impl IntoView {
    view! {
        <input
            type="text"
            placeholder="Cerca..."
            class="form-control"
            style="max-width: 16rem; margin-bottom: 0.5rem;"
            prop:value=move || query.get()
            on:input=move |ev| {
                query.set(event_target_value(&ev));
                page.set(1);
            }
        />
    }
}

/// Column header that toggles sorting on click
#[component]
pub fn SortHeader<C: Copy + PartialEq + Send + Sync + 'static>(
    label: &'static str,
    column: C,
    sort: RwSignal<Option<Sort<C>>>,
) -> impl IntoView {
    view! {
        <th
            style=HEADER_CELL_STYLE
            on:click=move |_| sort.update(|s| *s = Some(Sort::toggle(*s, column)))
        >
            {label}
            {move || Sort::marker(sort.get(), column)}
        </th>
    }
}

/// Previous/next controls with a "x–y di n" indicator
#[component]
pub fn Pager(
    page: RwSignal<usize>,
    #[prop(into)] total: Signal<usize>,
    page_size: usize,
) -> impl IntoView {
    let last_page = move || page_count(total.get(), page_size);

    view! {
        <div class="pager" style="display: flex; justify-content: flex-end; align-items: center; gap: 0.75rem; padding: 0.5rem;">
            <button
                type="button"
                class="btn btn-sm btn-light"
                disabled=move || page.get() <= 1
                on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
            >
                "\u{2039}"
            </button>
            <span>{move || range_label(page.get(), page_size, total.get())}</span>
            <button
                type="button"
                class="btn btn-sm btn-light"
                disabled=move || page.get() >= last_page()
                on:click=move |_| page.update(|p| *p = (*p + 1).min(last_page()))
            >
                "\u{203A}"
            </button>
        </div>
    }
}
