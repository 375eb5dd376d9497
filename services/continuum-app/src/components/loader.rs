use leptos::prelude::*;

/// Spinner with a caption
#[component]
pub fn Loader(#[prop(default = "Caricamento...")] text: &'static str) -> impl IntoView {
    view! {
        <div class="loader" style="display: flex; align-items: center; gap: 0.75rem; padding: 1rem;">
            <div
                class="loader-spinner"
                style="width: 1.5rem; height: 1.5rem; border: 3px solid #dee2e6; \
                       border-top-color: #1976d2; border-radius: 50%;"
            ></div>
            <span class="loader-text">{text}</span>
        </div>
    }
}
