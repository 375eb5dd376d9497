use leptos::prelude::*;

/// Returns to the previous browser history entry
#[component]
pub fn BackButton() -> impl IntoView {
    view! {
        <button
            type="button"
            class="btn btn-light me-2"
            title="Torna indietro"
            on:click=move |_| go_back()
        >
            <i class="bi bi-arrow-left"></i>
        </button>
    }
}

fn go_back() {
    #[cfg(feature = "csr")]
    {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            return;
        };
        if let Err(e) = history.back() {
            tracing::debug!("history.back failed: {:?}", e);
        }
    }
}
