//! Status banners shown above the product list.

use leptos::prelude::*;

#[component]
pub fn ErrorAlert(message: String, on_clear: Callback<()>) -> impl IntoView {
    view! {
        <div class="alert alert-error">
            <span>{message}</span>
            <button class="alert-close" on:click=move |_| on_clear.run(())>
                "✕"
            </button>
        </div>
    }
}

#[component]
pub fn SuccessAlert(message: String) -> impl IntoView {
    view! {
        <div class="alert alert-success">
            <span>{message}</span>
        </div>
    }
}

#[component]
pub fn LoadingAlert(message: String) -> impl IntoView {
    view! {
        <div class="alert alert-loading">
            <span class="spinner"></span>
            <span>{message}</span>
        </div>
    }
}
