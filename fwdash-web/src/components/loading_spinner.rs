use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <span class="icon" role="status" aria-label="Loading">
            <i class="fa-spin fa-solid fa-circle-notch" />
        </span>
    }
}
