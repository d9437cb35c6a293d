use leptos::prelude::*;
use strum::IntoEnumIterator;
use tracing::warn;

use fwdash_types::view::SortKey;

use crate::components::{FontAwesomeIcon, Icon};

#[component]
pub fn Controls(
    query: RwSignal<String>,
    show_beta: RwSignal<bool>,
    sort_key: RwSignal<SortKey>,
) -> impl IntoView {

    let sort_options = SortKey::iter()
        .map(move |key| view! {
            <option value=key.as_value() selected={ move || sort_key.get() == key }>
                { key.label() }
            </option>
        })
        .collect_view();

    view! {
        <div class="columns is-vcentered">
            <div class="column">
                <div class="field">
                    <p class="control has-icons-left">
                        <input
                            class="input"
                            type="search"
                            aria-label="Search firmware"
                            placeholder="Search by product, code or hardware revision"
                            prop:value=move || query.get()
                            on:input=move |ev| query.set(event_target_value(&ev))
                        />
                        <span class="icon is-left">
                            <i class={ FontAwesomeIcon::MagnifyingGlass.as_class() } aria-hidden="true"></i>
                        </span>
                    </p>
                </div>
            </div>
            <div class="column is-narrow">
                <div class="field">
                    <div class="control">
                        <div class="select">
                            <select
                                aria-label="Sort by"
                                prop:value=move || sort_key.get().as_value()
                                on:change=move |ev| {
                                    match event_target_value(&ev).parse::<SortKey>() {
                                        Ok(key) => sort_key.set(key),
                                        Err(cause) => warn!("Ignoring sort selection: {cause}"),
                                    }
                                }
                            >
                                { sort_options }
                            </select>
                        </div>
                    </div>
                </div>
            </div>
            <div class="column is-narrow">
                <label class="checkbox">
                    <input
                        type="checkbox"
                        class="mr-2"
                        prop:checked=move || show_beta.get()
                        on:change=move |ev| show_beta.set(event_target_checked(&ev))
                    />
                    "Show beta builds"
                </label>
            </div>
        </div>
    }
}

#[component]
pub fn ResultSummary(
    #[prop(into)] shown: Signal<usize>,
    #[prop(into)] total: Signal<usize>,
) -> impl IntoView {
    view! {
        <p class="is-size-7 has-text-grey mb-3">
            <span class="icon-text">
                <Icon icon=FontAwesomeIcon::Microchip />
                <span>{ move || summary_text(shown.get(), total.get()) }</span>
            </span>
        </p>
    }
}

fn summary_text(shown: usize, total: usize) -> String {
    let noun = if total == 1 { "record" } else { "records" };
    format!("Showing {shown} of {total} {noun}")
}
