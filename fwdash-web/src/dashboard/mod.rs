use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{debug, error, info, warn};
use url::Url;

use fwdash_types::catalog;
use fwdash_types::record::FirmwareRecord;
use fwdash_types::view::{self, SortKey, ViewQuery};

use crate::api;
use crate::app::use_app_globals;
use crate::components::WarningMessage;
use crate::config::RecordSource;
use crate::dashboard::card::FirmwareCard;
use crate::dashboard::controls::{Controls, ResultSummary};
use crate::dashboard::header::{DashboardHeader, StatusLine};
use crate::dashboard::state::{Completion, LoadState};

mod card;
mod controls;
mod header;
mod state;

/// State owned by one dashboard instance. Every slot has exactly one writer.
#[derive(Clone, Copy)]
struct DashboardState {
    load: RwSignal<LoadState>,
    query: RwSignal<String>,
    show_beta: RwSignal<bool>,
    sort_key: RwSignal<SortKey>,
}

impl DashboardState {
    fn new(load: LoadState) -> Self {
        let ViewQuery { query, show_beta, sort_key } = ViewQuery::default();
        Self {
            load: RwSignal::new(load),
            query: RwSignal::new(query),
            show_beta: RwSignal::new(show_beta),
            sort_key: RwSignal::new(sort_key),
        }
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {

    let globals = use_app_globals();

    let initial = match globals.config_error {
        Some(error) => LoadState::degraded(catalog::sample_records(), error),
        None => LoadState::ready(catalog::sample_records()),
    };
    let state = DashboardState::new(initial);

    match globals.source {
        RecordSource::Embedded => info!("Showing the embedded firmware records."),
        RecordSource::Remote { url } => fetch_records(state.load, url),
    }

    on_cleanup(move || {
        let _ = state.load.try_update(LoadState::retire);
    });

    let records = Memo::new(move |_| state.load.with(|load| load.records().to_vec()));

    Effect::new(move |_| {
        records.with(|records| {
            for key in view::duplicate_keys(records) {
                warn!("Multiple firmware records share the key <{key}>. Only one of them will be shown reliably.");
            }
        })
    });

    let view_query = Memo::new(move |_| ViewQuery {
        query: state.query.get(),
        show_beta: state.show_beta.get(),
        sort_key: state.sort_key.get(),
    });

    let visible: Memo<Vec<FirmwareRecord>> = Memo::new(move |_| {
        let view_query = view_query.get();
        records.with(|records| view::derive_view(records, &view_query))
    });

    let last_updated = Memo::new(move |_| records.with(|records| view::last_updated(records)));

    let status = Signal::derive(move || {
        state.load.with(|load| StatusLine::new(load.is_loading(), load.error(), last_updated.get()))
    });

    let shown = Signal::derive(move || visible.with(Vec::len));
    let total = Signal::derive(move || records.with(Vec::len));

    view! {
        <DashboardHeader status=status />
        <Controls
            query=state.query
            show_beta=state.show_beta
            sort_key=state.sort_key
        />
        <ResultSummary shown=shown total=total />
        <Show
            when=move || !visible.with(Vec::is_empty)
            fallback=|| view! {
                <WarningMessage>"No firmware records match the current search."</WarningMessage>
            }
        >
            <For
                each=move || visible.get()
                key=FirmwareRecord::key
                children=move |record| view! { <FirmwareCard record=record /> }
            />
        </Show>
    }
}

/// Requests the record list once. The outcome is dropped if the dashboard is gone by then.
fn fetch_records(load: RwSignal<LoadState>, url: Url) {

    let Some(ticket) = load.try_update(LoadState::begin_fetch) else {
        return;
    };

    info!("Fetching firmware records from <{url}>.");

    spawn_local(async move {
        let result = api::fetch_firmware_records(&url).await;

        if let Err(cause) = &result {
            error!("{cause}");
        }

        match load.try_update(move |load| load.complete_fetch(ticket, result)) {
            Some(Completion::Applied) => {}
            Some(Completion::Discarded) | None => {
                debug!("Discarded the firmware records from <{url}>, the dashboard was torn down in the meantime.");
            }
        }
    });
}
