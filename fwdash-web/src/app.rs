use leptos::prelude::*;
use tracing::{error, info};

use crate::config::{DashboardConfig, RecordSource};
use crate::dashboard::Dashboard;

#[derive(Clone, Debug)]
pub struct AppGlobals {
    pub source: RecordSource,
    pub config_error: Option<String>,
}

impl AppGlobals {
    fn load() -> Self {
        match DashboardConfig::load() {
            Ok(config) => {
                info!("Configuration: {config:?}");
                AppGlobals {
                    source: config.source,
                    config_error: None,
                }
            }
            Err(cause) => {
                error!("{cause}. Falling back to the embedded firmware records.");
                AppGlobals {
                    source: RecordSource::Embedded,
                    config_error: Some(cause.to_string()),
                }
            }
        }
    }
}

pub fn use_app_globals() -> AppGlobals {
    use_context::<AppGlobals>()
        .expect("The AppGlobals should be provided in the context.")
}

#[component]
pub fn App() -> impl IntoView {

    provide_context(AppGlobals::load());

    view! {
        <main class="section">
            <div class="container is-max-desktop">
                <Dashboard />
            </div>
        </main>
    }
}
