use std::fmt;

use leptos::prelude::*;
use time::OffsetDateTime;

use fwdash_types::record::released_at::format_canonical;

use crate::components::{FontAwesomeIcon, Icon, LoadingSpinner};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusLine {
    Refreshing,
    Failed(String),
    LastUpdated(OffsetDateTime),
}

impl StatusLine {
    pub fn new(loading: bool, error: Option<&str>, last_updated: OffsetDateTime) -> Self {
        if loading {
            StatusLine::Refreshing
        } else if let Some(error) = error {
            StatusLine::Failed(error.to_owned())
        } else {
            StatusLine::LastUpdated(last_updated)
        }
    }

    fn is_failure(&self) -> bool {
        matches!(self, StatusLine::Failed(_))
    }

    fn is_refreshing(&self) -> bool {
        matches!(self, StatusLine::Refreshing)
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLine::Refreshing => write!(f, "Refreshing…"),
            StatusLine::Failed(error) => write!(f, "{error}"),
            StatusLine::LastUpdated(timestamp) => {
                let timestamp = format_canonical(*timestamp).map_err(|_| fmt::Error)?;
                write!(f, "Last updated {timestamp}")
            }
        }
    }
}

#[component]
pub fn DashboardHeader(
    #[prop(into)] status: Signal<StatusLine>,
) -> impl IntoView {

    let status_text = move || status.with(ToString::to_string);
    let is_failure = move || status.with(StatusLine::is_failure);
    let spinner = move || status.with(StatusLine::is_refreshing).then(|| view! { <LoadingSpinner /> });

    view! {
        <header class="level mb-5">
            <div class="level-left">
                <div class="level-item">
                    <h1 class="title is-3">
                        <span class="icon-text">
                            <Icon icon=FontAwesomeIcon::ShieldHalved />
                            <span>"Firmware Versions"</span>
                        </span>
                    </h1>
                </div>
            </div>
            <div class="level-right">
                <div class="level-item">
                    { spinner }
                </div>
                <div class="level-item">
                    <p
                        class="is-size-7"
                        class:has-text-danger=is_failure
                        class:has-text-grey=move || !is_failure()
                        aria-live="polite"
                    >
                        { status_text }
                    </p>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use googletest::prelude::*;
    use time::macros::datetime;

    use super::*;

    #[test]
    fn The_status_should_show_refreshing_while_loading_even_with_an_error() -> Result<()> {
        let status = StatusLine::new(true, Some("HTTP 500"), OffsetDateTime::UNIX_EPOCH);

        assert_that!(status.to_string(), eq("Refreshing…"));
        Ok(())
    }

    #[test]
    fn The_status_should_show_the_error_after_a_failed_fetch() -> Result<()> {
        let status = StatusLine::new(false, Some("Server responded with HTTP 500"), OffsetDateTime::UNIX_EPOCH);

        assert_that!(status.to_string(), eq("Server responded with HTTP 500"));
        Ok(())
    }

    #[test]
    fn The_status_should_show_the_last_update_in_canonical_form() -> Result<()> {
        let status = StatusLine::new(false, None, datetime!(2025-08-21 02:01:00 UTC));

        assert_that!(status.to_string(), eq("Last updated 2025-08-21T02:01:00Z"));
        Ok(())
    }

    #[test]
    fn The_status_for_no_records_should_show_the_epoch() -> Result<()> {
        let status = StatusLine::new(false, None, OffsetDateTime::UNIX_EPOCH);

        assert_that!(status.to_string(), eq("Last updated 1970-01-01T00:00:00Z"));
        Ok(())
    }
}
