use gloo_net::http;
use tracing::debug;
use url::Url;
use web_sys::RequestCache;

use fwdash_types::record::parse::parse_records_json;
use fwdash_types::record::FirmwareRecord;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {

    #[error("Failed to request the firmware records due to: {message}")]
    Transport {
        message: String,
    },

    #[error("Failed to request the firmware records. Server responded with HTTP {status} {status_text}")]
    Status {
        status: u16,
        status_text: String,
    },

    #[error("{message}")]
    Parse {
        message: String,
    },
}

impl ApiError {
    fn check_status(status: u16, status_text: impl Into<String>) -> Result<(), ApiError> {
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(ApiError::Status { status, status_text: status_text.into() })
        }
    }
}

const CACHE_DEFEATING_HEADERS: [(&str, &str); 2] = [
    ("Cache-Control", "no-cache"),
    ("Pragma", "no-cache"),
];

/// Fetches the complete record list, bypassing every cache on the way.
pub async fn fetch_firmware_records(url: &Url) -> Result<Vec<FirmwareRecord>, ApiError> {

    debug!("Requesting firmware records from <{url}>.");

    let request = CACHE_DEFEATING_HEADERS.iter()
        .fold(
            http::Request::get(url.as_str()).cache(RequestCache::NoStore),
            |request, (name, value)| request.header(name, value),
        );

    let response = request
        .send().await
        .map_err(|cause| ApiError::Transport {
            message: cause.to_string(),
        })?;

    let status = response.status();
    let status_text = response.status_text();

    let body = response.text().await
        .map_err(|cause| ApiError::Transport {
            message: cause.to_string(),
        })?;

    let records = read_records(status, status_text, &body)?;

    debug!("Retrieved {} firmware records.", records.len());

    Ok(records)
}

/// Turns a received response into records. A non-successful status wins over whatever the body contains.
fn read_records(status: u16, status_text: String, body: &str) -> Result<Vec<FirmwareRecord>, ApiError> {

    ApiError::check_status(status, status_text)?;

    parse_records_json(body)
        .map_err(|cause| ApiError::Parse {
            message: cause.to_string(),
        })
}
