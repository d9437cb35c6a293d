use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// Shown wherever a release timestamp could not be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Reported as "last updated" when there are no records at all.
pub const LAST_UPDATED_FALLBACK: OffsetDateTime = OffsetDateTime::UNIX_EPOCH;

/// Release timestamp of a firmware build.
///
/// The raw value is kept as delivered. A value that does not parse as an
/// ISO 8601 timestamp is still accepted, it then displays as [`INVALID_DATE`]
/// and orders before every valid timestamp.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ReleasedAt {
    raw: String,
    timestamp: Option<OffsetDateTime>,
}

impl ReleasedAt {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let timestamp = parse_timestamp(&raw);
        Self { raw, timestamp }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn timestamp(&self) -> Option<OffsetDateTime> {
        self.timestamp
    }

    pub fn is_valid(&self) -> bool {
        self.timestamp.is_some()
    }

    /// Chronological order; invalid timestamps are the smallest.
    pub fn chronological_cmp(&self, other: &Self) -> Ordering {
        self.timestamp.cmp(&other.timestamp)
    }
}

impl From<String> for ReleasedAt {
    fn from(value: String) -> Self {
        Self::parse(value)
    }
}

impl From<ReleasedAt> for String {
    fn from(value: ReleasedAt) -> Self {
        value.raw
    }
}

impl fmt::Display for ReleasedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.timestamp {
            Some(timestamp) => write!(f, "{}", format_canonical(timestamp).map_err(|_| fmt::Error)?),
            None => write!(f, "{INVALID_DATE}"),
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    OffsetDateTime::parse(raw, &Rfc3339)
        .or_else(|_| OffsetDateTime::parse(raw, &Iso8601::DEFAULT))
        .ok()
}

/// Formats a timestamp as UTC with a literal `Z`, e.g. `2025-08-20T09:15:00Z`.
///
/// Milliseconds are only written when they are non-zero, anything finer is truncated.
pub fn format_canonical(timestamp: OffsetDateTime) -> Result<String, time::error::Format> {
    let utc = timestamp.to_offset(UtcOffset::UTC);

    if utc.millisecond() == 0 {
        utc.format(format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z"))
    } else {
        utc.format(format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"))
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use time::macros::datetime;

    use super::*;

    #[rstest]
    #[case("2025-08-20T09:15:00Z", "2025-08-20T09:15:00Z")]
    #[case("2025-08-20T09:15:00.000Z", "2025-08-20T09:15:00Z")]
    #[case("2025-08-20T09:15:00.250Z", "2025-08-20T09:15:00.250Z")]
    #[case("2025-08-20T11:15:00+02:00", "2025-08-20T09:15:00Z")]
    #[case("2025-08-20T09:15:00.123456Z", "2025-08-20T09:15:00.123Z")]
    fn A_ReleasedAt_should_display_in_canonical_utc_form(#[case] raw: &str, #[case] expected: &str) {
        assert_that!(ReleasedAt::parse(raw).to_string(), eq(expected));
    }

    #[rstest]
    #[case("")]
    #[case("yesterday")]
    #[case("2025-13-40T99:00:00Z")]
    fn An_unparseable_ReleasedAt_should_display_as_invalid_date(#[case] raw: &str) {
        let released_at = ReleasedAt::parse(raw);

        assert_that!(released_at.is_valid(), eq(false));
        assert_that!(released_at.to_string(), eq(INVALID_DATE));
        assert_that!(released_at.raw(), eq(raw));
    }

    #[test]
    fn An_invalid_ReleasedAt_should_order_before_valid_ones() -> Result<()> {
        let invalid = ReleasedAt::parse("soon");
        let valid = ReleasedAt::parse("1970-01-01T00:00:00Z");

        assert_that!(invalid.chronological_cmp(&valid), eq(Ordering::Less));
        assert_that!(valid.chronological_cmp(&invalid), eq(Ordering::Greater));
        Ok(())
    }

    #[test]
    fn A_ReleasedAt_should_compare_by_instant_not_by_text() -> Result<()> {
        let earlier = ReleasedAt::parse("2025-08-20T10:00:00+02:00");
        let later = ReleasedAt::parse("2025-08-20T09:00:00Z");

        assert_that!(earlier.chronological_cmp(&later), eq(Ordering::Less));
        Ok(())
    }

    #[test]
    fn The_fallback_should_format_as_the_unix_epoch() -> Result<()> {
        assert_that!(format_canonical(LAST_UPDATED_FALLBACK)?, eq("1970-01-01T00:00:00Z"));
        assert_that!(format_canonical(datetime!(2025-08-21 02:01:00 UTC))?, eq("2025-08-21T02:01:00Z"));
        assert_that!(format_canonical(datetime!(2025-08-21 02:01:00.5 +02:00))?, eq("2025-08-21T00:01:00.500Z"));
        Ok(())
    }

    #[test]
    fn A_ReleasedAt_should_serialize_back_to_its_raw_value() -> Result<()> {
        let released_at = ReleasedAt::parse("2025-08-20T09:15:00Z");

        assert_that!(serde_json::to_string(&released_at)?, eq("\"2025-08-20T09:15:00Z\""));
        Ok(())
    }
}
