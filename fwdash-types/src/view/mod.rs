//! Derives what the dashboard shows from the loaded records and the user's controls.
//!
//! Everything here is a pure function of its inputs, so callers may memoize
//! or recompute freely.

use std::collections::HashMap;

use time::OffsetDateTime;

use crate::record::released_at::LAST_UPDATED_FALLBACK;
use crate::record::{FirmwareRecord, RecordKey};

pub use filter::{filter_records, passes_channel_filter, SearchQuery};
pub use sort::{sort_records, IllegalSortKey, SortKey};

mod filter;
mod sort;

/// The user controlled inputs of the view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub query: String,
    pub show_beta: bool,
    pub sort_key: SortKey,
}

/// Filters, then sorts. Returns owned records, ready to be keyed and rendered.
pub fn derive_view(records: &[FirmwareRecord], view: &ViewQuery) -> Vec<FirmwareRecord> {
    let query = SearchQuery::new(&view.query);
    let mut visible = filter_records(records, &query, view.show_beta);
    sort_records(&mut visible, view.sort_key);
    visible.into_iter().cloned().collect()
}

/// Latest valid release timestamp across all records, regardless of any filter.
///
/// Falls back to the unix epoch for a list without valid timestamps.
pub fn last_updated(records: &[FirmwareRecord]) -> OffsetDateTime {
    records.iter()
        .filter_map(|record| record.released_at.timestamp())
        .max()
        .unwrap_or(LAST_UPDATED_FALLBACK)
}

/// Keys shared by more than one record, each reported once in order of first appearance.
pub fn duplicate_keys(records: &[FirmwareRecord]) -> Vec<RecordKey> {
    let mut occurrences: HashMap<RecordKey, usize> = HashMap::new();
    let mut duplicates = Vec::new();

    for record in records {
        let key = record.key();
        let count = occurrences.entry(key.clone()).or_default();
        *count += 1;
        if *count == 2 {
            duplicates.push(key);
        }
    }
    duplicates
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use googletest::prelude::*;
    use time::macros::datetime;

    use crate::catalog;
    use crate::record::ReleasedAt;

    use super::*;

    fn versions(records: &[FirmwareRecord]) -> Vec<String> {
        records.iter().map(|record| record.version.clone()).collect()
    }

    #[test]
    fn Hiding_beta_should_only_show_the_approved_AL7700_build() -> Result<()> {
        let records = vec![catalog::al7700_approved(), catalog::al7700_beta()];

        let view = derive_view(&records, &ViewQuery { show_beta: false, ..Default::default() });

        assert_that!(versions(&view), elements_are![eq("1.4.2")]);
        Ok(())
    }

    #[test]
    fn Showing_beta_should_put_the_newer_beta_build_first() -> Result<()> {
        let records = vec![catalog::al7700_approved(), catalog::al7700_beta()];

        let view = derive_view(&records, &ViewQuery {
            show_beta: true,
            sort_key: SortKey::ReleasedAt,
            ..Default::default()
        });

        assert_that!(versions(&view), elements_are![eq("1.5.0-beta.2"), eq("1.4.2")]);
        Ok(())
    }

    #[test]
    fn An_empty_query_should_only_reorder_the_channel_filtered_records() -> Result<()> {
        let records = catalog::sample_records();

        for show_beta in [false, true] {
            let view = derive_view(&records, &ViewQuery {
                query: String::from("   "),
                show_beta,
                sort_key: SortKey::ProductCode,
            });

            let mut expected = records.iter()
                .filter(|record| passes_channel_filter(record, show_beta))
                .map(FirmwareRecord::key)
                .collect::<Vec<_>>();
            expected.sort();

            let mut actual = view.iter().map(FirmwareRecord::key).collect::<Vec<_>>();
            actual.sort();

            assert_that!(actual, eq(expected));
        }
        Ok(())
    }

    #[test]
    fn The_gateway_should_be_found_by_its_hardware_revision_regardless_of_beta() -> Result<()> {
        let records = catalog::sample_records();

        for show_beta in [false, true] {
            let view = derive_view(&records, &ViewQuery {
                query: String::from("BL652"),
                show_beta,
                sort_key: SortKey::Version,
            });

            assert_that!(view, elements_are![field!(FirmwareRecord.product_name, eq("Silvair BLE Mesh Gateway"))]);
        }
        Ok(())
    }

    #[test]
    fn Last_updated_should_be_the_latest_release_across_all_records() -> Result<()> {
        let records = catalog::sample_records();

        assert_that!(last_updated(&records), eq(datetime!(2025-08-21 02:01:00 UTC)));

        let approved_only = derive_view(&records, &ViewQuery::default());
        assert_that!(approved_only.iter().any(FirmwareRecord::is_beta), eq(false));
        assert_that!(last_updated(&approved_only), eq(datetime!(2025-08-20 09:15:00 UTC)));
        Ok(())
    }

    #[test]
    fn Last_updated_should_fall_back_to_the_epoch() -> Result<()> {
        assert_that!(last_updated(&[]), eq(LAST_UPDATED_FALLBACK));

        let mut broken = catalog::al7700_approved();
        broken.released_at = ReleasedAt::parse("n/a");
        assert_that!(last_updated(&[broken]), eq(LAST_UPDATED_FALLBACK));
        Ok(())
    }

    #[test]
    fn Duplicate_keys_should_be_reported_once() -> Result<()> {
        let mut records = catalog::sample_records();
        records.push(catalog::al7700_beta());
        records.push(catalog::al7700_beta());

        assert_that!(duplicate_keys(&records), elements_are![eq(catalog::al7700_beta().key())]);
        assert_that!(duplicate_keys(&catalog::sample_records()), empty());
        Ok(())
    }
}
