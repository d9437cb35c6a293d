use crate::record::FirmwareRecord;

/// A normalized free-text search: trimmed and lower-cased.
///
/// An empty query matches every record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Matches on product name, product code or hardware revision.
    pub fn matches(&self, record: &FirmwareRecord) -> bool {
        if self.is_empty() {
            return true;
        }
        let hardware_rev = record.hardware_rev.as_deref().unwrap_or_default();

        [record.product_name.as_str(), record.product_code.as_str(), hardware_rev]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.0))
    }
}

pub fn passes_channel_filter(record: &FirmwareRecord, show_beta: bool) -> bool {
    show_beta || !record.is_beta()
}

/// Keeps the records passing both the channel and the text filter, in their original order.
pub fn filter_records<'a>(
    records: &'a [FirmwareRecord],
    query: &SearchQuery,
    show_beta: bool,
) -> Vec<&'a FirmwareRecord> {
    records.iter()
        .filter(|record| passes_channel_filter(record, show_beta))
        .filter(|record| query.matches(record))
        .collect()
}
