use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use strum::EnumIter;

use crate::record::FirmwareRecord;
use crate::util::compare::locale_cmp;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumIter)]
pub enum SortKey {
    ProductName,
    ProductCode,
    #[default]
    ReleasedAt,
    Version,
}

impl SortKey {
    const PRODUCT_NAME: &'static str = "product_name";
    const PRODUCT_CODE: &'static str = "product_code";
    const RELEASED_AT: &'static str = "released_at";
    const VERSION: &'static str = "version";

    /// Value used for the sort selector option.
    pub fn as_value(&self) -> &'static str {
        match self {
            SortKey::ProductName => Self::PRODUCT_NAME,
            SortKey::ProductCode => Self::PRODUCT_CODE,
            SortKey::ReleasedAt => Self::RELEASED_AT,
            SortKey::Version => Self::VERSION,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::ProductName => "Product name",
            SortKey::ProductCode => "Product code",
            SortKey::ReleasedAt => "Release date (newest first)",
            SortKey::Version => "Version (highest first)",
        }
    }

    pub fn compare(&self, a: &FirmwareRecord, b: &FirmwareRecord) -> Ordering {
        match self {
            SortKey::ProductName => locale_cmp(&a.product_name, &b.product_name),
            SortKey::ProductCode => locale_cmp(&a.product_code, &b.product_code),
            SortKey::ReleasedAt => b.released_at.chronological_cmp(&a.released_at),
            SortKey::Version => natord::compare_ignore_case(&b.version, &a.version),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_value())
    }
}

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
#[error("Illegal sort key '{value}'.")]
pub struct IllegalSortKey {
    pub value: String,
}

impl FromStr for SortKey {
    type Err = IllegalSortKey;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            Self::PRODUCT_NAME => Ok(SortKey::ProductName),
            Self::PRODUCT_CODE => Ok(SortKey::ProductCode),
            Self::RELEASED_AT => Ok(SortKey::ReleasedAt),
            Self::VERSION => Ok(SortKey::Version),
            _ => Err(IllegalSortKey { value: String::from(value) }),
        }
    }
}

/// Stable sort, records comparing equal keep their relative order.
pub fn sort_records(records: &mut [&FirmwareRecord], sort_key: SortKey) {
    records.sort_by(|a, b| sort_key.compare(a, b));
}
