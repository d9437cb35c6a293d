use crate::record::FirmwareRecord;

#[derive(Debug, thiserror::Error)]
pub enum ParseRecordsError {
    #[error("Failed to parse firmware records, due to: {cause}")]
    IllegalJson { cause: serde_json::Error },
}

/// Tries to deserialize the given JSON text into a list of [FirmwareRecord]s.
///
/// The payload must be an array. A single malformed entry, for example one
/// without `product_code` or with an unknown `channel`, rejects the whole list.
/// An unparseable `released_at` is accepted and shows up as an invalid date.
///
/// # Example
///
/// ```
/// # use fwdash_types::record::parse::parse_records_json;
/// # use fwdash_types::record::Channel;
/// # fn main() -> Result<(), fwdash_types::record::parse::ParseRecordsError> {
/// let json = r#"[{
///   "product_code": "AL7700",
///   "product_name": "AL7700 Luminaire Controller",
///   "hardware_rev": "rev-C",
///   "channel": "approved",
///   "version": "1.4.2",
///   "released_at": "2025-08-20T09:15:00Z"
/// }]"#;
///
/// let records = parse_records_json(json)?;
///
/// assert_eq!(records[0].channel, Channel::Approved);
/// assert_eq!(records[0].notes, None);
/// # Ok(())
/// # }
/// ```
pub fn parse_records_json(input: &str) -> Result<Vec<FirmwareRecord>, ParseRecordsError> {
    serde_json::from_str::<Vec<FirmwareRecord>>(input)
        .map_err(|cause| ParseRecordsError::IllegalJson { cause })
}
