//! The record list compiled into the dashboard.
//!
//! Used as-is when the dashboard runs with the embedded source and as the
//! list shown whenever a remote fetch fails.

use crate::record::{Channel, FirmwareRecord, ReleasedAt};

pub fn sample_records() -> Vec<FirmwareRecord> {
    vec![
        al7700_approved(),
        al7700_beta(),
        silvair_gateway(),
        ps2200_approved(),
    ]
}

pub fn al7700_approved() -> FirmwareRecord {
    FirmwareRecord {
        product_code: String::from("AL7700"),
        product_name: String::from("AL7700 Luminaire Controller"),
        hardware_rev: Some(String::from("rev-C")),
        channel: Channel::Approved,
        version: String::from("1.4.2"),
        released_at: ReleasedAt::parse("2025-08-20T09:15:00Z"),
        notes: Some(String::from("Production release. Fixes DALI bus timing on long cable runs.")),
    }
}

pub fn al7700_beta() -> FirmwareRecord {
    FirmwareRecord {
        product_code: String::from("AL7700"),
        product_name: String::from("AL7700 Luminaire Controller"),
        hardware_rev: Some(String::from("rev-C")),
        channel: Channel::Beta,
        version: String::from("1.5.0-beta.2"),
        released_at: ReleasedAt::parse("2025-08-21T02:01:00Z"),
        notes: Some(String::from("Adds scene recall over the mesh. Not for customer units.")),
    }
}

pub fn silvair_gateway() -> FirmwareRecord {
    FirmwareRecord {
        product_code: String::from("SMG-100"),
        product_name: String::from("Silvair BLE Mesh Gateway"),
        hardware_rev: Some(String::from("BL652-r2")),
        channel: Channel::Approved,
        version: String::from("3.2.0"),
        released_at: ReleasedAt::parse("2025-07-30T14:00:00Z"),
        notes: None,
    }
}

pub fn ps2200_approved() -> FirmwareRecord {
    FirmwareRecord {
        product_code: String::from("PS2200"),
        product_name: String::from("PoE Sensor Hub"),
        hardware_rev: None,
        channel: Channel::Approved,
        version: String::from("2.0.11"),
        released_at: ReleasedAt::parse("2025-06-12T08:30:00Z"),
        notes: Some(String::from("Requires bootloader 1.3 or newer.")),
    }
}
