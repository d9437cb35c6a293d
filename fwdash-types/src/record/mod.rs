use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use released_at::ReleasedAt;

pub mod parse;
pub mod released_at;

/// One published firmware build for a product, hardware revision and channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirmwareRecord {
    pub product_code: String,
    pub product_name: String,
    #[serde(default)]
    pub hardware_rev: Option<String>,
    pub channel: Channel,
    pub version: String,
    pub released_at: ReleasedAt,
    #[serde(default)]
    pub notes: Option<String>,
}

impl FirmwareRecord {
    pub fn key(&self) -> RecordKey {
        RecordKey(format!("{}{}{}", self.product_code, self.version, self.channel))
    }

    pub fn is_beta(&self) -> bool {
        self.channel == Channel::Beta
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Channel {
    Approved,
    Beta,
}

impl Channel {
    pub const APPROVED: &'static str = "approved";
    pub const BETA: &'static str = "beta";

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Approved => Self::APPROVED,
            Channel::Beta => Self::BETA,
        }
    }

    /// Explains what the channel means to someone about to flash a board.
    pub fn description(&self) -> &'static str {
        match self {
            Channel::Approved => "Approved for production flashing",
            Channel::Beta => "Beta build, internal and QA use only",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
#[error("Illegal channel '{value}'. Expected '{}' or '{}'.", Channel::APPROVED, Channel::BETA)]
pub struct IllegalChannel {
    pub value: String,
}

impl FromStr for Channel {
    type Err = IllegalChannel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            Self::APPROVED => Ok(Channel::Approved),
            Self::BETA => Ok(Channel::Beta),
            _ => Err(IllegalChannel { value: String::from(value) }),
        }
    }
}

impl TryFrom<String> for Channel {
    type Error = IllegalChannel;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Channel> for String {
    fn from(value: Channel) -> Self {
        String::from(value.as_str())
    }
}

/// Render identity of a record: product code, version and channel concatenated.
///
/// Uniqueness is not enforced, the record source is expected to avoid collisions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey(String);

impl RecordKey {
    pub fn value(self) -> String {
        self.0
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
