use config::{Config, FileFormat};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use url::Url;

const DEFAULT_CONFIG: &str = include_str!("../fwdash.toml");

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load dashboard configuration: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DashboardConfig {
    pub source: RecordSource,
}

impl DashboardConfig {
    /// Loads the configuration compiled into the dashboard.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_str(DEFAULT_CONFIG)
    }

    pub fn load_from_str(toml: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize::<DashboardConfig>()?)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordSource {
    Embedded,
    Remote { url: Url },
}

#[derive(Clone, Debug, Deserialize)]
struct RawRecordSource {
    mode: String,
    url: Option<String>,
}

impl RawRecordSource {
    const EMBEDDED: &'static str = "embedded";
    const REMOTE: &'static str = "remote";
    const MODES: &'static [&'static str] = &[Self::EMBEDDED, Self::REMOTE];
}

impl<'de> Deserialize<'de> for RecordSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        let raw_source: RawRecordSource = Deserialize::deserialize(deserializer)?;

        match raw_source.mode.as_str() {
            RawRecordSource::EMBEDDED => Ok(RecordSource::Embedded),
            RawRecordSource::REMOTE => {
                let url = raw_source.url
                    .ok_or_else(|| Error::custom("source.url is required when source.mode is 'remote'"))?;
                let url = Url::parse(&url)
                    .map_err(|cause| Error::custom(format!("Illegal source.url '{url}': {cause}")))?;

                Ok(RecordSource::Remote { url })
            }
            other => Err(Error::unknown_variant(other, RawRecordSource::MODES)),
        }
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[test]
    fn The_compiled_in_configuration_should_load() -> Result<()> {
        assert_that!(DashboardConfig::load(), ok(anything()));
        Ok(())
    }

    #[test]
    fn An_embedded_source_should_ignore_the_url() -> Result<()> {
        let config = DashboardConfig::load_from_str(r#"
            [source]
            mode = "embedded"
            url = "https://firmware.example.com/records.json"
        "#)?;

        assert_that!(config.source, eq(RecordSource::Embedded));
        Ok(())
    }

    #[test]
    fn A_remote_source_should_carry_its_url() -> Result<()> {
        let config = DashboardConfig::load_from_str(r#"
            [source]
            mode = "remote"
            url = "https://firmware.example.com/records.json"
        "#)?;

        assert_that!(
            config.source,
            eq(RecordSource::Remote { url: Url::parse("https://firmware.example.com/records.json")? })
        );
        Ok(())
    }

    #[test]
    fn A_remote_source_without_url_should_be_rejected() -> Result<()> {
        let result = DashboardConfig::load_from_str(r#"
            [source]
            mode = "remote"
        "#);

        assert_that!(result.unwrap_err().to_string(), contains_substring("source.url is required"));
        Ok(())
    }

    #[test]
    fn A_remote_source_with_a_relative_url_should_be_rejected() -> Result<()> {
        let result = DashboardConfig::load_from_str(r#"
            [source]
            mode = "remote"
            url = "records.json"
        "#);

        assert_that!(result.unwrap_err().to_string(), contains_substring("Illegal source.url 'records.json'"));
        Ok(())
    }

    #[test]
    fn An_unknown_mode_should_be_rejected() -> Result<()> {
        let result = DashboardConfig::load_from_str(r#"
            [source]
            mode = "ftp"
        "#);

        assert_that!(result.unwrap_err().to_string(), contains_substring("ftp"));
        Ok(())
    }
}
