use anyhow::Context;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
    str::FromStr,
};
use toml::{value::Table, Value};

use crate::error::{Error, Result};

/// The name of the configuration file looked for in a site root.
pub const CONFIG_FILE: &str = "journey.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Configuration for guest journeys.
    pub journey: JourneyConfig,

    /// Any remaining configuration, kept for other consumers of the file.
    rest: Value,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let mut buffer = String::new();
        File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?
            .read_to_string(&mut buffer)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Config::from_str(&buffer)
    }

    /// Deserializes the top level table named `key`, if the file has one.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        self.rest
            .get(key)
            .cloned()
            .map(|value| {
                value
                    .try_into()
                    .with_context(|| format!("Failed to deserialize config table `{key}`"))
            })
            .transpose()
    }

    /// The guest document directory, resolved against `root` when relative.
    pub fn guests_dir(&self, root: impl AsRef<Path>) -> PathBuf {
        root.as_ref().join(&self.journey.guests)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            journey: JourneyConfig::default(),
            rest: Value::Table(Table::default()),
        }
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let raw = Value::deserialize(deserializer)?;
        let Value::Table(mut table) = raw else {
            return Err(D::Error::custom("journey.toml must always be a toml table"));
        };

        let journey: JourneyConfig = table
            .remove("journey")
            .map(|journey| journey.try_into().map_err(D::Error::custom))
            .transpose()?
            .unwrap_or_default();

        let config = Config {
            journey,
            rest: Value::Table(table),
        };

        Ok(config)
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        toml::from_str(source).with_context(|| "Attempted to parse invalid configuration file")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct JourneyConfig {
    /// Relative path to the directory of guest documents.
    pub guests: PathBuf,
}

impl Default for JourneyConfig {
    fn default() -> Self {
        Self {
            guests: PathBuf::from("./guests"),
        }
    }
}
