use crate::error::{Result, YaasError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Deployment region of the YaaS API gateway.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Zone {
    #[serde(rename = "EU", alias = "eu")]
    Eu,
    #[serde(rename = "US", alias = "us")]
    Us,
}

impl Zone {
    /// Base URL of the gateway, always ending with a slash.
    pub fn url(&self) -> &'static str {
        match self {
            Zone::Eu => "https://api.eu.yaas.io/",
            Zone::Us => "https://api.us.yaas.io/",
        }
    }

    pub fn base_url(&self) -> Result<Url> {
        Ok(Url::parse(self.url())?)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url())
    }
}

impl FromStr for Zone {
    type Err = YaasError;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "eu" => Ok(Zone::Eu),
            "us" => Ok(Zone::Us),
            other => Err(YaasError::Configuration(format!("unknown zone '{}'", other))),
        }
    }
}
