//! # YaaS SDK
//! Makes authorized calls to the services of a [YaaS](https://www.yaas.io) project.
//! Every call exchanges the project's client credentials for a bearer token at the
//! YaaS OAuth2 endpoint and then forwards the request through the API gateway of the
//! project's zone.
//!
//! The client is based on the `Reqwest` library. Responses are returned untouched,
//! status codes included.
//!
//! ## Usage
//! Add this library as a dependency to your project.
//! ```toml
//! [dependencies]
//! yaas_sdk = "0.1"
//! ```
//!
//! ## Example code
//! ```no_run
//!# async fn doc_test() -> Result<(), yaas_sdk::YaasError> {
//! use yaas_sdk::{Client, ProjectConfig, Yaas, Zone};
//!
//! let project = ProjectConfig::builder()
//!     .with_client_id("YOUR_CLIENT_ID")
//!     .with_client_secret("YOUR_CLIENT_SECRET")
//!     .with_organization("YOUR_ORGANIZATION")
//!     .with_service("YOUR_SERVICE")
//!     .with_version("v1")
//!     .with_zone(Zone::Eu)
//!     .build();
//!
//! let client = Yaas::new(project)?;
//!
//! // GET https://api.eu.yaas.io/YOUR_ORGANIZATION/YOUR_SERVICE/v1/data/getData/5313
//! let response = client.get("data/getData/5313").await?;
//! println!("{}", response.text().await?);
//!# Ok(())
//!# }
//! ```
mod authorization;
mod client;
mod error;
mod json_converter;
mod project;
mod token;
mod zone;

pub use crate::authorization::{Authorization, YaasAuthorization, YaasAuthorizationBuilder};
pub use crate::client::{Client, Yaas, YaasBuilder};
pub use crate::error::{check_not_none, Result, YaasError};
pub use crate::json_converter::{JsonConverter, SerdeJsonConverter};
pub use crate::project::{ProjectConfig, ProjectConfigBuilder};
pub use crate::token::AccessTokenResponse;
pub use crate::zone::Zone;

pub use oauth2::{AccessToken, ClientId, ClientSecret};
pub use reqwest::{Body, Response};
