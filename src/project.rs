use crate::zone::Zone;
use oauth2::{ClientId, ClientSecret};
use serde::Deserialize;

/// A YaaS project as registered in the YaaS Builder.
///
/// Nothing is validated here: an absent field only shows up once a request
/// is built from it, as an empty URL segment or a rejected token request.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProjectConfig {
    pub zone: Option<Zone>,
    pub organization: Option<String>,
    /// Also known as the tenant or project identifier
    pub service: Option<String>,
    pub version: Option<String>,
    pub client_id: Option<ClientId>,
    pub client_secret: Option<ClientSecret>,
}

impl ProjectConfig {
    pub fn new(
        zone: Zone,
        organization: impl Into<String>,
        service: impl Into<String>,
        version: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        ProjectConfig {
            zone: Some(zone),
            organization: Some(organization.into()),
            service: Some(service.into()),
            version: Some(version.into()),
            client_id: Some(ClientId::new(client_id.into())),
            client_secret: Some(ClientSecret::new(client_secret.into())),
        }
    }

    pub fn builder() -> ProjectConfigBuilder {
        ProjectConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct ProjectConfigBuilder {
    config: ProjectConfig,
}

impl ProjectConfigBuilder {
    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.config.zone = Some(zone);
        self
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.config.organization = Some(organization.into());
        self
    }

    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.config.service = Some(service.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.config.version = Some(version.into());
        self
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.config.client_id = Some(ClientId::new(client_id.into()));
        self
    }

    pub fn with_client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.config.client_secret = Some(ClientSecret::new(client_secret.into()));
        self
    }

    pub fn build(self) -> ProjectConfig {
        self.config
    }
}
