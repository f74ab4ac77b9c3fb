use crate::authorization::{Authorization, YaasAuthorization};
use crate::error::{check_not_none, Result};
use crate::project::ProjectConfig;
use async_trait::async_trait;
use log::trace;
use oauth2::{AccessToken, ClientId, ClientSecret};
use reqwest::{Body, Response};
use std::sync::Arc;

/// Performs authorized HTTP requests to a service of a YaaS project without
/// exposing the authorization details.
#[async_trait]
pub trait Client: Send + Sync {
    async fn get(&self, path: &str) -> Result<Response>;

    async fn post(&self, path: &str, body: Body) -> Result<Response>;

    async fn put(&self, path: &str, body: Body) -> Result<Response>;

    async fn delete(&self, path: &str) -> Result<Response>;

    async fn delete_with_body(&self, path: &str, body: Body) -> Result<Response>;
}

/// [`Client`] for the services of one YaaS project.
///
/// Each call fetches a fresh access token and then performs the request
/// through the gateway of the project's zone. Concurrent calls share
/// nothing but the underlying connection pool.
#[derive(Clone)]
pub struct Yaas {
    project: ProjectConfig,
    authorization: Arc<dyn Authorization>,
}

impl Yaas {
    pub fn new(project: ProjectConfig) -> Result<Self> {
        let zone = check_not_none(project.zone, "zone == null")?;
        let authorization = YaasAuthorization::new(zone)?;
        Ok(Self::with_authorization(project, Arc::new(authorization)))
    }

    pub fn with_authorization(project: ProjectConfig, authorization: Arc<dyn Authorization>) -> Self {
        Yaas {
            project,
            authorization,
        }
    }

    pub fn builder() -> YaasBuilder {
        YaasBuilder::default()
    }

    pub fn project(&self) -> &ProjectConfig {
        &self.project
    }

    /// Relative location of `path` inside the project's service:
    /// `organization/service/version/path`.
    pub fn create_url(&self, path: &str) -> String {
        let segment = |value: &Option<String>| value.clone().unwrap_or_default();

        format!(
            "{}/{}/{}/{}",
            segment(&self.project.organization),
            segment(&self.project.service),
            segment(&self.project.version),
            path
        )
    }

    async fn get_access_token(&self) -> Result<AccessToken> {
        // Absent credentials are sent empty and rejected by the token endpoint
        let client_id = self
            .project
            .client_id
            .clone()
            .unwrap_or_else(|| ClientId::new(String::new()));
        let client_secret = self
            .project
            .client_secret
            .clone()
            .unwrap_or_else(|| ClientSecret::new(String::new()));

        trace!("Fetching access token for '{}'", client_id.as_str());
        self.authorization
            .get_access_token(&client_id, &client_secret)
            .await
    }
}

#[async_trait]
impl Client for Yaas {
    async fn get(&self, path: &str) -> Result<Response> {
        let access_token = self.get_access_token().await?;
        self.authorization
            .get(&access_token, &self.create_url(path))
            .await
    }

    async fn post(&self, path: &str, body: Body) -> Result<Response> {
        let access_token = self.get_access_token().await?;
        self.authorization
            .post(&access_token, &self.create_url(path), body)
            .await
    }

    async fn put(&self, path: &str, body: Body) -> Result<Response> {
        let access_token = self.get_access_token().await?;
        self.authorization
            .put(&access_token, &self.create_url(path), body)
            .await
    }

    async fn delete(&self, path: &str) -> Result<Response> {
        let access_token = self.get_access_token().await?;
        self.authorization
            .delete(&access_token, &self.create_url(path))
            .await
    }

    async fn delete_with_body(&self, path: &str, body: Body) -> Result<Response> {
        let access_token = self.get_access_token().await?;
        self.authorization
            .delete_with_body(&access_token, &self.create_url(path), body)
            .await
    }
}

#[derive(Default)]
pub struct YaasBuilder {
    project: Option<ProjectConfig>,
    authorization: Option<Arc<dyn Authorization>>,
}

impl YaasBuilder {
    pub fn project(mut self, project: ProjectConfig) -> Self {
        self.project = Some(project);
        self
    }

    pub fn authorization(mut self, authorization: Arc<dyn Authorization>) -> Self {
        self.authorization = Some(authorization);
        self
    }

    pub fn build(self) -> Result<Yaas> {
        let project = check_not_none(self.project, "project == null")?;
        let authorization = check_not_none(self.authorization, "authorization == null")?;
        Ok(Yaas::with_authorization(project, authorization))
    }
}
