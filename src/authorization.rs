use crate::error::{check_not_none, Result, YaasError};
use crate::json_converter::{JsonConverter, SerdeJsonConverter};
use crate::token::AccessTokenResponse;
use crate::zone::Zone;
use async_trait::async_trait;
use log::{debug, trace};
use oauth2::{AccessToken, ClientId, ClientSecret};
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Body, Client, Method, Request, Response};
use url::Url;

const OAUTH2_TOKEN_PATH: &str = "hybris/oauth2/v1/token";
const GRANT_TYPE: &str = "grant_type";
const CLIENT_CREDENTIALS: &str = "client_credentials";
const CLIENT_ID: &str = "client_id";
const CLIENT_SECRET: &str = "client_secret";
const APPLICATION_JSON: &str = "application/json";
const BEARER: &str = "Bearer";

/// Performs the client credentials exchange and makes authorized requests to
/// the gateway. Used by [`crate::Client`] implementations.
#[async_trait]
pub trait Authorization: Send + Sync {
    async fn get_access_token(
        &self,
        client_id: &ClientId,
        client_secret: &ClientSecret,
    ) -> Result<AccessToken>;

    async fn get(&self, bearer: &AccessToken, path: &str) -> Result<Response>;

    async fn post(&self, bearer: &AccessToken, path: &str, body: Body) -> Result<Response>;

    async fn put(&self, bearer: &AccessToken, path: &str, body: Body) -> Result<Response>;

    async fn delete(&self, bearer: &AccessToken, path: &str) -> Result<Response>;

    async fn delete_with_body(
        &self,
        bearer: &AccessToken,
        path: &str,
        body: Body,
    ) -> Result<Response>;
}

/// [`Authorization`] against a YaaS gateway over HTTP.
///
/// Every call is a single round trip. Tokens are not cached and nothing is
/// retried; status codes of resource calls are handed back uninterpreted.
#[derive(Clone, Debug)]
pub struct YaasAuthorization<C = SerdeJsonConverter> {
    base_url: Url,
    http_client: Client,
    json_converter: C,
}

impl YaasAuthorization {
    pub fn new(zone: Zone) -> Result<Self> {
        Self::builder().zone(zone).build()
    }

    pub fn builder() -> YaasAuthorizationBuilder {
        YaasAuthorizationBuilder {
            zone: None,
            base_url: None,
            http_client: None,
            json_converter: SerdeJsonConverter,
        }
    }
}

impl<C: JsonConverter> YaasAuthorization<C> {
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Form fields of the token request, in wire order.
    pub fn create_access_token_request_body<'a>(
        &self,
        client_id: &'a ClientId,
        client_secret: &'a ClientSecret,
    ) -> [(&'static str, &'a str); 3] {
        [
            (GRANT_TYPE, CLIENT_CREDENTIALS),
            (CLIENT_ID, client_id.as_str()),
            (CLIENT_SECRET, client_secret.secret().as_str()),
        ]
    }

    pub fn create_access_token_request(
        &self,
        client_id: &ClientId,
        client_secret: &ClientSecret,
    ) -> Result<Request> {
        let url = self.resolve(OAUTH2_TOKEN_PATH)?;
        trace!("Building access token request to '{}'", url);

        // form() sets Content-Type: application/x-www-form-urlencoded
        let request = self
            .http_client
            .post(url)
            .form(&self.create_access_token_request_body(client_id, client_secret))
            .build()?;

        Ok(request)
    }

    /// Extracts the bearer token from a raw token endpoint body.
    pub fn retrieve_access_token(&self, body: &[u8]) -> Result<AccessToken> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(YaasError::EmptyBody);
        }

        let response: AccessTokenResponse = self
            .json_converter
            .from_slice(body)?;

        trace!("Decoded token response: {:?}", response);

        if response.access_token.is_empty() {
            return Err(YaasError::EmptyToken);
        }

        Ok(AccessToken::new(response.access_token))
    }

    /// Builds a request to `<base url><path>` carrying the JSON content type
    /// and the bearer token, each exactly once.
    pub fn create_authorized_request(
        &self,
        method: Method,
        bearer: &AccessToken,
        path: &str,
        body: Option<Body>,
    ) -> Result<Request> {
        let url = self.resolve(path)?;
        trace!("Building authorized {} request to '{}'", method, url);

        let mut authorization = HeaderValue::from_str(&format!("{} {}", BEARER, bearer.secret()))?;
        authorization.set_sensitive(true);

        let mut builder = self
            .http_client
            .request(method, url)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(AUTHORIZATION, authorization);

        if let Some(body) = body {
            builder = builder.body(body);
        }

        Ok(builder.build()?)
    }

    /// Appends `path` to the base URL. The base URL ends with a slash and
    /// carries no query, so the result always stays on the gateway host.
    fn resolve(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    async fn request(&self, request: Request) -> Result<Response> {
        let method = request.method().clone();
        let url = request.url().clone();

        let response = self.http_client.execute(request).await?;

        debug!("{} '{}' answered with {}", method, url, response.status());
        Ok(response)
    }

    async fn authorized(
        &self,
        method: Method,
        bearer: &AccessToken,
        path: &str,
        body: Option<Body>,
    ) -> Result<Response> {
        let request = self.create_authorized_request(method, bearer, path, body)?;
        self.request(request).await
    }
}

#[async_trait]
impl<C: JsonConverter> Authorization for YaasAuthorization<C> {
    async fn get_access_token(
        &self,
        client_id: &ClientId,
        client_secret: &ClientSecret,
    ) -> Result<AccessToken> {
        trace!("Preparing client credentials exchange for '{}'", client_id.as_str());
        let request = self.create_access_token_request(client_id, client_secret)?;

        let response = self.http_client.execute(request).await?;
        debug!("Token endpoint answered with {}", response.status());

        let body = response.bytes().await?;
        let access_token = self.retrieve_access_token(&body)?;

        debug!("Exchanged client credentials for a bearer token");
        Ok(access_token)
    }

    async fn get(&self, bearer: &AccessToken, path: &str) -> Result<Response> {
        self.authorized(Method::GET, bearer, path, None).await
    }

    async fn post(&self, bearer: &AccessToken, path: &str, body: Body) -> Result<Response> {
        self.authorized(Method::POST, bearer, path, Some(body)).await
    }

    async fn put(&self, bearer: &AccessToken, path: &str, body: Body) -> Result<Response> {
        self.authorized(Method::PUT, bearer, path, Some(body)).await
    }

    async fn delete(&self, bearer: &AccessToken, path: &str) -> Result<Response> {
        self.authorized(Method::DELETE, bearer, path, None).await
    }

    async fn delete_with_body(
        &self,
        bearer: &AccessToken,
        path: &str,
        body: Body,
    ) -> Result<Response> {
        self.authorized(Method::DELETE, bearer, path, Some(body)).await
    }
}

pub struct YaasAuthorizationBuilder<C = SerdeJsonConverter> {
    zone: Option<Zone>,
    base_url: Option<Url>,
    http_client: Option<Client>,
    json_converter: C,
}

impl<C: JsonConverter> YaasAuthorizationBuilder<C> {
    pub fn zone(mut self, zone: Zone) -> Self {
        self.zone = Some(zone);
        self
    }

    /// Overrides the zone URL, e.g. for a staging gateway. A path prefix is
    /// kept; query and fragment are dropped.
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// The http client to reuse, a fresh one is created otherwise
    pub fn http_client(mut self, http_client: Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn json_converter<D: JsonConverter>(self, json_converter: D) -> YaasAuthorizationBuilder<D> {
        YaasAuthorizationBuilder {
            zone: self.zone,
            base_url: self.base_url,
            http_client: self.http_client,
            json_converter,
        }
    }

    pub fn build(self) -> Result<YaasAuthorization<C>> {
        let mut base_url = match self.base_url {
            Some(base_url) => base_url,
            None => check_not_none(self.zone, "zone == null")?.base_url()?,
        };
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        base_url.set_query(None);
        base_url.set_fragment(None);

        Ok(YaasAuthorization {
            base_url,
            http_client: self.http_client.unwrap_or_default(),
            json_converter: self.json_converter,
        })
    }
}
