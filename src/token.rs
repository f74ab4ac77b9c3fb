use serde::{Deserialize, Serialize};
use std::fmt;

/// Body returned by the YaaS OAuth2 token endpoint.
///
/// Missing fields decode as empty values, so an error payload still decodes
/// and is rejected later for carrying no token.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct AccessTokenResponse {
    pub token_type: String,
    /// The bearer credential
    pub access_token: String,
    pub expires_in: u64,
    pub scope: String,
}

impl fmt::Debug for AccessTokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessTokenResponse")
            .field("token_type", &self.token_type)
            .field("access_token", &"[redacted]")
            .field("expires_in", &self.expires_in)
            .field("scope", &self.scope)
            .finish()
    }
}
