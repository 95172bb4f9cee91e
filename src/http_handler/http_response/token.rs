use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Token issued by the client-credentials grant.
///
/// `access_token` and `expires_in` default when absent so that a structurally
/// valid but useless response surfaces as a missing token (or an already
/// expired one) instead of a parse failure.
#[derive(serde::Deserialize, Debug)]
pub struct TokenResponse {
    #[serde(default)]
    access_token: String,
    #[serde(default)]
    token_type: String,
    #[serde(default)]
    expires_in: i64,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    scope: Option<String>,
}

impl SerdeJSONBodyHTTPResponseType for TokenResponse {}

impl TokenResponse {
    pub fn access_token(&self) -> &str { &self.access_token }
    pub fn token_type(&self) -> &str { &self.token_type }
    pub fn expires_in(&self) -> i64 { self.expires_in }
    pub fn refresh_token(&self) -> Option<&str> { self.refresh_token.as_deref() }
    pub fn scope(&self) -> Option<&str> { self.scope.as_deref() }
}
