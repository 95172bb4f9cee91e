use crate::config::OpenSkyConfig;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::request_common::HTTPRequestType;
use crate::http_handler::http_request::token_post::TokenRequest;
use crate::http_handler::http_response::response_common::ResponseError;
use crate::{info, log};
use chrono::{DateTime, TimeDelta, Utc};
use strum_macros::Display;
use tokio::sync::Mutex;

/// Margin subtracted from the server-declared token lifetime so a token is
/// renewed before the issuer invalidates it. A declared lifetime below the
/// buffer yields an expiry in the past, forcing a refresh on next use.
const TOKEN_EXPIRY_BUFFER: TimeDelta = TimeDelta::seconds(300);

struct CachedToken {
    token: String,
    expires_at: DateTime<Utc>,
}

/// Owns the single cached access token for the OpenSky API.
///
/// The cached entry is only ever read or replaced inside the mutex, and the
/// refresh round-trip happens while it is held, so concurrent callers of
/// [`Self::get_token`] trigger at most one token request per expiry cycle;
/// all waiters observe the result of that one refresh. A failed refresh
/// leaves the previous cache state untouched.
pub struct TokenCache {
    auth_client: HTTPClient,
    client_id: String,
    client_secret: String,
    cached: Mutex<Option<CachedToken>>,
}

impl TokenCache {
    pub fn new(config: &OpenSkyConfig) -> Self {
        Self {
            auth_client: HTTPClient::new(config.auth_url()),
            client_id: String::from(config.client_id()),
            client_secret: String::from(config.client_secret()),
            cached: Mutex::new(None),
        }
    }

    /// Returns a bearer token that is still valid at the instant of return,
    /// fetching a fresh one from the token endpoint if the cache is empty
    /// or past its expiry.
    pub async fn get_token(&self) -> Result<String, AuthError> {
        let mut cached = self.cached.lock().await;
        if let Some(entry) = cached.as_ref() {
            if Utc::now() < entry.expires_at {
                return Ok(entry.token.clone());
            }
        }

        info!("Requesting new access token from {}", self.auth_client.url());
        let request = TokenRequest::new(&self.client_id, &self.client_secret);
        let response = request
            .send_request(&self.auth_client)
            .await
            .map_err(|cause| AuthError::Unavailable { cause })?;
        if response.access_token().is_empty() {
            return Err(AuthError::MissingToken);
        }

        let expires_at =
            Utc::now() + TimeDelta::seconds(response.expires_in()) - TOKEN_EXPIRY_BUFFER;
        log!("Access token obtained, treated as expired at {expires_at}");
        *cached = Some(CachedToken {
            token: String::from(response.access_token()),
            expires_at,
        });
        Ok(String::from(response.access_token()))
    }

    #[cfg(test)]
    pub(crate) async fn cached_expiry(&self) -> Option<DateTime<Utc>> {
        self.cached.lock().await.as_ref().map(|entry| entry.expires_at)
    }
}

#[derive(Debug, Display)]
pub enum AuthError {
    #[strum(to_string = "token endpoint request failed: {cause}")]
    Unavailable { cause: ResponseError },
    #[strum(to_string = "token response did not contain an access token")]
    MissingToken,
}

impl std::error::Error for AuthError {}
