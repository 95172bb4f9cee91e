use std::env;

/// Default token endpoint of the OpenSky Network Keycloak realm.
const DEFAULT_AUTH_URL: &str =
    "https://auth.opensky-network.org/auth/realms/opensky-network/protocol/openid-connect/token";
/// Default REST API root of the OpenSky Network.
const DEFAULT_BASE_URL: &str = "https://opensky-network.org/api";

/// Connection settings for the OpenSky Network API.
///
/// Credentials are optional: without them every query runs unauthenticated
/// and is subject to the stricter anonymous rate limits.
#[derive(Debug, Clone)]
pub struct OpenSkyConfig {
    client_id: String,
    client_secret: String,
    auth_url: String,
    base_url: String,
}

impl Default for OpenSkyConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            auth_url: String::from(DEFAULT_AUTH_URL),
            base_url: String::from(DEFAULT_BASE_URL),
        }
    }
}

impl OpenSkyConfig {
    /// Reads the configuration from the environment.
    ///
    /// Recognized variables: `OPENSKY_CLIENT_ID`, `OPENSKY_CLIENT_SECRET`,
    /// `OPENSKY_AUTH_URL` and `OPENSKY_BASE_URL`. Unset variables fall back
    /// to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            client_id: env::var("OPENSKY_CLIENT_ID").unwrap_or(defaults.client_id),
            client_secret: env::var("OPENSKY_CLIENT_SECRET").unwrap_or(defaults.client_secret),
            auth_url: env::var("OPENSKY_AUTH_URL").unwrap_or(defaults.auth_url),
            base_url: env::var("OPENSKY_BASE_URL")
                .map_or(defaults.base_url, |url| url.trim_end_matches('/').to_string()),
        }
    }

    pub fn with_credentials(mut self, client_id: &str, client_secret: &str) -> Self {
        self.client_id = String::from(client_id);
        self.client_secret = String::from(client_secret);
        self
    }

    pub fn with_auth_url(mut self, auth_url: &str) -> Self {
        self.auth_url = String::from(auth_url);
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn client_id(&self) -> &str { &self.client_id }

    pub fn client_secret(&self) -> &str { &self.client_secret }

    pub fn auth_url(&self) -> &str { &self.auth_url }

    pub fn base_url(&self) -> &str { &self.base_url }
}
