/// A simple wrapper around `reqwest::Client` used to manage HTTP requests
/// with a preconfigured base URL and default settings.
///
/// One instance exists per remote host (API root, token endpoint, aircraft
/// database). It sets a fixed timeout and allows easy reuse of the HTTP
/// client infrastructure.
#[derive(Debug)]
pub struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL prepended to all endpoint paths.
    base_url: String,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` with the given base URL.
    ///
    /// This client has a default request timeout of 30 seconds; a request
    /// exceeding it fails as a transport error and is not retried.
    ///
    /// # Arguments
    /// * `base_url` – The root URL for all HTTP requests
    ///   (e.g., `"https://opensky-network.org/api"`).
    pub fn new(base_url: &str) -> HTTPClient {
        HTTPClient {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap(),
            base_url: String::from(base_url),
        }
    }

    /// Returns a reference to the internal `reqwest::Client`.
    pub(super) fn client(&self) -> &reqwest::Client { &self.client }
    /// Returns the base URL that the client was initialized with.
    pub fn url(&self) -> &str { self.base_url.as_str() }
}
