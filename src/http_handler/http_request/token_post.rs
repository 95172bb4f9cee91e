use super::request_common::{HTTPRequestMethod, HTTPRequestType};
use crate::http_handler::http_response::token::TokenResponse;

/// Client-credentials token request, form-encoded per RFC 6749. The token
/// endpoint URL is the base URL of the client this request is sent with, so
/// the endpoint path stays empty.
#[derive(Debug)]
pub struct TokenRequest {
    client_id: String,
    client_secret: String,
}

impl TokenRequest {
    pub fn new(client_id: &str, client_secret: &str) -> Self {
        Self {
            client_id: String::from(client_id),
            client_secret: String::from(client_secret),
        }
    }
}

impl HTTPRequestType for TokenRequest {
    type Response = TokenResponse;

    fn endpoint(&self) -> &'static str { "" }

    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }

    fn form_body(&self) -> Option<Vec<(&'static str, String)>> {
        Some(vec![
            ("grant_type", String::from("client_credentials")),
            ("client_id", self.client_id.clone()),
            ("client_secret", self.client_secret.clone()),
        ])
    }
}
