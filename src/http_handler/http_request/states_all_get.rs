use super::request_common::{HTTPRequestMethod, HTTPRequestType};
use crate::http_handler::http_response::states::StatesResponse;
use crate::tracking::BoundingBox;

/// `GET /states/all`, optionally narrowed to a single transponder address or
/// a bounding box. The bearer token is attached when one could be obtained;
/// without it the request goes out unauthenticated.
#[derive(Debug)]
pub struct StatesAllRequest {
    token: Option<String>,
    icao24: Option<String>,
    area: Option<BoundingBox>,
}

impl StatesAllRequest {
    pub fn all(token: Option<String>) -> Self {
        Self { token, icao24: None, area: None }
    }

    pub fn by_icao(token: Option<String>, icao24: &str) -> Self {
        Self { token, icao24: Some(String::from(icao24)), area: None }
    }

    pub fn by_area(token: Option<String>, area: BoundingBox) -> Self {
        Self { token, icao24: None, area: Some(area) }
    }
}

impl HTTPRequestType for StatesAllRequest {
    type Response = StatesResponse;

    fn endpoint(&self) -> &'static str { "/states/all" }

    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(icao24) = &self.icao24 {
            params.push(("icao24", icao24.clone()));
        }
        if let Some(area) = &self.area {
            // Bounds are forwarded verbatim; the upstream decides how to
            // treat an inverted box.
            params.push(("lamin", area.south.to_string()));
            params.push(("lamax", area.north.to_string()));
            params.push(("lomin", area.west.to_string()));
            params.push(("lomax", area.east.to_string()));
        }
        params
    }

    fn header_params(&self) -> reqwest::header::HeaderMap {
        let mut headers = reqwest::header::HeaderMap::default();
        if let Some(token) = &self.token {
            if let Ok(value) =
                reqwest::header::HeaderValue::from_str(&format!("Bearer {token}"))
            {
                headers.insert(reqwest::header::AUTHORIZATION, value);
            }
        }
        headers
    }
}
