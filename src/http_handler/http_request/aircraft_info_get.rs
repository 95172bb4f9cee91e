use super::request_common::{HTTPRequestMethod, HTTPRequestType};
use crate::http_handler::http_response::response_common::PlainTextResponse;

/// Aircraft metadata lookup against the flightdb.net aircraft database.
/// The response is raw HTML and passed through uninterpreted.
#[derive(Debug)]
pub struct AircraftInfoRequest {
    icao: String,
}

impl AircraftInfoRequest {
    pub fn new(icao: &str) -> Self {
        Self { icao: String::from(icao) }
    }
}

impl HTTPRequestType for AircraftInfoRequest {
    type Response = PlainTextResponse;

    fn endpoint(&self) -> &'static str { "/aircraft.php" }

    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![("modes", self.icao.clone())]
    }
}
