use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Envelope of the `/states/all` endpoint.
///
/// Each entry of `states` is a positional array of heterogeneous values (a
/// state vector); decoding into [`crate::tracking::FlightState`] happens
/// row by row in the tracking layer. The upstream sends `"states": null`
/// when no aircraft matched, which is an empty result rather than an error.
#[derive(serde::Deserialize, Debug)]
pub struct StatesResponse {
    time: i64,
    states: Option<Vec<serde_json::Value>>,
}

impl SerdeJSONBodyHTTPResponseType for StatesResponse {}

impl StatesResponse {
    pub fn time(&self) -> i64 { self.time }

    /// The raw state vectors, empty when the upstream sent none.
    pub fn states(&self) -> &[serde_json::Value] {
        self.states.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
impl StatesResponse {
    pub(crate) fn test(time: i64, states: Option<Vec<serde_json::Value>>) -> Self {
        Self { time, states }
    }
}
