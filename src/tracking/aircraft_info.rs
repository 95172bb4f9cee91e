use super::tracker::QueryError;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::aircraft_info_get::AircraftInfoRequest;
use crate::http_handler::http_request::request_common::HTTPRequestType;
use crate::{error, info, log};
use std::collections::HashMap;
use std::time::Duration;

/// Aircraft database root used for metadata lookups by transponder address.
const AIRCRAFT_DB_URL: &str = "https://www.flightdb.net";
/// Pause between bulk lookups to keep the load on the database low.
const BULK_LOOKUP_DELAY: Duration = Duration::from_millis(200);

/// Passthrough client for aircraft metadata from flightdb.net. The database
/// serves HTML, which is returned uninterpreted.
pub struct AircraftInfoClient {
    client: HTTPClient,
}

impl Default for AircraftInfoClient {
    fn default() -> Self { Self::new() }
}

impl AircraftInfoClient {
    pub fn new() -> Self { Self::with_base_url(AIRCRAFT_DB_URL) }

    pub fn with_base_url(base_url: &str) -> Self {
        Self { client: HTTPClient::new(base_url) }
    }

    /// Fetches the database page for one transponder address.
    pub async fn aircraft_info(&self, icao: &str) -> Result<String, QueryError> {
        info!("Fetching aircraft info for {icao}");
        let request = AircraftInfoRequest::new(icao);
        request.send_request(&self.client).await.map_err(QueryError::from)
    }

    /// Sequential lookup over a list of transponder addresses with a fixed
    /// delay between requests. A failed lookup records its error text under
    /// the address instead of aborting the batch.
    pub async fn multiple_aircraft_info(&self, icaos: &[String]) -> HashMap<String, String> {
        info!("Fetching aircraft info for {} transponder addresses", icaos.len());
        let mut results = HashMap::with_capacity(icaos.len());
        for icao in icaos {
            match self.aircraft_info(icao).await {
                Ok(page) => {
                    results.insert(icao.clone(), page);
                }
                Err(e) => {
                    error!("Aircraft info lookup for {icao} failed: {e}");
                    results.insert(icao.clone(), format!("Error: {e}"));
                }
            }
            tokio::time::sleep(BULK_LOOKUP_DELAY).await;
        }
        log!("Processed {} aircraft lookups", results.len());
        results
    }
}
