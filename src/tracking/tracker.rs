use super::flight_state::FlightState;
use super::query_guard;
use super::token_cache::TokenCache;
use crate::config::OpenSkyConfig;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::request_common::HTTPRequestType;
use crate::http_handler::http_request::states_all_get::StatesAllRequest;
use crate::http_handler::http_response::response_common::ResponseError;
use crate::http_handler::http_response::states::StatesResponse;
use crate::{info, log, warn};
use strum_macros::Display;

/// Spatial filter for an area query, decimal degrees. The bounds are
/// forwarded to the upstream as given; no ordering between south/north or
/// west/east is enforced here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub south: f64,
    pub north: f64,
    pub east: f64,
    pub west: f64,
}

/// Query client for live flight state vectors.
///
/// Every operation first asks the [`TokenCache`] for a bearer token.
/// Authentication is best-effort: when no token can be obtained the query
/// proceeds unauthenticated, since the endpoint also serves anonymous
/// callers at lower rate limits. Rows that fail to decode are dropped
/// silently; a malformed row never voids the batch.
pub struct SkyTracker {
    client: HTTPClient,
    token_cache: TokenCache,
}

impl SkyTracker {
    pub fn new(config: &OpenSkyConfig) -> Self {
        Self {
            client: HTTPClient::new(config.base_url()),
            token_cache: TokenCache::new(config),
        }
    }

    /// All state vectors the network currently tracks.
    pub async fn get_active_flights(&self) -> Result<Vec<FlightState>, QueryError> {
        info!("Fetching active flights from the OpenSky Network API");
        let request = StatesAllRequest::all(self.bearer_token().await);
        let response =
            request.send_request(&self.client).await.map_err(QueryError::from)?;
        let flights = Self::decode_states(&response);
        log!("Parsed {} flights from the states response", flights.len());
        Ok(flights)
    }

    /// The state vector of a single aircraft, or `None` when the network
    /// does not currently track it.
    pub async fn get_flight_by_icao(
        &self,
        icao24: &str,
    ) -> Result<Option<FlightState>, QueryError> {
        info!("Fetching flight {icao24} from the OpenSky Network API");
        let request = StatesAllRequest::by_icao(self.bearer_token().await, icao24);
        let response =
            request.send_request(&self.client).await.map_err(QueryError::from)?;
        Ok(Self::decode_states(&response).into_iter().next())
    }

    /// All state vectors within the bounding box, capped at
    /// [`query_guard::MAX_QUERY_RESULTS`] rows.
    pub async fn get_flights_by_area(
        &self,
        area: BoundingBox,
    ) -> Result<Vec<FlightState>, QueryError> {
        info!(
            "Fetching flights between lat [{}, {}] and lon [{}, {}]",
            area.south, area.north, area.west, area.east
        );
        let request = StatesAllRequest::by_area(self.bearer_token().await, area);
        let response =
            request.send_request(&self.client).await.map_err(QueryError::from)?;
        let flights = Self::decode_states(&response);
        query_guard::check_result_size(flights.len())?;
        log!("Parsed {} flights from the states response", flights.len());
        Ok(flights)
    }

    async fn bearer_token(&self) -> Option<String> {
        match self.token_cache.get_token().await {
            Ok(token) => Some(token),
            Err(e) => {
                warn!("Token acquisition failed, continuing unauthenticated: {e}");
                None
            }
        }
    }

    fn decode_states(response: &StatesResponse) -> Vec<FlightState> {
        response
            .states()
            .iter()
            .filter_map(|row| FlightState::from_state_vector(row).ok())
            .collect()
    }
}

#[derive(Debug, Display)]
pub enum QueryError {
    #[strum(to_string = "upstream request failed: {cause}")]
    UpstreamUnavailable { cause: ResponseError },
    #[strum(to_string = "upstream response could not be parsed: {cause}")]
    UpstreamResponseInvalid { cause: ResponseError },
    #[strum(to_string = "query returned {count} flights, exceeding the limit of {max} for client processing")]
    ResultTooLarge { count: usize, max: usize },
}

impl std::error::Error for QueryError {}
impl From<ResponseError> for QueryError {
    fn from(cause: ResponseError) -> Self {
        match cause {
            ResponseError::InvalidBody => QueryError::UpstreamResponseInvalid { cause },
            _ => QueryError::UpstreamUnavailable { cause },
        }
    }
}
