mod aircraft_info;
mod flight_state;
mod query_guard;
mod token_cache;
mod tracker;

pub use aircraft_info::AircraftInfoClient;
pub use flight_state::DecodeError;
pub use flight_state::FlightState;
pub use query_guard::MAX_QUERY_RESULTS;
pub use token_cache::AuthError;
pub use token_cache::TokenCache;
pub use tracker::BoundingBox;
pub use tracker::QueryError;
pub use tracker::SkyTracker;
