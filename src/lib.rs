#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]

pub mod config;
pub mod http_handler;
mod logger;
pub mod tracking;

pub use config::OpenSkyConfig;
pub use http_handler::http_response::response_common::ResponseError;
pub use tracking::{
    AircraftInfoClient, AuthError, BoundingBox, DecodeError, FlightState, QueryError, SkyTracker,
    TokenCache,
};
