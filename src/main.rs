use skytracker::{AircraftInfoClient, BoundingBox, OpenSkyConfig, SkyTracker, error, fatal};
use std::env;
use std::process::ExitCode;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let config = OpenSkyConfig::from_env();

    match args.as_slice() {
        ["all"] => match SkyTracker::new(&config).get_active_flights().await {
            Ok(flights) => print_json(&flights),
            Err(e) => return fail(&e),
        },
        ["icao", icao24] => match SkyTracker::new(&config).get_flight_by_icao(icao24).await {
            Ok(flight) => print_json(&flight),
            Err(e) => return fail(&e),
        },
        ["area", south, north, east, west] => {
            let area = BoundingBox {
                south: parse_bound(south),
                north: parse_bound(north),
                east: parse_bound(east),
                west: parse_bound(west),
            };
            match SkyTracker::new(&config).get_flights_by_area(area).await {
                Ok(flights) => print_json(&flights),
                Err(e) => return fail(&e),
            }
        }
        ["aircraft", icao] => match AircraftInfoClient::new().aircraft_info(icao).await {
            Ok(page) => println!("{page}"),
            Err(e) => return fail(&e),
        },
        _ => {
            eprintln!(
                "usage: skytracker all | icao <icao24> | area <south> <north> <east> <west> | aircraft <icao24>"
            );
            return ExitCode::from(2);
        }
    }
    ExitCode::SUCCESS
}

fn parse_bound(value: &str) -> f64 {
    value.parse().unwrap_or_else(|_| fatal!("{value} is not a valid coordinate"))
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => error!("Failed to serialize result: {e}"),
    }
}

fn fail(e: &dyn std::error::Error) -> ExitCode {
    error!("{e}");
    ExitCode::FAILURE
}
