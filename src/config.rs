use std::env;
use std::str::FromStr;

use dotenv::dotenv;
use tracing::warn;

use crate::domain::transport::{Objective, TransportMode};
use crate::domain::types::Coordinate;

pub mod constant {
    pub const ORDERS_FILE: &str = "files/orders.csv";
    pub const REJECTED_FILE: &str = "files/rejected.csv";
    pub const RUN_LOG_FILE: &str = "files/run.log";
    pub const ROUTE_FILE: &str = "files/route.csv";
    pub const OSLO_S_LAT: f64 = 59.9100;
    pub const OSLO_S_LON: f64 = 10.7500;
    pub const DEPOT_LABEL: &str = "OSLO S";
    pub const SEED: u64 = 64;
    pub const SAMPLE_ORDER_COUNT: usize = 12;
}

/// Everything a single optimization run needs, passed explicitly to the planner.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub orders_path: String,
    pub rejected_path: String,
    pub route_path: String,
    pub log_path: String,
    pub mode: TransportMode,
    pub objective: Objective,
    pub depot: Coordinate,
    pub depot_label: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            orders_path: constant::ORDERS_FILE.to_string(),
            rejected_path: constant::REJECTED_FILE.to_string(),
            route_path: constant::ROUTE_FILE.to_string(),
            log_path: constant::RUN_LOG_FILE.to_string(),
            mode: TransportMode::CAR,
            objective: Objective::Fastest,
            depot: Coordinate::new(constant::OSLO_S_LAT, constant::OSLO_S_LON),
            depot_label: constant::DEPOT_LABEL.to_string(),
        }
    }
}

impl Settings {
    /// Defaults overridden by `.env` / process environment.
    pub fn from_env() -> Self {
        dotenv().ok();
        let mut settings = Self::default();

        if let Ok(path) = env::var("ORDERS_FILE") {
            settings.orders_path = path;
        }
        if let Ok(path) = env::var("REJECTED_FILE") {
            settings.rejected_path = path;
        }
        if let Ok(path) = env::var("ROUTE_FILE") {
            settings.route_path = path;
        }
        if let Ok(path) = env::var("RUN_LOG_FILE") {
            settings.log_path = path;
        }
        if let Some(mode) = parse_env::<TransportMode>("TRANSPORT_MODE") {
            settings.mode = mode;
        }
        if let Some(objective) = parse_env::<Objective>("OBJECTIVE") {
            settings.objective = objective;
        }

        let lat = parse_env::<f64>("DEPOT_LAT").unwrap_or(settings.depot.latitude);
        let lon = parse_env::<f64>("DEPOT_LON").unwrap_or(settings.depot.longitude);
        match Coordinate::try_new(lat, lon) {
            Ok(depot) => settings.depot = depot,
            Err(err) => warn!("Ignoring depot from environment: {}", err),
        }

        settings
    }
}

fn parse_env<T>(key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("Invalid value for {}='{}': {}, keeping default", key, raw, err);
            None
        }
    }
}
