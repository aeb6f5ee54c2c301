use std::error::Error;

use csv::Writer;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::info;

use crate::domain::types::{Coordinate, Priority};
use crate::utils::ensure_parent_dir;

/// Degrees of latitude/longitude a generated order may lie from the depot.
const LAT_SPREAD: f64 = 0.05;
const LON_SPREAD: f64 = 0.10;

/// One row of an orders CSV, in the same column order the loader expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleOrder {
    pub customer: String,
    pub latitude: f64,
    pub longitude: f64,
    pub priority: &'static str,
    pub weight_kg: f64,
}

/// Deterministic orders scattered around `depot`.
pub fn generate_orders(count: usize, depot: Coordinate, seed: u64) -> Vec<SampleOrder> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (1..=count)
        .map(|n| {
            let latitude = round_to(depot.latitude + rng.gen_range(-LAT_SPREAD..=LAT_SPREAD), 5);
            let longitude = round_to(depot.longitude + rng.gen_range(-LON_SPREAD..=LON_SPREAD), 5);
            let priority = Priority::ALL
                .choose(&mut rng)
                .copied()
                .unwrap_or(Priority::Medium);
            let weight_kg = round_to(rng.gen_range(0.5..=25.0), 1);

            SampleOrder {
                customer: format!("Customer {:02}", n),
                latitude: latitude.clamp(-90.0, 90.0),
                longitude: longitude.clamp(-180.0, 180.0),
                priority: priority.label(),
                weight_kg,
            }
        })
        .collect()
}

pub fn write_orders_csv(orders: &[SampleOrder], path: &str) -> Result<(), Box<dyn Error>> {
    ensure_parent_dir(path)?;
    let mut wtr = Writer::from_path(path)?;
    for order in orders {
        wtr.serialize(order)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Generate `count` orders around `depot` and write them to `path`.
pub fn generate_sample_file(
    path: &str,
    count: usize,
    depot: Coordinate,
    seed: u64,
) -> Result<Vec<SampleOrder>, Box<dyn Error>> {
    let orders = generate_orders(count, depot, seed);
    write_orders_csv(&orders, path)?;
    info!("Generated {} sample orders around {} into {}", orders.len(), depot, path);
    Ok(orders)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
