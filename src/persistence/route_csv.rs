use std::error::Error;

use csv::Writer;
use tracing::info;

use crate::domain::types::RouteReport;
use crate::utils::ensure_parent_dir;

/// Writes one row per leg, header taken from the `RouteLeg` field names.
pub fn write_route_csv(report: &RouteReport, path: &str) -> Result<(), Box<dyn Error>> {
    ensure_parent_dir(path)?;
    let mut wtr = Writer::from_path(path)?;

    for leg in &report.legs {
        wtr.serialize(leg)?;
    }
    wtr.flush()?;

    info!(
        "Route CSV written to {} (stops={}, total_distance={:.3} km, total_time={:.3} h, \
         total_cost={:.2} NOK, total_co2={:.1} g)",
        path,
        report.legs.len(),
        report.totals.distance_km,
        report.totals.time_h,
        report.totals.cost_nok,
        report.totals.co2_g
    );
    Ok(())
}
