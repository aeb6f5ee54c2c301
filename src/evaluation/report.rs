use tracing::{info, warn};

use crate::distance::matrix::DistanceMatrix;
use crate::domain::transport::TransportMode;
use crate::domain::types::{Route, RouteLeg, RouteReport, RouteTotals, Stop};
use crate::error::RouteError;

/// Walk the visiting order and produce one leg per stop with running totals.
///
/// Leg metrics are computed on plain distances; priority weighting only steers stop selection.
/// Returns `Ok(None)` when the route is empty: there is nothing to report.
pub fn generate_report(
    route: &Route,
    distance_matrix: &DistanceMatrix,
    depot_vector: &[f64],
    stops: &[Stop],
    depot_label: &str,
    mode: &TransportMode,
) -> Result<Option<RouteReport>, RouteError> {
    if route.is_empty() {
        warn!("No route generated: visiting order is empty");
        return Ok(None);
    }

    let mut legs = Vec::with_capacity(route.len());
    let mut totals = RouteTotals::default();
    let mut previous: Option<usize> = None;

    for &current in &route.order {
        let (from_label, distance) = match previous {
            None => (depot_label, depot_distance(depot_vector, current)?),
            Some(prev) => (stop_name(stops, prev)?, leg_distance(distance_matrix, prev, current)?),
        };

        let leg_time = mode.travel_time(distance);
        let leg_cost = mode.travel_cost(distance);
        let leg_co2 = mode.travel_co2(distance);

        totals.distance_km += distance;
        totals.time_h += leg_time;
        totals.cost_nok += leg_cost;
        totals.co2_g += leg_co2;

        legs.push(RouteLeg {
            from: from_label.to_string(),
            to: stop_name(stops, current)?.to_string(),
            distance_km: distance,
            cumulative_distance_km: totals.distance_km,
            eta_hours: totals.time_h,
            cost_leg_nok: leg_cost,
            co2_leg_g: leg_co2,
        });
        previous = Some(current);
    }

    info!(
        "Generated route report (mode={}, stops={}, total_distance={:.3} km, total_time={:.3} h, \
         total_cost={:.2} NOK, total_co2={:.1} g)",
        mode.name,
        legs.len(),
        totals.distance_km,
        totals.time_h,
        totals.cost_nok,
        totals.co2_g
    );

    Ok(Some(RouteReport {
        route: route.clone(),
        legs,
        totals,
    }))
}

fn stop_name(stops: &[Stop], index: usize) -> Result<&str, RouteError> {
    stops.get(index).map(Stop::name).ok_or(RouteError::UnknownStop(index))
}

fn depot_distance(depot_vector: &[f64], to: usize) -> Result<f64, RouteError> {
    depot_vector
        .get(to)
        .copied()
        .ok_or(RouteError::MissingDistance { from: to, to })
}

fn leg_distance(matrix: &DistanceMatrix, from: usize, to: usize) -> Result<f64, RouteError> {
    matrix
        .get(from)
        .and_then(|row| row.get(to))
        .copied()
        .flatten()
        .ok_or(RouteError::MissingDistance { from, to })
}
