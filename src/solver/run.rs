use std::error::Error;

use tracing::{info, span, warn, Level};

use crate::config::Settings;
use crate::domain::types::{RouteReport, Stop};
use crate::error::RouteError;
use crate::evaluation::report::generate_report;
use crate::persistence::orders::load_orders;
use crate::persistence::route_csv::write_route_csv;
use crate::setup::init::setup;
use crate::setup::init_types::ProblemInstance;
use crate::solver::greedy::optimize_route;

/// Optimize and report on an already built instance.
pub fn solve(instance: &ProblemInstance) -> Result<Option<RouteReport>, RouteError> {
    let route = optimize_route(&instance.matrices.weighted, &instance.matrices.weighted_depot)?;
    generate_report(
        &route,
        &instance.matrices.distance,
        &instance.matrices.depot,
        &instance.stops,
        &instance.depot_label,
        &instance.mode,
    )
}

/// Matrix builder, optimizer and report generator chained for in-memory stops.
/// `Ok(None)` means there was nothing to plan.
pub fn plan_route(stops: Vec<Stop>, settings: &Settings) -> Result<Option<RouteReport>, RouteError> {
    if stops.is_empty() {
        warn!("No orders to plan, skipping optimization");
        return Ok(None);
    }
    let instance = setup(stops, settings);
    solve(&instance)
}

/// Full run: load orders, plan, and persist the route CSV.
pub fn run_optimization(settings: &Settings) -> Result<Option<RouteReport>, Box<dyn Error>> {
    let run_span = span!(Level::INFO, "run", mode = settings.mode.key, objective = %settings.objective);
    let _guard = run_span.enter();

    info!(
        "RUN START mode={} objective={} depot=({:.6},{:.6}) orders_file={}",
        settings.mode.key,
        settings.objective,
        settings.depot.latitude,
        settings.depot.longitude,
        settings.orders_path
    );

    let loaded = load_orders(&settings.orders_path, &settings.rejected_path)?;
    let report = match plan_route(loaded.stops, settings)? {
        Some(report) => report,
        None => {
            warn!("No route rows generated");
            return Ok(None);
        }
    };

    write_route_csv(&report, &settings.route_path)?;

    info!(
        "RUN END total_distance={:.3} total_time={:.3} total_cost={:.2} total_co2={:.1}",
        report.totals.distance_km, report.totals.time_h, report.totals.cost_nok, report.totals.co2_g
    );
    Ok(Some(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transport::{Objective, TransportMode};
    use crate::domain::types::Priority;

    #[test]
    fn nothing_to_plan_for_empty_stop_list() {
        assert_eq!(plan_route(Vec::new(), &Settings::default()).unwrap(), None);
    }

    #[test]
    fn zero_cost_objective_visits_in_index_order() {
        // bike has no cost, so every weighted value is zero and ties resolve by index
        let stops = vec![
            Stop::try_new("Far Low", 59.99, 10.90, Priority::Low, 1.0).unwrap(),
            Stop::try_new("Near High", 59.911, 10.751, Priority::High, 1.0).unwrap(),
            Stop::try_new("Mid Medium", 59.95, 10.80, Priority::Medium, 1.0).unwrap(),
        ];
        for objective in [Objective::Cheapest, Objective::LowestCo2] {
            let settings = Settings {
                mode: TransportMode::BIKE,
                objective,
                ..Settings::default()
            };
            let report = plan_route(stops.clone(), &settings).unwrap().unwrap();
            assert_eq!(report.route.order, vec![0, 1, 2]);
            assert_eq!(report.totals.cost_nok, 0.0);
            assert_eq!(report.totals.co2_g, 0.0);
        }
    }

    #[test]
    fn high_priority_can_outrank_a_closer_stop() {
        // 1.2 * d_low > 0.6 * d_high whenever d_high < 2 * d_low
        let stops = vec![
            Stop::try_new("Low", 59.92, 10.75, Priority::Low, 1.0).unwrap(),
            Stop::try_new("High", 59.925, 10.75, Priority::High, 1.0).unwrap(),
        ];
        let settings = Settings::default();
        let report = plan_route(stops, &settings).unwrap().unwrap();
        assert_eq!(report.route.order, vec![1, 0]);
    }
}
