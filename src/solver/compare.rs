use itertools::iproduct;
use rayon::prelude::*;
use tracing::info;

use crate::config::Settings;
use crate::domain::transport::{Objective, TransportMode};
use crate::domain::types::{RouteTotals, Stop};
use crate::error::RouteError;
use crate::setup::init::setup_with;
use crate::solver::run::solve;

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub mode: TransportMode,
    pub objective: Objective,
    pub order: Vec<usize>,
    pub totals: RouteTotals,
}

/// Plan every mode/objective combination in parallel. Rows come back in catalog order
/// (modes outer, objectives inner). Each run builds its own matrices from a copy of the stops.
pub fn compare_all(stops: &[Stop], settings: &Settings) -> Result<Vec<ComparisonRow>, RouteError> {
    let combinations: Vec<(TransportMode, Objective)> =
        iproduct!(TransportMode::ALL, Objective::ALL).collect();

    info!(
        "Comparing {} mode/objective combinations over {} orders",
        combinations.len(),
        stops.len()
    );

    let rows = combinations
        .par_iter()
        .map(|&(mode, objective)| -> Result<ComparisonRow, RouteError> {
            let instance = setup_with(stops.to_vec(), settings, mode, objective);
            let report = solve(&instance)?;
            Ok(ComparisonRow {
                mode,
                objective,
                order: report.as_ref().map(|r| r.route.order.clone()).unwrap_or_default(),
                totals: report.map(|r| r.totals).unwrap_or_default(),
            })
        })
        .collect::<Result<Vec<_>, RouteError>>()?;

    Ok(rows)
}
