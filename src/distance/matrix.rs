use tracing::{debug, info};

use super::haversine::haversine_km;
use crate::domain::transport::{Objective, ObjectiveFn, TransportMode};
use crate::domain::types::{Coordinate, Stop};

/// `M[i][j]` is the great-circle distance from stop i to stop j. The diagonal is `None`.
pub type DistanceMatrix = Vec<Vec<Option<f64>>>;

/// `W[i][j]` is the objective value of `M[i][j]` scaled by stop j's priority weight.
pub type WeightedMatrix = Vec<Vec<Option<f64>>>;

#[derive(Debug, Clone, PartialEq)]
pub struct Matrices {
    pub distance: DistanceMatrix,
    pub weighted: WeightedMatrix,
    pub depot: Vec<f64>,
    pub weighted_depot: Vec<f64>,
}

impl Matrices {
    pub fn len(&self) -> usize {
        self.depot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depot.is_empty()
    }
}

/// Build the distance and objective-weighted structures for one optimization run.
pub fn build_matrices(
    stops: &[Stop],
    depot: Coordinate,
    mode: &TransportMode,
    objective: Objective,
) -> Matrices {
    let compute = objective.cost_fn();

    let distance = distance_matrix(stops);
    let weighted = weighted_matrix(&distance, stops, mode, compute);
    let depot_distances = depot_vector(stops, depot);
    let weighted_depot = depot_distances
        .iter()
        .zip(stops)
        .map(|(&d, stop)| compute(mode, d) * stop.priority_weight())
        .collect();

    info!(
        "Calculated matrices for {} orders (shape {}x{}), mode={}, objective={}",
        stops.len(),
        stops.len(),
        stops.len(),
        mode.name,
        objective
    );

    Matrices {
        distance,
        weighted,
        depot: depot_distances,
        weighted_depot,
    }
}

pub fn distance_matrix(stops: &[Stop]) -> DistanceMatrix {
    stops
        .iter()
        .enumerate()
        .map(|(i, from)| {
            stops
                .iter()
                .enumerate()
                .map(|(j, to)| (i != j).then(|| haversine_km(from.location(), to.location())))
                .collect()
        })
        .collect()
}

/// Priority applies to the destination column, never to the stop being left.
pub fn weighted_matrix(
    distance: &DistanceMatrix,
    stops: &[Stop],
    mode: &TransportMode,
    compute: ObjectiveFn,
) -> WeightedMatrix {
    distance
        .iter()
        .map(|row| {
            row.iter()
                .zip(stops)
                .map(|(entry, to)| entry.map(|d| compute(mode, d) * to.priority_weight()))
                .collect()
        })
        .collect()
}

pub fn depot_vector(stops: &[Stop], depot: Coordinate) -> Vec<f64> {
    let distances: Vec<f64> = stops
        .iter()
        .map(|stop| haversine_km(depot, stop.location()))
        .collect();
    debug!("Depot distances: {:?}", distances);
    distances
}

/// Debug dump of a matrix, one row per line.
pub fn print_matrix(label: &str, matrix: &[Vec<Option<f64>>]) {
    debug!("{}:", label);
    for row in matrix {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| cell.map_or_else(|| "-".to_string(), |v| format!("{:.3}", v)))
            .collect();
        debug!("[{}]", cells.join(", "));
    }
}
