use tracing::{debug, info, span, Level};

use super::selection::{first_minimum, Unvisited};
use crate::distance::matrix::WeightedMatrix;
use crate::domain::types::Route;
use crate::error::RouteError;
use crate::utils::timed;

/// Greedy nearest-neighbour visiting order over priority-weighted objective values.
///
/// The first stop is the cheapest one to reach from the depot; every following stop is the
/// cheapest unvisited one from the current stop. Ties go to the lowest index, so the result is
/// reproducible. An empty input gives an empty route.
pub fn optimize_route(
    weighted_matrix: &WeightedMatrix,
    weighted_depot: &[f64],
) -> Result<Route, RouteError> {
    let n = weighted_depot.len();
    if weighted_matrix.len() != n || weighted_matrix.iter().any(|row| row.len() != n) {
        return Err(RouteError::DimensionMismatch {
            matrix: weighted_matrix.len(),
            depot: n,
        });
    }

    timed("optimize_route", || -> Result<Route, RouteError> {
        let opt_span = span!(Level::DEBUG, "optimize_route", stops = n);
        let _guard = opt_span.enter();
        info!("Starting route optimization (orders={})", n);

        let mut route = Route {
            order: Vec::with_capacity(n),
            weighted_cost: 0.0,
        };
        if n == 0 {
            return Ok(route);
        }

        let mut unvisited = Unvisited::new(n);

        let (first, first_value) =
            first_minimum(unvisited.candidates(weighted_depot.iter().copied().map(Some)))
                .ok_or(RouteError::NoCandidate { step: 0, current: None })?;
        debug!("Initial stop from depot chosen: index={}", first);
        visit(&mut route, &mut unvisited, first, first_value);

        let mut current = first;
        while !unvisited.is_empty() {
            let step = route.len();
            let row = weighted_matrix[current].iter().copied();
            let (next, value) = first_minimum(unvisited.candidates(row)).ok_or(
                RouteError::NoCandidate {
                    step,
                    current: Some(current),
                },
            )?;
            debug!("Step {}: {} -> {} (weighted {:.4})", step, current, next, value);
            visit(&mut route, &mut unvisited, next, value);
            current = next;
        }

        info!(
            "Route optimization finished: {} stops, weighted cost {:.4}",
            route.len(),
            route.weighted_cost
        );
        Ok(route)
    })
}

fn visit(route: &mut Route, unvisited: &mut Unvisited, index: usize, weighted_value: f64) {
    unvisited.mark_visited(index);
    route.order.push(index);
    route.weighted_cost += weighted_value;
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn matrix(values: &[&[f64]]) -> WeightedMatrix {
        values
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .map(|(j, &v)| (i != j).then_some(v))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn empty_input_gives_empty_route() {
        let route = optimize_route(&Vec::new(), &[]).unwrap();
        assert!(route.is_empty());
        assert_eq!(route.weighted_cost, 0.0);
    }

    #[test]
    fn single_stop_route() {
        let route = optimize_route(&matrix(&[&[0.0]]), &[3.5]).unwrap();
        assert_eq!(route.order, vec![0]);
        assert_eq!(route.weighted_cost, 3.5);
    }

    #[test]
    fn follows_cheapest_unvisited_neighbour() {
        let w = matrix(&[
            &[0.0, 5.0, 1.0, 9.0],
            &[5.0, 0.0, 4.0, 2.0],
            &[1.0, 3.0, 0.0, 8.0],
            &[9.0, 2.0, 8.0, 0.0],
        ]);
        let route = optimize_route(&w, &[4.0, 6.0, 7.0, 0.5]).unwrap();
        // 3 from depot, then 1 (2.0), then 2 (4.0), then 0 (1.0)
        assert_eq!(route.order, vec![3, 1, 2, 0]);
        assert!((route.weighted_cost - 7.5).abs() < 1e-12);
    }

    #[test]
    fn ties_resolve_to_lowest_index() {
        let w = matrix(&[&[0.0, 0.0, 0.0], &[0.0, 0.0, 0.0], &[0.0, 0.0, 0.0]]);
        let route = optimize_route(&w, &[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(route.order, vec![0, 1, 2]);

        let route = optimize_route(&w, &[1.0, 0.5, 0.5]).unwrap();
        assert_eq!(route.order, vec![1, 0, 2]);
    }

    #[test]
    fn row_without_reachable_stop_is_an_error() {
        let w: WeightedMatrix = vec![vec![None, None], vec![None, None]];
        let err = optimize_route(&w, &[1.0, 2.0]).unwrap_err();
        assert_eq!(err, RouteError::NoCandidate { step: 1, current: Some(0) });
    }

    #[test]
    fn depot_vector_without_values_is_an_error() {
        let w = matrix(&[&[0.0, 1.0], &[1.0, 0.0]]);
        let err = optimize_route(&w, &[f64::NAN, f64::NAN]).unwrap_err();
        assert_eq!(err, RouteError::NoCandidate { step: 0, current: None });
    }

    #[test]
    fn mismatched_dimensions_are_rejected() {
        let w = matrix(&[&[0.0, 1.0], &[1.0, 0.0]]);
        let err = optimize_route(&w, &[1.0]).unwrap_err();
        assert_eq!(err, RouteError::DimensionMismatch { matrix: 2, depot: 1 });
    }

    proptest! {
        #[test]
        fn always_returns_a_permutation(
            (n, values) in (0usize..12).prop_flat_map(|n| {
                (Just(n), proptest::collection::vec(0.0f64..100.0, n * n + n))
            })
        ) {
            let depot = values[..n].to_vec();
            let w: WeightedMatrix = (0..n)
                .map(|i| (0..n).map(|j| (i != j).then(|| values[n + i * n + j])).collect())
                .collect();

            let route = optimize_route(&w, &depot).unwrap();
            let mut seen = route.order.clone();
            seen.sort_unstable();
            prop_assert_eq!(seen, (0..n).collect::<Vec<_>>());
        }
    }
}
