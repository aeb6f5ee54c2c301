use tracing::{info, span, Level};

use crate::config::Settings;
use crate::distance::matrix::{build_matrices, print_matrix};
use crate::domain::transport::{Objective, TransportMode};
use crate::domain::types::Stop;
use crate::setup::init_types::ProblemInstance;

/// Build the problem instance for the mode and objective in `settings`.
pub fn setup(stops: Vec<Stop>, settings: &Settings) -> ProblemInstance {
    setup_with(stops, settings, settings.mode, settings.objective)
}

/// Like [`setup`] but with an explicit mode and objective, for runs that sweep over them.
pub fn setup_with(
    stops: Vec<Stop>,
    settings: &Settings,
    mode: TransportMode,
    objective: Objective,
) -> ProblemInstance {
    let setup_span = span!(Level::INFO, "setup", mode = mode.key, objective = %objective);
    let _guard = setup_span.enter();

    info!(
        "Starting setup with {} orders, depot {} ({})",
        stops.len(),
        settings.depot_label,
        settings.depot
    );

    let matrices = build_matrices(&stops, settings.depot, &mode, objective);
    print_matrix("Distance matrix", &matrices.distance);
    print_matrix("Weighted matrix", &matrices.weighted);

    ProblemInstance {
        stops,
        matrices,
        mode,
        objective,
        depot_label: settings.depot_label.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Priority;

    #[test]
    fn instance_carries_run_parameters() {
        let settings = Settings {
            mode: TransportMode::WALK,
            objective: Objective::LowestCo2,
            ..Settings::default()
        };
        let stops = vec![Stop::try_new("A", 59.92, 10.76, Priority::Low, 1.0).unwrap()];

        let instance = setup(stops, &settings);
        assert_eq!(instance.mode, TransportMode::WALK);
        assert_eq!(instance.objective, Objective::LowestCo2);
        assert_eq!(instance.depot_label, "OSLO S");
        assert_eq!(instance.matrices.len(), 1);
        assert_eq!(instance.matrices.distance, vec![vec![None]]);
    }
}
