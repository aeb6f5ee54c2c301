use crate::distance::matrix::Matrices;
use crate::domain::transport::{Objective, TransportMode};
use crate::domain::types::Stop;

/// Everything one optimization run works on. Each run owns its own copy.
#[derive(Debug, Clone)]
pub struct ProblemInstance {
    pub stops: Vec<Stop>,
    pub matrices: Matrices,
    pub mode: TransportMode,
    pub objective: Objective,
    pub depot_label: String,
}
