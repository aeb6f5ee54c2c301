use std::fmt;

/// A single reason a delivery record was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyName,
    NotNumeric { field: &'static str, value: String },
    OutOfRange { field: &'static str, value: f64, min: f64, max: f64 },
    UnknownPriority(String),
    NegativeWeight(f64),
    FieldCount { expected: usize, found: usize },
}

impl ValidationError {
    pub fn join_many(errs: &[ValidationError], separator: &str) -> String {
        errs.iter().map(|err| err.to_string()).collect::<Vec<_>>().join(separator)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "customer name must be a non-empty string"),
            Self::NotNumeric { field, value } => write!(f, "{field} must be numeric, got '{value}'"),
            Self::OutOfRange { field, value, min, max } => {
                write!(f, "{field} must be in [{min}, {max}], got {value}")
            }
            Self::UnknownPriority(label) => {
                write!(f, "priority must be 'High', 'Medium' or 'Low', got '{label}'")
            }
            Self::NegativeWeight(value) => write!(f, "weight_kg must be non-negative, got {value}"),
            Self::FieldCount { expected, found } => {
                write!(f, "expected {expected} fields, found {found}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Failures of route construction. These abort the run instead of producing a wrong route.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteError {
    /// No unvisited stop has a defined weighted value from the current position.
    NoCandidate { step: usize, current: Option<usize> },
    /// Weighted depot vector and weighted matrix disagree on the number of stops.
    DimensionMismatch { matrix: usize, depot: usize },
    /// A leg in the visiting order has no distance entry.
    MissingDistance { from: usize, to: usize },
    /// The visiting order refers to a stop that is not in the stop list.
    UnknownStop(usize),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidate { step, current: Some(current) } => {
                write!(f, "no reachable unvisited stop from stop {current} at step {step}")
            }
            Self::NoCandidate { step, current: None } => {
                write!(f, "no reachable stop from the depot at step {step}")
            }
            Self::DimensionMismatch { matrix, depot } => write!(
                f,
                "weighted matrix has {matrix} rows but depot vector has {depot} entries"
            ),
            Self::MissingDistance { from, to } => {
                write!(f, "missing distance between stop {from} and stop {to}")
            }
            Self::UnknownStop(index) => write!(f, "route refers to unknown stop {index}"),
        }
    }
}

impl std::error::Error for RouteError {}
