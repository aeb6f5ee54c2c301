pub mod transport;
pub mod types;

pub use transport::{Objective, ObjectiveFn, TransportMode};
pub use types::*;
