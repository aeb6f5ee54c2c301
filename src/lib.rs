//! Single-vehicle delivery route planning: haversine distances, objective-weighted matrices,
//! greedy nearest-neighbour ordering from a depot, and a per-leg route report.

pub mod cli;
pub mod config;
pub mod distance;
pub mod domain;
pub mod error;
pub mod evaluation;
pub mod fixtures;
pub mod persistence;
pub mod setup;
pub mod solver;
pub mod utils;

pub use config::Settings;
pub use distance::{build_matrices, haversine_km, Matrices};
pub use domain::{Coordinate, Objective, Priority, Route, RouteLeg, RouteReport, Stop, TransportMode};
pub use error::{RouteError, ValidationError};
pub use evaluation::generate_report;
pub use solver::{compare_all, optimize_route, plan_route, run_optimization};
