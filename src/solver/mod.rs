pub mod compare;
pub mod greedy;
pub mod run;

pub use compare::{compare_all, ComparisonRow};
pub use greedy::optimize_route;
pub use run::{plan_route, run_optimization, solve};
