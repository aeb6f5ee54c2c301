pub mod haversine;
pub mod matrix;

pub use haversine::haversine_km;
pub use matrix::{build_matrices, DistanceMatrix, Matrices, WeightedMatrix};
