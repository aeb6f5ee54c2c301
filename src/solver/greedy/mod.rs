pub mod nearest_neighbour;
pub mod selection;

pub use nearest_neighbour::optimize_route;
