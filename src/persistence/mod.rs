pub mod orders;
pub mod route_csv;

pub use orders::{load_orders, LoadedOrders};
pub use route_csv::write_route_csv;
