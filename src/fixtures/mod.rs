pub mod data_generator;

pub use data_generator::{generate_orders, generate_sample_file, SampleOrder};
