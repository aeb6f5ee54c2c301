pub mod init;
pub mod init_types;

pub use init::{setup, setup_with};
pub use init_types::ProblemInstance;
