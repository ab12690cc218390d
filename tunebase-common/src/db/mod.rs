//! Database schema, initialization, and entity model

pub mod init;
pub mod models;

pub use init::*;
pub use models::*;
