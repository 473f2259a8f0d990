pub mod config;
pub mod error;
pub mod relational;
pub mod spreadsheet;
pub mod store;

pub use config::*;
pub use error::{StoreError, StoreResult};
pub use store::*;
