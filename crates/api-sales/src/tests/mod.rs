pub mod common;
pub mod sales;
