pub mod error;
pub mod handlers;
pub mod layers;
pub mod models;
pub mod router;
pub mod state;
#[cfg(test)]
pub mod tests;
