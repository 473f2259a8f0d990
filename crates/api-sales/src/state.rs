use core_store::SalesStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SalesStore>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn SalesStore>) -> Self {
        Self { store }
    }
}
