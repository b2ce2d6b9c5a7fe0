// src/state.rs
use std::sync::Arc;

use crate::services::advisor::Advisor;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub advisor: Advisor,
}

impl AppState {
    pub fn new(advisor: Advisor) -> Self {
        Self { advisor }
    }
}
