use crate::models::Dataset;
use std::{sync::Arc, time::Instant};

#[derive(Clone)]
pub struct AppState {
    pub data: Arc<Dataset>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(data: Dataset) -> Self {
        Self {
            data: Arc::new(data),
            started_at: Instant::now(),
        }
    }
}
