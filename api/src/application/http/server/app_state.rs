use std::sync::Arc;

use acorn_core::infrastructure::postgrest::PostgrestRepository;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub repository: Arc<PostgrestRepository>,
}

impl AppState {
    pub fn new(args: Arc<Args>, repository: PostgrestRepository) -> Self {
        Self {
            args,
            repository: Arc::new(repository),
        }
    }
}
