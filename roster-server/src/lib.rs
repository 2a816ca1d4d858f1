pub mod api;
pub mod config;
pub mod database;
pub mod errors;
pub mod extract;
pub mod queries;
pub mod router;
pub mod server;

use std::sync::Arc;

pub use config::ServerConfig;
pub use errors::{ApiError, ServerError, ServerResult};
pub use router::create_router;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<database::UserDatabase>,
}

impl AppState {
    pub fn new(db: Arc<database::UserDatabase>) -> Self {
        Self { db }
    }
}
