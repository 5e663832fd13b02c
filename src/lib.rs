// src/lib.rs
// Main library module declarations

pub mod adapter;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

use std::sync::Arc;

use adapter::http::{router, AppState};
use application::usecase::OrderWorkflow;
use infrastructure::database::Database;

/// Wire the SQLite repositories into the order workflow and expose it over HTTP
pub fn app(database: &Database) -> axum::Router {
    let workflow = OrderWorkflow::new(
        Arc::new(database.users()),
        Arc::new(database.products()),
        Arc::new(database.orders()),
    );

    router(AppState::new(Arc::new(workflow)))
}
