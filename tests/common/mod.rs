//! Test utilities and common setup.

use std::sync::Arc;

use axum::Router;
use msgboard::config::Config;
use msgboard::routes::{self, AppState};
use msgboard::schema::build_schema;
use msgboard::store::MessageStore;

/// Create a test application with default config.
pub fn test_app() -> Router {
    test_app_with_config(Config::default())
}

/// Create a test application with the given config.
pub fn test_app_with_config(config: Config) -> Router {
    let store = Arc::new(MessageStore::new());
    let schema = build_schema(store, &config);
    let state = AppState {
        schema,
        config: Arc::new(config),
    };
    routes::create_router(state)
}
