use super::{ApplicationMiddleware, ApplicationState};
use crate::routing::routing;
use axum::Router;

///
/// Layers are applied bottom-up, so panics are turned into responses
/// before CORS headers are added and the request is traced
///
pub fn create_application(
    application_state: ApplicationState,
    application_middleware: ApplicationMiddleware,
) -> Router {
    routing()
        .with_state(application_state)
        .layer(application_middleware.catch_panic)
        .layer(application_middleware.cors)
        .layer(application_middleware.trace)
}
