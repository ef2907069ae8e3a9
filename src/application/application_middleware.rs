use super::ApplicationEnv;
use crate::error::Error;
use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    response::{IntoResponse, Response},
};
use std::any::Any;
use tower_http::{
    catch_panic::CatchPanicLayer,
    classify::{ServerErrorsAsFailures, SharedClassifier},
    cors::CorsLayer,
    trace::TraceLayer,
};

pub type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

pub struct ApplicationMiddleware {
    pub trace: TraceLayer<SharedClassifier<ServerErrorsAsFailures>>,
    pub cors: CorsLayer,
    pub catch_panic: CatchPanicLayer<PanicHandler>,
}

pub fn create_middleware(env: &ApplicationEnv) -> anyhow::Result<ApplicationMiddleware> {
    let trace = TraceLayer::new_for_http();

    let cors = CorsLayer::new()
        .allow_origin(HeaderValue::from_str(&env.cors_allowed_origin)?)
        .allow_methods([Method::GET, Method::POST, Method::PATCH])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    let catch_panic = CatchPanicLayer::custom(handle_panic as PanicHandler);

    Ok(ApplicationMiddleware {
        trace,
        cors,
        catch_panic,
    })
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!(%message, "request handler panicked");

    Error::Panic(message).into_response()
}
