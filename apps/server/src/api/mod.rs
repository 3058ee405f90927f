use std::{sync::Arc, time::Duration};

use crate::{config::Config, error::ApiError, main_lib::AppState};
use axum::{error_handling::HandleErrorLayer, http::HeaderValue, BoxError, Router};
use tower::{
    timeout::{error::Elapsed, TimeoutLayer},
    ServiceBuilder,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

mod health;
mod stocks;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin {:?}", o);
                    None
                }
            })
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let limit = config.request_timeout;
    Router::new()
        .merge(health::router())
        .merge(stocks::router())
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(move |err: BoxError| async move {
                    timeout_error(err, limit)
                }))
                .layer(TimeoutLayer::new(limit)),
        )
        .layer(TraceLayer::new_for_http())
}

/// An expired deadline answers with the relay's JSON error body.
fn timeout_error(err: BoxError, limit: Duration) -> ApiError {
    if err.is::<Elapsed>() {
        ApiError::Timeout(limit)
    } else {
        ApiError::Middleware(err.to_string())
    }
}
