use std::sync::Arc;

use axum::{body::Body, http::Request};
use stockview_market_data::AlphaVantageProvider;
use stockview_server::{api::app_router, build_state_with_provider, config::Config};
use tower::ServiceExt;

#[tokio::test]
async fn healthz_works() {
    let config = Config::default();
    let provider = Arc::new(AlphaVantageProvider::with_options(
        "test".to_string(),
        "http://127.0.0.1:9/query",
        config.upstream_timeout,
    ));
    let state = build_state_with_provider(&config, provider).await.unwrap();
    let app = app_router(state, &config);

    for uri in ["/healthz", "/readyz"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"ok");
    }
}
