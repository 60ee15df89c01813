//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod extract;
pub mod health;
pub mod users;

use std::time::Duration;

use axum::{http::StatusCode, middleware, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::ServerConfig, constants::MAX_REQUEST_BODY_BYTES, middleware::logging_middleware,
    state::AppState,
};

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/users", users::routes())
}

/// Build the full application: routes, middleware stack and state
pub fn app(state: AppState) -> Router {
    with_layers(routes(), &state.config().server).with_state(state)
}

fn with_layers(router: Router<AppState>, server: &ServerConfig) -> Router<AppState> {
    router
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(server.request_timeout_seconds),
        ))
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::Request,
        routing::{get, post},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::{
        config::{Config, DatabaseConfig, UsersConfig},
        services::MockUserService,
    };

    fn state(request_timeout_seconds: u64) -> AppState {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                rust_log: "debug".to_string(),
                request_timeout_seconds,
            },
            database: DatabaseConfig {
                url: "postgres://localhost/userhub_test".to_string(),
                max_connections: 1,
                acquire_timeout_seconds: 1,
            },
            users: UsersConfig::default(),
        };

        AppState::new(Arc::new(MockUserService::new()), config)
    }

    fn layered(router: Router<AppState>, state: AppState) -> Router {
        with_layers(router, &state.config().server).with_state(state)
    }

    #[tokio::test]
    async fn test_slow_request_times_out() {
        let slow = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(10)).await;
                "done"
            }),
        );

        let response = layered(slow, state(1))
            .oneshot(Request::builder().uri("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let echo = Router::new().route("/echo", post(|body: String| async move { body }));

        let response = layered(echo, state(5))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/echo")
                    .body(Body::from(vec![b'a'; MAX_REQUEST_BODY_BYTES + 1]))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_app_serves_health() {
        let response = app(state(5))
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
