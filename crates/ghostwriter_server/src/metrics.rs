//! Request metrics (feature `metrics`).
//!
//! Counters go through the global OpenTelemetry meter installed by
//! [`ghostwriter_core::init_observability`].

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use opentelemetry::KeyValue;
use opentelemetry::metrics::Counter;
use std::sync::OnceLock;

fn request_counter() -> &'static Counter<u64> {
    static COUNTER: OnceLock<Counter<u64>> = OnceLock::new();
    COUNTER.get_or_init(|| {
        opentelemetry::global::meter("ghostwriter_server")
            .u64_counter("http.server.requests")
            .with_description("Completed HTTP requests by method, path, and status")
            .build()
    })
}

/// Middleware counting every completed request.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    request_counter().add(
        1,
        &[
            KeyValue::new("http.method", method),
            KeyValue::new("http.path", path),
            KeyValue::new("http.status", i64::from(response.status().as_u16())),
        ],
    );

    response
}
