use axum::http::{
    HeaderValue, Method,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use tower_http::cors::CorsLayer;

const ORIGINS: [HeaderValue; 5] = [
    HeaderValue::from_static("http://localhost:3000"),
    HeaderValue::from_static("http://localhost:5173"),
    HeaderValue::from_static("https://viewer-dev.floorplan.app"),
    HeaderValue::from_static("https://viewer-staging.floorplan.app"),
    HeaderValue::from_static("https://viewer.floorplan.app"),
];

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_credentials(true)
        .allow_headers(vec![AUTHORIZATION, CONTENT_TYPE])
        .allow_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_origin(ORIGINS)
}
