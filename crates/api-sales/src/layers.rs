use http::header::CONTENT_TYPE;
use http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;

#[allow(clippy::needless_pass_by_value, clippy::expect_used)]
pub fn make_cors_middleware(origin: &str) -> CorsLayer {
    #[allow(clippy::expect_fun_call)]
    let origin_value = origin
        .parse::<HeaderValue>()
        .expect(&format!("Failed to parse origin value: {origin}"));
    CorsLayer::new()
        .allow_origin(origin_value)
        .allow_methods(vec![Method::GET, Method::HEAD])
        .allow_headers(vec![CONTENT_TYPE])
}
