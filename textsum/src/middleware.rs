/// Browsers only ever send JSON bodies to this service.
pub fn cors() -> warp::cors::Builder {
    warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["Content-Type", "Accept"])
        .allow_methods(vec!["POST", "GET", "OPTIONS"])
}
