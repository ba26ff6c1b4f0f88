use actix_cors::Cors;
use actix_web::http::header;

/// "*" permits any origin, which is what the hosted frontends expect;
/// a concrete origin additionally allows credentials.
pub fn middleware(origin: &str) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .max_age(3600);

    if origin == "*" {
        cors.allow_any_origin()
    } else {
        cors.allowed_origin(origin).supports_credentials()
    }
}
