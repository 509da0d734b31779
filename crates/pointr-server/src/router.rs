use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handler::{self, SharedStore};

/// HTTP endpoint paths.
pub mod endpoints {
    pub const ROOT: &str = "/";
    pub const HEALTH: &str = "/health";
    pub const SITES: &str = "/sites";
    pub const SITE: &str = "/sites/:id";
    pub const BUILDINGS: &str = "/buildings";
    pub const BUILDING: &str = "/buildings/:id";
    pub const LEVELS: &str = "/levels";
    pub const LEVEL: &str = "/levels/:id";
}

/// Build the axum router over `store`.
///
/// Methods a path does not list are answered with 405. Levels have no
/// delete route.
pub fn build_router(store: SharedStore) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(handler::root_handler))
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(
            endpoints::SITES,
            get(handler::list_sites).post(handler::create_site),
        )
        .route(
            endpoints::SITE,
            get(handler::get_site).delete(handler::delete_site),
        )
        .route(
            endpoints::BUILDINGS,
            get(handler::list_buildings).post(handler::create_building),
        )
        .route(
            endpoints::BUILDING,
            get(handler::get_building).delete(handler::delete_building),
        )
        .route(
            endpoints::LEVELS,
            get(handler::list_levels).post(handler::create_levels),
        )
        .route(endpoints::LEVEL, get(handler::get_level))
        .fallback(handler::not_found_handler)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Any origin, method, and header; every response header is exposed.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_paths() {
        assert_eq!(endpoints::HEALTH, "/health");
        assert_eq!(endpoints::SITE, "/sites/:id");
        assert_eq!(endpoints::LEVELS, "/levels");
    }
}
