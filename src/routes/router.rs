/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Public API routes (auth, contact, jobs, announcements, health)
 * 2. Admin API routes under `/api/admin`, wrapped by the session guard
 * 3. Static files for the marketing site
 * 4. Fallback handler (404)
 */

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::routes::admin_routes::admin_router;
use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (database pool, mailer)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    // Public API routes
    let router = configure_api_routes(router);

    // Admin API routes behind the session guard
    let router = router.nest("/api/admin", admin_router());

    // Static marketing site assets
    let router = router.nest_service("/static", ServeDir::new("public"));

    // Fallback handler for 404
    let router = router.fallback(|| async { "404 Not Found" });

    router.layer(TraceLayer::new_for_http()).with_state(app_state)
}
