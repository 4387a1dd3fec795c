pub mod handlers;
pub mod middleware;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

use state::AppState;

pub fn create_app(app_state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(handlers::root::health_check))
        .route("/api", get(handlers::root::api_info))

        // API routes
        .nest("/api", api_routes(app_state.clone()))

        // Add state to the router
        .with_state(app_state)

        // Middleware
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Announcement management is open to anyone who can reach it; any
        // access control is expected in front of this service.
        .route(
            "/announcements",
            get(handlers::announcements::list)
                .post(handlers::announcements::create)
                .delete(handlers::announcements::delete),
        )
        .merge(upload_routes(state))
}

fn upload_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/uploads", get(handlers::uploads::list_mine))
        .route("/uploads/complete", post(handlers::uploads::complete))
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            middleware::auth::require_user,
        ))
}
