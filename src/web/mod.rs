pub mod navigation;
pub mod pages;
pub mod templates;

use axum::{
    Router,
    routing::get,
};
use tower_http::services::ServeDir;

use crate::api::state::AppState;

pub fn create_web_routes(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.settings.site.static_dir);

    Router::new()
        // Public pages
        .route("/", get(pages::home_page))
        .route("/announcements", get(pages::announcements_page))

        // Admin pages
        .route("/admin/announcements", get(pages::admin_announcements_page))

        .nest_service("/static", static_dir)

        .with_state(state)
}
