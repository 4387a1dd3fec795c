use askama::Template;
use axum::{
    response::{Html, IntoResponse, Response},
    http::StatusCode,
};

use crate::web::navigation::{NavVisibility, SidebarLink, SIDEBAR_LINKS};

/// Data every page hands to `base.html`.
#[derive(Debug, Clone)]
pub struct Layout {
    pub site_name: String,
    pub show_top_nav: bool,
    pub show_footer: bool,
    pub sidebar_links: &'static [SidebarLink],
}

impl Layout {
    pub fn for_path(site_name: &str, path: &str) -> Self {
        let visibility = NavVisibility::for_path(path);
        Self {
            site_name: site_name.to_string(),
            show_top_nav: visibility.show_top_nav,
            show_footer: visibility.show_footer,
            sidebar_links: SIDEBAR_LINKS,
        }
    }
}

// Make askama templates work with axum
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("Failed to render template: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template: {}", err),
                ).into_response()
            }
        }
    }
}
