use askama::Template;
use axum::{
    extract::State,
    http::Uri,
    response::IntoResponse,
};

use crate::{
    api::state::AppState,
    domain::Announcement,
    web::templates::{HtmlTemplate, Layout},
};

/// Number of announcements previewed on the home page
const HOME_PREVIEW_COUNT: usize = 3;

/// An announcement formatted for display.
pub struct AnnouncementView {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: String,
    pub iso_date: String,
    pub link: Option<String>,
}

impl From<Announcement> for AnnouncementView {
    fn from(announcement: Announcement) -> Self {
        Self {
            id: announcement.id,
            title: announcement.title,
            description: announcement.description,
            date: announcement.date.format("%B %d, %Y").to_string(),
            iso_date: announcement.date.format("%Y-%m-%d").to_string(),
            link: announcement.link,
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: Layout,
    pub latest: Vec<AnnouncementView>,
}

#[derive(Template)]
#[template(path = "announcements.html")]
pub struct AnnouncementsTemplate {
    pub layout: Layout,
    pub announcements: Vec<AnnouncementView>,
    pub load_failed: bool,
}

#[derive(Template)]
#[template(path = "admin/announcements.html")]
pub struct AdminAnnouncementsTemplate {
    pub layout: Layout,
    pub announcements: Vec<AnnouncementView>,
    pub load_failed: bool,
}

/// Loads announcements for a page. A storage failure is logged and shown
/// as a notice rather than failing the whole page.
async fn load_announcements(state: &AppState) -> (Vec<AnnouncementView>, bool) {
    match state.service_context.announcement_service.list().await {
        Ok(announcements) => (announcements.into_iter().map(AnnouncementView::from).collect(), false),
        Err(e) => {
            tracing::error!("Failed to load announcements for page: {}", e);
            (Vec::new(), true)
        }
    }
}

pub async fn home_page(
    State(state): State<AppState>,
    uri: Uri,
) -> impl IntoResponse {
    let (mut latest, _) = load_announcements(&state).await;
    latest.truncate(HOME_PREVIEW_COUNT);

    HtmlTemplate(HomeTemplate {
        layout: Layout::for_path(&state.settings.site.name, uri.path()),
        latest,
    })
}

pub async fn announcements_page(
    State(state): State<AppState>,
    uri: Uri,
) -> impl IntoResponse {
    let (announcements, load_failed) = load_announcements(&state).await;

    HtmlTemplate(AnnouncementsTemplate {
        layout: Layout::for_path(&state.settings.site.name, uri.path()),
        announcements,
        load_failed,
    })
}

pub async fn admin_announcements_page(
    State(state): State<AppState>,
    uri: Uri,
) -> impl IntoResponse {
    let (announcements, load_failed) = load_announcements(&state).await;

    HtmlTemplate(AdminAnnouncementsTemplate {
        layout: Layout::for_path(&state.settings.site.name, uri.path()),
        announcements,
        load_failed,
    })
}
