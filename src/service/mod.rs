pub mod announcement_service;
pub mod upload_service;

use std::sync::Arc;
use sqlx::SqlitePool;
use crate::repository::*;
use announcement_service::AnnouncementService;
use upload_service::UploadService;

pub struct ServiceContext {
    pub announcement_service: Arc<AnnouncementService>,
    pub upload_service: Arc<UploadService>,
    pub db_pool: SqlitePool,
}

impl ServiceContext {
    pub fn new(
        announcement_repo: Arc<dyn AnnouncementRepository>,
        upload_repo: Arc<dyn FileUploadRepository>,
        db_pool: SqlitePool,
    ) -> Self {
        let announcement_service = Arc::new(AnnouncementService::new(announcement_repo));
        let upload_service = Arc::new(UploadService::new(upload_repo));

        Self {
            announcement_service,
            upload_service,
            db_pool,
        }
    }

    /// Builds the SQLite-backed repositories and services on one pool.
    pub fn from_pool(db_pool: SqlitePool) -> Self {
        let announcement_repo = Arc::new(SqliteAnnouncementRepository::new(db_pool.clone()));
        let upload_repo = Arc::new(SqliteFileUploadRepository::new(db_pool.clone()));

        Self::new(announcement_repo, upload_repo, db_pool)
    }
}
