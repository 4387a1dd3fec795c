use std::sync::Arc;

use crate::{
    domain::{FileUpload, UploadCompletion},
    error::Result,
    repository::FileUploadRepository,
};

pub struct UploadService {
    repo: Arc<dyn FileUploadRepository>,
}

impl UploadService {
    pub fn new(repo: Arc<dyn FileUploadRepository>) -> Self {
        Self { repo }
    }

    /// Record a file the upload provider has finished storing.
    pub async fn complete(&self, user_id: &str, completion: UploadCompletion) -> Result<FileUpload> {
        let new_upload = completion.resolve(user_id)?;
        let upload = self.repo.create(new_upload).await?;

        tracing::info!(
            "Recorded upload {} ({}, {} bytes) for {}",
            upload.id,
            upload.file_name,
            upload.file_size,
            upload.uploaded_by
        );

        Ok(upload)
    }

    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<FileUpload>> {
        self.repo.list_by_uploader(user_id).await
    }
}
