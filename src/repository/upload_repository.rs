use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use crate::{
    domain::{FileUpload, NewFileUpload, UploadStatus},
    error::{AppError, Result},
    repository::FileUploadRepository,
};

#[derive(FromRow)]
struct FileUploadRow {
    id: i64,
    file_name: String,
    file_size: i64,
    mime_type: String,
    file_url: String,
    uploaded_by: String,
    status: String,
    full_name: String,
    address: String,
    document_type: String,
    purpose: String,
    request_type: String,
    email: Option<String>,
    phone: Option<String>,
    created_at: NaiveDateTime,
}

pub struct SqliteFileUploadRepository {
    pool: SqlitePool,
}

impl SqliteFileUploadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_upload(row: FileUploadRow) -> Result<FileUpload> {
        let status = UploadStatus::from_str(&row.status)
            .ok_or_else(|| AppError::Database(format!("Invalid upload status: {}", row.status)))?;

        Ok(FileUpload {
            id: row.id,
            file_name: row.file_name,
            file_size: row.file_size,
            mime_type: row.mime_type,
            file_url: row.file_url,
            uploaded_by: row.uploaded_by,
            status,
            full_name: row.full_name,
            address: row.address,
            document_type: row.document_type,
            purpose: row.purpose,
            request_type: row.request_type,
            email: row.email,
            phone: row.phone,
            created_at: DateTime::from_naive_utc_and_offset(row.created_at, Utc),
        })
    }
}

#[async_trait]
impl FileUploadRepository for SqliteFileUploadRepository {
    async fn create(&self, upload: NewFileUpload) -> Result<FileUpload> {
        let now = Utc::now().naive_utc();

        let row = sqlx::query_as::<_, FileUploadRow>(
            r#"
            INSERT INTO file_uploads (
                file_name, file_size, mime_type, file_url, uploaded_by, status,
                full_name, address, document_type, purpose, request_type,
                email, phone, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, file_name, file_size, mime_type, file_url, uploaded_by, status,
                      full_name, address, document_type, purpose, request_type,
                      email, phone, created_at
            "#
        )
        .bind(&upload.file_name)
        .bind(upload.file_size)
        .bind(&upload.mime_type)
        .bind(&upload.file_url)
        .bind(&upload.uploaded_by)
        .bind(upload.status.as_str())
        .bind(&upload.full_name)
        .bind(&upload.address)
        .bind(&upload.document_type)
        .bind(&upload.purpose)
        .bind(&upload.request_type)
        .bind(&upload.email)
        .bind(&upload.phone)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Self::row_to_upload(row)
    }

    async fn list_by_uploader(&self, uploaded_by: &str) -> Result<Vec<FileUpload>> {
        let rows = sqlx::query_as::<_, FileUploadRow>(
            r#"
            SELECT id, file_name, file_size, mime_type, file_url, uploaded_by, status,
                   full_name, address, document_type, purpose, request_type,
                   email, phone, created_at
            FROM file_uploads
            WHERE uploaded_by = ?
            ORDER BY created_at DESC, id DESC
            "#
        )
        .bind(uploaded_by)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        rows.into_iter()
            .map(Self::row_to_upload)
            .collect()
    }
}
