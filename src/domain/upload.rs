use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Largest image the upload provider accepts (4 MB)
pub const MAX_IMAGE_BYTES: u64 = 4 * 1024 * 1024;

/// Largest PDF the upload provider accepts (8 MB)
pub const MAX_PDF_BYTES: u64 = 8 * 1024 * 1024;

/// Every upload recorded through the callback is a document request.
pub const REQUEST_TYPE_DOCUMENT: &str = "document";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Pdf,
}

impl FileKind {
    pub fn from_mime(mime_type: &str) -> Option<Self> {
        let mime_type = mime_type.trim().to_ascii_lowercase();
        if mime_type == "application/pdf" {
            Some(FileKind::Pdf)
        } else if mime_type.starts_with("image/") {
            Some(FileKind::Image)
        } else {
            None
        }
    }

    pub fn max_bytes(self) -> u64 {
        match self {
            FileKind::Image => MAX_IMAGE_BYTES,
            FileKind::Pdf => MAX_PDF_BYTES,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FileKind::Image => "image",
            FileKind::Pdf => "pdf",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Pending,
    #[default]
    Approved,
    Rejected,
}

impl UploadStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UploadStatus::Pending => "pending",
            UploadStatus::Approved => "approved",
            UploadStatus::Rejected => "rejected",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(UploadStatus::Pending),
            "approved" => Some(UploadStatus::Approved),
            "rejected" => Some(UploadStatus::Rejected),
            _ => None,
        }
    }
}

/// The stored file as reported by the upload provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadedFile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(rename = "type", default)]
    pub mime_type: String,
    #[serde(default)]
    pub url: String,
}

/// Request metadata the client attached to the upload. Anything else the
/// client sends, `requestType` included, is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadMetadata {
    pub full_name: Option<String>,
    pub address: Option<String>,
    pub document_type: Option<String>,
    pub purpose: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<UploadStatus>,
}

/// Callback payload sent by the upload provider once a file is stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadCompletion {
    pub file: UploadedFile,
    #[serde(default)]
    pub metadata: UploadMetadata,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewFileUpload {
    pub file_name: String,
    pub file_size: i64,
    pub mime_type: String,
    pub file_url: String,
    pub uploaded_by: String,
    pub status: UploadStatus,
    pub full_name: String,
    pub address: String,
    pub document_type: String,
    pub purpose: String,
    pub request_type: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUpload {
    pub id: i64,
    pub file_name: String,
    pub file_size: i64,
    pub mime_type: String,
    pub file_url: String,
    pub uploaded_by: String,
    pub status: UploadStatus,
    pub full_name: String,
    pub address: String,
    pub document_type: String,
    pub purpose: String,
    pub request_type: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UploadCompletion {
    /// Checks the file against the provider's limits and fills in every
    /// metadata default, producing a record ready to persist.
    pub fn resolve(self, uploaded_by: &str) -> Result<NewFileUpload, ValidationError> {
        let UploadCompletion { file, metadata } = self;

        if file.name.trim().is_empty() {
            return Err(ValidationError::MissingFileField("name"));
        }
        if file.url.trim().is_empty() {
            return Err(ValidationError::MissingFileField("url"));
        }

        let kind = FileKind::from_mime(&file.mime_type)
            .ok_or_else(|| ValidationError::UnsupportedFileType(file.mime_type.clone()))?;

        if file.size > kind.max_bytes() {
            return Err(ValidationError::FileTooLarge {
                kind: kind.as_str(),
                max_mb: kind.max_bytes() / (1024 * 1024),
            });
        }

        let document_type = non_blank(metadata.document_type).unwrap_or_else(|| file.name.clone());

        Ok(NewFileUpload {
            file_size: file.size as i64,
            mime_type: file.mime_type,
            file_url: file.url,
            uploaded_by: uploaded_by.to_string(),
            status: metadata.status.unwrap_or_default(),
            full_name: non_blank(metadata.full_name).unwrap_or_default(),
            address: non_blank(metadata.address).unwrap_or_default(),
            document_type,
            purpose: non_blank(metadata.purpose).unwrap_or_default(),
            request_type: REQUEST_TYPE_DOCUMENT.to_string(),
            email: non_blank(metadata.email),
            phone: non_blank(metadata.phone),
            file_name: file.name,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
