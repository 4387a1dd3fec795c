use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;

pub type AnnouncementId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: AnnouncementId,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub link: Option<String>,
}

/// Body of a create request as it arrives over the wire. Every field is
/// optional here so that missing fields surface as a validation error
/// instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAnnouncementRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// A create request that passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAnnouncement {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub link: Option<String>,
}

impl CreateAnnouncementRequest {
    pub fn validate(self) -> Result<NewAnnouncement, ValidationError> {
        let title = required(self.title)?;
        let description = required(self.description)?;
        let raw_date = required(self.date)?;

        let date = parse_announcement_date(&raw_date).ok_or(ValidationError::InvalidDate)?;

        Ok(NewAnnouncement {
            title,
            description,
            date,
            link: self.link.filter(|l| !l.trim().is_empty()),
        })
    }
}

fn required(value: Option<String>) -> Result<String, ValidationError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(ValidationError::MissingFields)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteAnnouncementRequest {
    #[serde(default)]
    pub id: Option<Value>,
}

impl DeleteAnnouncementRequest {
    /// Accepts any non-zero integer id, as a JSON number (integral floats
    /// included) or a numeric string. Absent, null, zero, empty and
    /// non-numeric values count as a missing id. Ids that match no record
    /// are left to the idempotent delete.
    pub fn validate(&self) -> Result<AnnouncementId, ValidationError> {
        let id = match self.id.as_ref() {
            Some(Value::Number(n)) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
            _ => None,
        };

        id.filter(|id| *id != 0).ok_or(ValidationError::MissingId)
    }
}

/// Parses the date of an announcement.
///
/// Accepts `YYYY-MM-DD` (normalized to midnight UTC), RFC 3339 timestamps,
/// and offset-less `YYYY-MM-DDTHH:MM[:SS]` which is read as UTC. Years must
/// fall within 0000-9999.
pub fn parse_announcement_date(input: &str) -> Option<DateTime<Utc>> {
    parse_any_date(input.trim()).filter(is_storable)
}

fn parse_any_date(input: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(DateTime::from_naive_utc_and_offset(naive, Utc));
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

/// Dates are stored as text and ordered lexically, which only holds for
/// four-digit, unsigned years.
fn is_storable(date: &DateTime<Utc>) -> bool {
    (0..=9999).contains(&date.year())
}
