#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Status given to an application right after tailoring.
pub const STATUS_READY: &str = "Ready";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserResumeRow {
    pub id: Uuid,
    pub original_content: String,
    pub file_type: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub company: String,
    pub job_title: String,
    pub job_description: String,
    /// Raw generator fragment; finalized again whenever it is displayed.
    pub tailored_resume: String,
    pub keywords: Vec<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List view of an application; omits the large text columns.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationSummary {
    pub id: Uuid,
    pub company: String,
    pub job_title: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
