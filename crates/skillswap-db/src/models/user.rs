//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table (without the password hash)
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub skills_offered: Vec<String>,
    pub skills_wanted: Vec<String>,
    pub availability: Option<String>,
    pub location: Option<String>,
    pub photo_url: Option<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
