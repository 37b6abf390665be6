//! Profile entity model and DTOs.

use gigdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `profiles` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Profile {
    pub id: DbId,
    pub user_id: DbId,
    pub profile_type: String,
    pub first_name: String,
    pub last_name: String,
    pub file: Option<String>,
    pub location: String,
    pub tel: String,
    pub description: String,
    pub working_hours: String,
    pub created_at: Timestamp,
}

/// Profile joined with the owning account's username and email, the shape
/// returned by all profile read endpoints.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProfileWithUser {
    pub id: DbId,
    pub user_id: DbId,
    pub username: String,
    pub email: String,
    pub profile_type: String,
    pub first_name: String,
    pub last_name: String,
    pub file: Option<String>,
    pub location: String,
    pub tel: String,
    pub description: String,
    pub working_hours: String,
    pub created_at: Timestamp,
}

/// DTO for updating a profile. All fields are optional; `profile_type` is
/// deliberately absent (the role is immutable after registration). `email`
/// updates the owning user row in the same transaction.
#[derive(Debug, Deserialize)]
pub struct UpdateProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub file: Option<String>,
    pub location: Option<String>,
    pub tel: Option<String>,
    pub description: Option<String>,
    pub working_hours: Option<String>,
    pub email: Option<String>,
}
