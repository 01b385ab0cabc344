//! Repository for the `users` table.
//!
//! The discovery engine only ever reads users: once per owner-scoped
//! request to verify the scope exists, and through the owner join.

use sqlx::PgPool;
use vidtube_core::types::DbId;

use crate::models::user::User;

const COLUMNS: &str = "id, username, email, full_name, avatar_url, created_at, updated_at";

/// Provides read operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
