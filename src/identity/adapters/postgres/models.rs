//! Diesel row models for user lookups.

use super::schema::users;
use diesel::prelude::*;

/// Query result row for user display attributes.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// User identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Optional last name.
    pub last_name: Option<String>,
    /// Optional email address.
    pub email: Option<String>,
}
