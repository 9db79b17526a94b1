//! `PostgreSQL` user directory implementation.

use super::{models::UserRow, schema::users};
use crate::identity::{
    domain::{UserId, UserProfile},
    ports::{DirectoryError, DirectoryResult, UserDirectory},
};
use crate::storage::{PgPool, get_conn_with, run_blocking_with};
use async_trait::async_trait;
use diesel::prelude::*;

/// `PostgreSQL`-backed user directory.
#[derive(Debug, Clone)]
pub struct PostgresUserDirectory {
    pool: PgPool,
}

impl PostgresUserDirectory {
    /// Creates a new directory from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for PostgresUserDirectory {
    async fn find_many(&self, ids: &[UserId]) -> DirectoryResult<Vec<UserProfile>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let pool = self.pool.clone();
        let lookup: Vec<uuid::Uuid> = ids.iter().map(|id| id.into_inner()).collect();
        run_blocking_with(
            move || {
                let mut connection = get_conn_with(&pool, DirectoryError::store_unavailable)?;
                let rows = users::table
                    .filter(users::id.eq_any(lookup))
                    .select(UserRow::as_select())
                    .load::<UserRow>(&mut connection)
                    .map_err(DirectoryError::store_unavailable)?;
                Ok(rows.into_iter().map(row_to_profile).collect())
            },
            DirectoryError::store_unavailable,
        )
        .await
    }
}

fn row_to_profile(row: UserRow) -> UserProfile {
    UserProfile {
        id: UserId::from_uuid(row.id),
        name: row.name,
        last_name: row.last_name,
        email: row.email,
    }
}
