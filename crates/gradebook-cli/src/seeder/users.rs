//! User seeding functionality.
//!
//! Inserts a `users` row per seeded person and the matching row in the
//! role table (`students`, `teachers` or `principals`).

use sqlx::{Postgres, Transaction};

use super::models::UserSeed;

/// Role tables that hang off `users`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleTable {
    Students,
    Teachers,
    Principals,
}

impl RoleTable {
    pub fn table(&self) -> &'static str {
        match self {
            RoleTable::Students => "students",
            RoleTable::Teachers => "teachers",
            RoleTable::Principals => "principals",
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            RoleTable::Students => "student",
            RoleTable::Teachers => "teacher",
            RoleTable::Principals => "principal",
        }
    }
}

pub fn generate_users(role: RoleTable, count: usize) -> Vec<UserSeed> {
    (0..count).map(|i| UserSeed::new(role.prefix(), i)).collect()
}

/// Inserts the users and their role rows, returning the role row ids in order.
pub async fn insert_role_users(
    tx: &mut Transaction<'_, Postgres>,
    role: RoleTable,
    users: &[UserSeed],
) -> Result<Vec<i64>, sqlx::Error> {
    let mut ids = Vec::with_capacity(users.len());
    let role_insert = format!(
        "INSERT INTO {} (user_id) VALUES ($1) RETURNING id",
        role.table()
    );

    for user in users {
        let user_id: i64 =
            sqlx::query_scalar("INSERT INTO users (username, email) VALUES ($1, $2) RETURNING id")
                .bind(&user.username)
                .bind(&user.email)
                .fetch_one(&mut **tx)
                .await?;

        let role_id: i64 = sqlx::query_scalar(&role_insert)
            .bind(user_id)
            .fetch_one(&mut **tx)
            .await?;

        ids.push(role_id);
    }

    Ok(ids)
}
