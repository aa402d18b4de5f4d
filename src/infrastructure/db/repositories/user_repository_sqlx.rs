use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::user_repository::{UserRepository, UserRow};
use crate::infrastructure::db::DbPool;

pub struct SqlxUserRepository {
    pub pool: DbPool,
}

impl SqlxUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_row(r: &sqlx::mysql::MySqlRow) -> UserRow {
    UserRow {
        id: r.get("id"),
        username: r.get("username"),
        email: r.get("email"),
        password: r.get("password"),
        role: r.get("role"),
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn list_users(&self) -> anyhow::Result<Vec<UserRow>> {
        let rows = sqlx::query(r#"SELECT * FROM users"#)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(map_row).collect())
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<UserRow>> {
        let row = sqlx::query(r#"SELECT * FROM users WHERE id = ?"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(map_row))
    }

    async fn create_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
        role: &str,
    ) -> anyhow::Result<()> {
        sqlx::query(
            r#"INSERT INTO users (username, email, password, role) VALUES (?, ?, ?, ?)"#,
        )
        .bind(username)
        .bind(email)
        .bind(password)
        .bind(role)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update_user(
        &self,
        id: i64,
        username: &str,
        email: &str,
        password: &str,
        role: &str,
    ) -> anyhow::Result<()> {
        // Affected-row count is deliberately not inspected; an unmatched id
        // still reports success to the caller.
        sqlx::query(
            r#"UPDATE users SET username = ?, email = ?, password = ?, role = ? WHERE id = ?"#,
        )
        .bind(username)
        .bind(email)
        .bind(password)
        .bind(role)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_user(&self, id: i64) -> anyhow::Result<()> {
        sqlx::query(r#"DELETE FROM users WHERE id = ?"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
