use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list_users(&self) -> anyhow::Result<Vec<UserRow>>;
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<UserRow>>;
    async fn create_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
        role: &str,
    ) -> anyhow::Result<()>;
    async fn update_user(
        &self,
        id: i64,
        username: &str,
        email: &str,
        password: &str,
        role: &str,
    ) -> anyhow::Result<()>;
    async fn delete_user(&self, id: i64) -> anyhow::Result<()>;
}
