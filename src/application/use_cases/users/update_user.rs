use crate::application::ports::user_repository::UserRepository;

pub struct UpdateUser<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct UpdateUserInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl<'a, R: UserRepository + ?Sized> UpdateUser<'a, R> {
    // Full overwrite: every mutable column is rewritten from the input.
    pub async fn execute(&self, id: i64, input: &UpdateUserInput) -> anyhow::Result<()> {
        self.repo
            .update_user(id, &input.username, &input.email, &input.password, &input.role)
            .await
    }
}
