use crate::application::ports::user_repository::UserRepository;

pub struct CreateUser<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl<'a, R: UserRepository + ?Sized> CreateUser<'a, R> {
    pub async fn execute(&self, input: &CreateUserInput) -> anyhow::Result<()> {
        self.repo
            .create_user(&input.username, &input.email, &input.password, &input.role)
            .await
    }
}
