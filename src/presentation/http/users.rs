use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::application::ports::user_repository::UserRow;
use crate::application::use_cases::users::create_user::{CreateUser, CreateUserInput};
use crate::application::use_cases::users::delete_user::DeleteUser;
use crate::application::use_cases::users::get_user::GetUser;
use crate::application::use_cases::users::list_users::ListUsers;
use crate::application::use_cases::users::update_user::{UpdateUser, UpdateUserInput};
use crate::bootstrap::app_context::AppContext;

#[derive(Debug, Serialize, ToSchema)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User {
            id: r.id,
            username: r.username,
            email: r.email,
            password: r.password,
            role: r.role,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Total mapping from store outcomes to HTTP responses. Message strings are
/// the whole client-visible surface; underlying errors are logged at the
/// handler and never attached.
#[derive(Debug, Error)]
pub enum UsersApiError {
    #[error("Error getting users")]
    ListFailed,
    #[error("User not found")]
    NotFound,
    #[error("Error getting user")]
    GetFailed,
    #[error("Error creating user")]
    CreateFailed,
    #[error("Error updating user")]
    UpdateFailed,
    #[error("Error deleting user")]
    DeleteFailed,
}

impl UsersApiError {
    fn status(&self) -> StatusCode {
        match self {
            UsersApiError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for UsersApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[utoipa::path(get, path = "/users", tag = "Users",
    responses(
        (status = 200, description = "All registered users", body = [User]),
        (status = 500, description = "Server error", body = ErrorResponse)))]
pub async fn list_users(State(ctx): State<AppContext>) -> Result<Json<Vec<User>>, UsersApiError> {
    let repo = ctx.user_repo();
    let uc = ListUsers {
        repo: repo.as_ref(),
    };
    let rows = uc.execute().await.map_err(|e| {
        tracing::error!(error = ?e, "listing users failed");
        UsersApiError::ListFailed
    })?;
    Ok(Json(rows.into_iter().map(User::from).collect()))
}

#[utoipa::path(get, path = "/users/{id}", tag = "Users",
    params(("id" = i64, Path, description = "ID of the user to get")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)))]
pub async fn get_user(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> Result<Json<User>, UsersApiError> {
    let repo = ctx.user_repo();
    let uc = GetUser {
        repo: repo.as_ref(),
    };
    let row = uc
        .execute(id)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, id, "fetching user failed");
            UsersApiError::GetFailed
        })?
        .ok_or(UsersApiError::NotFound)?;
    Ok(Json(row.into()))
}

#[utoipa::path(post, path = "/users", tag = "Users", request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = MessageResponse),
        (status = 500, description = "Server error", body = ErrorResponse)))]
pub async fn create_user(
    State(ctx): State<AppContext>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), UsersApiError> {
    let repo = ctx.user_repo();
    let uc = CreateUser {
        repo: repo.as_ref(),
    };
    let input = CreateUserInput {
        username: req.username,
        email: req.email,
        password: req.password,
        role: req.role,
    };
    uc.execute(&input).await.map_err(|e| {
        tracing::error!(error = ?e, "creating user failed");
        UsersApiError::CreateFailed
    })?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created successfully",
        }),
    ))
}

#[utoipa::path(put, path = "/users/{id}", tag = "Users", request_body = UpdateUserRequest,
    params(("id" = i64, Path, description = "ID of the user to update")),
    responses(
        (status = 200, description = "User updated successfully", body = MessageResponse),
        (status = 500, description = "Server error", body = ErrorResponse)))]
pub async fn update_user(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<MessageResponse>, UsersApiError> {
    let repo = ctx.user_repo();
    let uc = UpdateUser {
        repo: repo.as_ref(),
    };
    let input = UpdateUserInput {
        username: req.username,
        email: req.email,
        password: req.password,
        role: req.role,
    };
    uc.execute(id, &input).await.map_err(|e| {
        tracing::error!(error = ?e, id, "updating user failed");
        UsersApiError::UpdateFailed
    })?;
    Ok(Json(MessageResponse {
        message: "User updated successfully",
    }))
}

#[utoipa::path(delete, path = "/users/{id}", tag = "Users",
    params(("id" = i64, Path, description = "ID of the user to delete")),
    responses(
        (status = 200, description = "User deleted successfully", body = MessageResponse),
        (status = 500, description = "Server error", body = ErrorResponse)))]
pub async fn delete_user(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, UsersApiError> {
    let repo = ctx.user_repo();
    let uc = DeleteUser {
        repo: repo.as_ref(),
    };
    uc.execute(id).await.map_err(|e| {
        tracing::error!(error = ?e, id, "deleting user failed");
        UsersApiError::DeleteFailed
    })?;
    Ok(Json(MessageResponse {
        message: "User deleted successfully",
    }))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(ctx)
}
