use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Derived statically from the handler annotations; serving it never touches
/// the database.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::users::list_users,
        crate::presentation::http::users::get_user,
        crate::presentation::http::users::create_user,
        crate::presentation::http::users::update_user,
        crate::presentation::http::users::delete_user,
        crate::presentation::http::health::health,
    ),
    components(schemas(
        crate::presentation::http::users::User,
        crate::presentation::http::users::CreateUserRequest,
        crate::presentation::http::users::UpdateUserRequest,
        crate::presentation::http::users::MessageResponse,
        crate::presentation::http::users::ErrorResponse,
        crate::presentation::http::health::HealthResp,
    )),
    tags(
        (name = "Users", description = "User management"),
        (name = "Health", description = "System health checks")
    )
)]
pub struct ApiDoc;

pub fn routes() -> Router {
    Router::new().merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    #[tokio::test]
    async fn openapi_document_lists_every_route() {
        // No repository or pool is wired at all: the document must be
        // servable with the store down.
        let app = super::routes();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let doc: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(doc["openapi"], "3.0.3");
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/users"));
        assert!(paths.contains_key("/users/{id}"));
        assert!(paths.contains_key("/health"));
        assert!(paths["/users"]["get"].is_object());
        assert!(paths["/users"]["post"].is_object());
        assert!(paths["/users/{id}"]["put"].is_object());
        assert!(paths["/users/{id}"]["delete"].is_object());
    }
}
