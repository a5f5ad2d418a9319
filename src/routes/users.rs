use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::{User, UserQuery},
};
use actix_web::{get, web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// List users.
///
/// Requires a valid bearer token. Supports an optional `search` query
/// parameter matched case-insensitively against usernames and emails.
/// Results are ordered by id.
///
/// ## Responses:
/// - `200 OK`: JSON array of users.
/// - `401 Unauthorized`: missing or invalid token.
/// - `422 Unprocessable Entity`: oversized search term.
#[get("")]
pub async fn list_users(
    pool: web::Data<PgPool>,
    query: web::Query<UserQuery>,
    _user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    query.validate()?;

    let users = match &query.search {
        Some(term) => {
            sqlx::query_as::<_, User>(
                "SELECT id, username, email, created_at FROM users \
                 WHERE username ILIKE $1 OR email ILIKE $1 \
                 ORDER BY id",
            )
            .bind(format!("%{}%", term))
            .fetch_all(&**pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, User>("SELECT id, username, email, created_at FROM users ORDER BY id")
                .fetch_all(&**pool)
                .await?
        }
    };

    Ok(HttpResponse::Ok().json(users))
}

/// Fetch a single user by id.
///
/// ## Responses:
/// - `200 OK`: the user as JSON.
/// - `401 Unauthorized`: missing or invalid token.
/// - `404 Not Found`: no user with that id.
#[get("/{id}")]
pub async fn get_user(
    pool: web::Data<PgPool>,
    user_id: web::Path<i32>,
    _user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let user =
        sqlx::query_as::<_, User>("SELECT id, username, email, created_at FROM users WHERE id = $1")
            .bind(user_id.into_inner())
            .fetch_optional(&**pool)
            .await?;

    match user {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => Err(AppError::NotFound("User not found".into())),
    }
}
