//! Server-rendered pages. The markup lives in the `forgekit-web` crate; these
//! handlers only hand the rendered documents to actix.

use actix_web::{get, http::header::ContentType, HttpResponse, Responder};

/// Landing page, wrapped in the shared layout shell.
#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(forgekit_web::home_page())
}

/// Starter page for the users area. The page itself is public; the data
/// behind `/api/users` is not.
#[get("/users")]
pub async fn users() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(forgekit_web::users_page())
}
