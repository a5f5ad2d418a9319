pub mod auth;
pub mod health;
pub mod pages;
pub mod users;

use actix_web::web;

use crate::auth::AuthMiddleware;

/// Mounts the API route groups onto the surrounding scope: `auth` is
/// reachable without a credential, `users` sits behind the bearer-token gate.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(auth::register)
            .service(auth::login),
    )
    .service(
        web::scope("/users")
            .wrap(AuthMiddleware)
            .service(users::list_users)
            .service(users::get_user),
    );
}
