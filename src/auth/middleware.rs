use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::ResponseError,
    Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::auth::token::verify_token;
use crate::error::AppError;

/// Bearer-token gate for protected route groups.
///
/// Wrap a scope with this middleware and every request to it must carry
/// `Authorization: Bearer <token>` with a verifiable token. On success the
/// decoded [`Claims`](crate::auth::Claims) are inserted into request
/// extensions for [`AuthenticatedUser`](crate::auth::AuthenticatedUser) to
/// pick up; otherwise the request is answered with 401 without reaching the
/// inner service.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let token = req
            .headers()
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        let rejection = match token {
            Some(token) => match verify_token(token) {
                Ok(claims) => {
                    req.extensions_mut().insert(claims);
                    let fut = self.service.call(req);
                    return Box::pin(
                        async move { fut.await.map(ServiceResponse::map_into_left_body) },
                    );
                }
                Err(err) => err,
            },
            None => AppError::Unauthorized("Missing bearer token".into()),
        };

        let (req, _payload) = req.into_parts();
        let response = rejection.error_response().map_into_right_body();
        Box::pin(ready(Ok(ServiceResponse::new(req, response))))
    }
}
