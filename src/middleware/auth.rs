use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage, ResponseError,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::errors::FrontendError;
use crate::middleware::session::Session;

/// Resolves the request's [`Session`] once and stores it in the request
/// extensions. With `required`, requests without a session are answered
/// with 401 before reaching the handler.
pub struct SessionMiddleware {
    required: bool,
}

impl SessionMiddleware {
    pub fn optional() -> Self {
        SessionMiddleware { required: false }
    }

    pub fn required() -> Self {
        SessionMiddleware { required: true }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = SessionMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service,
            required: self.required,
        }))
    }
}

pub struct SessionMiddlewareService<S> {
    service: S,
    required: bool,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
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
        match Session::from_request(req.request()) {
            Some(session) => {
                req.extensions_mut().insert(session);
            }
            None if self.required => {
                log::debug!("Rejecting {} without a session", req.path());
                let response = FrontendError::Unauthorized.error_response();
                return Box::pin(ready(Ok(req.into_response(response).map_into_right_body())));
            }
            None => {}
        }

        let fut = self.service.call(req);
        Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
    }
}
