use super::RequirePermissionMiddleware;
use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use std::future::{ready, Ready};
use std::rc::Rc;

/// Wraps a route so it only runs for tokens that grant `permission`.
///
/// ```ignore
/// #[get("", wrap = "RequirePermission::new(authorization::GET_ALBUMS)")]
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequirePermission {
    permission: &'static str,
}

impl RequirePermission {
    pub fn new(permission: &'static str) -> Self {
        Self { permission }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequirePermission
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequirePermissionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequirePermissionMiddleware {
            service: Rc::new(service),
            permission: self.permission,
        }))
    }
}
