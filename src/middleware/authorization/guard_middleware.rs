use super::authorize;
use crate::helpers::ApiError;
use crate::middleware::authentication::JwtVerifier;
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse},
    web, Error, HttpMessage,
};
use futures::future::{FutureExt, LocalBoxFuture};
use std::rc::Rc;
use std::sync::Arc;

pub struct RequirePermissionMiddleware<S> {
    pub(super) service: Rc<S>,
    pub(super) permission: &'static str,
}

impl<S, B> Service<ServiceRequest> for RequirePermissionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<ServiceResponse<B>, Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let permission = self.permission;

        async move {
            authorize_request(&req, permission).await?;
            service.call(req).await
        }
        .boxed_local()
    }
}

/// Runs the guard and stores the verified claims on the request.
async fn authorize_request(req: &ServiceRequest, permission: &'static str) -> Result<(), Error> {
    let verifier = req
        .app_data::<web::Data<JwtVerifier>>()
        .cloned()
        .ok_or_else(|| {
            tracing::error!("JwtVerifier is not registered as app data");
            ApiError::Internal
        })?;

    match authorize(&verifier, req.headers(), permission).await {
        Ok(claims) => {
            tracing::debug!(permission, subject = ?claims.sub, "Request authorized");
            req.extensions_mut().insert(Arc::new(claims));
            Ok(())
        }
        Err(err) => {
            tracing::warn!(permission, code = err.code(), "Request rejected: {}", err);
            Err(err.into())
        }
    }
}
