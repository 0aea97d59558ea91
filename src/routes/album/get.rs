use crate::db::AlbumRepository;
use crate::helpers::{ApiError, JsonResponse};
use crate::middleware::authorization::{self, RequirePermission};
use actix_web::{get, web, HttpResponse};
use std::sync::Arc;

#[tracing::instrument(name = "List albums.", skip_all)]
#[get("", wrap = "RequirePermission::new(authorization::GET_ALBUMS)")]
pub async fn list_handler(
    repository: web::Data<Arc<dyn AlbumRepository>>,
) -> Result<HttpResponse, ApiError> {
    let albums = repository.list().await?;

    Ok(JsonResponse::build().set_item("albums", albums).ok())
}

#[tracing::instrument(name = "Get album.", skip_all)]
#[get("/{id}", wrap = "RequirePermission::new(authorization::GET_ALBUMS)")]
pub async fn get_handler(
    path: web::Path<(i32,)>,
    repository: web::Data<Arc<dyn AlbumRepository>>,
) -> Result<HttpResponse, ApiError> {
    let (id,) = path.into_inner();

    repository
        .fetch(id)
        .await?
        .map(|album| JsonResponse::build().set_item("album", album).ok())
        .ok_or(ApiError::NotFound)
}
