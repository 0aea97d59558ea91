use crate::db::ArtistRepository;
use crate::helpers::{ApiError, JsonResponse};
use crate::middleware::authorization::{self, RequirePermission};
use actix_web::{get, web, HttpResponse};
use std::sync::Arc;

#[tracing::instrument(name = "List artists.", skip_all)]
#[get("", wrap = "RequirePermission::new(authorization::GET_ARTISTS)")]
pub async fn list_handler(
    repository: web::Data<Arc<dyn ArtistRepository>>,
) -> Result<HttpResponse, ApiError> {
    let artists = repository.list().await?;

    Ok(JsonResponse::build().set_item("artists", artists).ok())
}

#[tracing::instrument(name = "Get artist.", skip_all)]
#[get("/{id}", wrap = "RequirePermission::new(authorization::GET_ARTISTS)")]
pub async fn get_handler(
    path: web::Path<(i32,)>,
    repository: web::Data<Arc<dyn ArtistRepository>>,
) -> Result<HttpResponse, ApiError> {
    let (id,) = path.into_inner();

    repository
        .fetch(id)
        .await?
        .map(|artist| JsonResponse::build().set_item("artist", artist).ok())
        .ok_or(ApiError::NotFound)
}
