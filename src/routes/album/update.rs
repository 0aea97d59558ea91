use crate::db::AlbumRepository;
use crate::forms;
use crate::helpers::{ApiError, JsonResponse};
use crate::middleware::authentication::Claims;
use crate::middleware::authorization::{self, RequirePermission};
use actix_web::{patch, web, HttpResponse};
use std::sync::Arc;

#[tracing::instrument(name = "Update album.", skip_all)]
#[patch("/{id}", wrap = "RequirePermission::new(authorization::PATCH_ALBUMS)")]
pub async fn update_handler(
    path: web::Path<(i32,)>,
    claims: web::ReqData<Arc<Claims>>,
    form: web::Json<forms::AlbumPatch>,
    repository: web::Data<Arc<dyn AlbumRepository>>,
) -> Result<HttpResponse, ApiError> {
    let (id,) = path.into_inner();
    let mut album = repository.fetch(id).await?.ok_or(ApiError::NotFound)?;

    form.into_inner().update(&mut album)?;
    tracing::debug!("Updating album {:?}", album);

    let album = repository.update(album).await?;
    tracing::info!(subject = ?claims.sub, id, "Album updated");

    Ok(JsonResponse::build().set_item("album", album).ok())
}
