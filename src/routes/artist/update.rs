use crate::db::ArtistRepository;
use crate::forms;
use crate::helpers::{ApiError, JsonResponse};
use crate::middleware::authentication::Claims;
use crate::middleware::authorization::{self, RequirePermission};
use actix_web::{patch, web, HttpResponse};
use std::sync::Arc;

#[tracing::instrument(name = "Update artist.", skip_all)]
#[patch("/{id}", wrap = "RequirePermission::new(authorization::PATCH_ARTISTS)")]
pub async fn update_handler(
    path: web::Path<(i32,)>,
    claims: web::ReqData<Arc<Claims>>,
    form: web::Json<forms::ArtistPatch>,
    repository: web::Data<Arc<dyn ArtistRepository>>,
) -> Result<HttpResponse, ApiError> {
    let (id,) = path.into_inner();
    let mut artist = repository.fetch(id).await?.ok_or(ApiError::NotFound)?;

    form.into_inner().update(&mut artist)?;
    tracing::debug!("Updating artist {:?}", artist);

    let artist = repository.update(artist).await?;
    tracing::info!(subject = ?claims.sub, id, "Artist updated");

    Ok(JsonResponse::build().set_item("artist", artist).ok())
}
