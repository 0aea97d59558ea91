use crate::db::AlbumRepository;
use crate::forms;
use crate::helpers::{ApiError, JsonResponse};
use crate::middleware::authentication::Claims;
use crate::middleware::authorization::{self, RequirePermission};
use crate::models;
use actix_web::{post, web, HttpResponse};
use std::sync::Arc;

#[tracing::instrument(name = "Add album.", skip_all)]
#[post("", wrap = "RequirePermission::new(authorization::POST_ALBUMS)")]
pub async fn add_handler(
    claims: web::ReqData<Arc<Claims>>,
    form: web::Json<forms::NewAlbum>,
    repository: web::Data<Arc<dyn AlbumRepository>>,
) -> Result<HttpResponse, ApiError> {
    let album: models::Album = form.into_inner().try_into()?;
    let album = repository.insert(album).await?;
    tracing::info!(subject = ?claims.sub, id = album.id, "Album created");

    Ok(JsonResponse::build().set_item("album", album).created())
}
