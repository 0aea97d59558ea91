use crate::db::ArtistRepository;
use crate::forms;
use crate::helpers::{ApiError, JsonResponse};
use crate::middleware::authentication::Claims;
use crate::middleware::authorization::{self, RequirePermission};
use crate::models;
use actix_web::{post, web, HttpResponse};
use std::sync::Arc;

#[tracing::instrument(name = "Add artist.", skip_all)]
#[post("", wrap = "RequirePermission::new(authorization::POST_ARTISTS)")]
pub async fn add_handler(
    claims: web::ReqData<Arc<Claims>>,
    form: web::Json<forms::NewArtist>,
    repository: web::Data<Arc<dyn ArtistRepository>>,
) -> Result<HttpResponse, ApiError> {
    let artist: models::Artist = form.into_inner().try_into()?;
    let artist = repository.insert(artist).await?;
    tracing::info!(subject = ?claims.sub, id = artist.id, "Artist created");

    Ok(JsonResponse::build().set_item("artist", artist).created())
}
