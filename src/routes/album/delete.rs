use crate::db::AlbumRepository;
use crate::helpers::{ApiError, JsonResponse};
use crate::middleware::authentication::Claims;
use crate::middleware::authorization::{self, RequirePermission};
use actix_web::{delete, web, HttpResponse};
use std::sync::Arc;

#[tracing::instrument(name = "Delete album.", skip_all)]
#[delete("/{id}", wrap = "RequirePermission::new(authorization::DELETE_ALBUMS)")]
pub async fn delete_handler(
    path: web::Path<(i32,)>,
    claims: web::ReqData<Arc<Claims>>,
    repository: web::Data<Arc<dyn AlbumRepository>>,
) -> Result<HttpResponse, ApiError> {
    let (id,) = path.into_inner();
    if repository.fetch(id).await?.is_none() {
        return Err(ApiError::NotFound);
    }

    // A concurrent delete may have won the race since the fetch.
    if !repository.delete(id).await? {
        return Err(ApiError::NotFound);
    }
    tracing::info!(subject = ?claims.sub, id, "Album deleted");

    Ok(JsonResponse::build().set_item("deleted", id).ok())
}
