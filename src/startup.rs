use crate::configuration::Settings;
use crate::db::Repositories;
use crate::helpers::ApiError;
use crate::middleware::authentication::JwtVerifier;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, error, web, App, HttpServer};
use std::net::TcpListener;
use std::time::Duration;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    repositories: Repositories,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let jwks_http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .pool_idle_timeout(Duration::from_secs(90))
        .build()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;

    let verifier = JwtVerifier::from_settings(&settings.auth, jwks_http_client)?;
    let verifier = web::Data::new(verifier);

    let artists = web::Data::new(repositories.artists);
    let albums = web::Data::new(repositories.albums);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!("Rejected JSON payload: {}", err);
        error::Error::from(ApiError::BadRequest)
    });
    let path_config = web::PathConfig::default().error_handler(|err, _req| {
        tracing::debug!("Rejected path: {}", err);
        error::Error::from(ApiError::NotFound)
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(json_config.clone())
            .app_data(path_config.clone())
            .app_data(verifier.clone())
            .app_data(artists.clone())
            .app_data(albums.clone())
            .route("/", web::get().to(routes::welcome))
            .route("/health_check", web::get().to(routes::health_check))
            .service(
                web::scope("/albums")
                    .service(routes::album::list_handler)
                    .service(routes::album::get_handler)
                    .service(routes::album::add_handler)
                    .service(routes::album::update_handler)
                    .service(routes::album::delete_handler)
                    .default_service(web::to(routes::method_not_allowed)),
            )
            .service(
                web::scope("/artists")
                    .service(routes::artist::list_handler)
                    .service(routes::artist::get_handler)
                    .service(routes::artist::add_handler)
                    .service(routes::artist::update_handler)
                    .service(routes::artist::delete_handler)
                    .default_service(web::to(routes::method_not_allowed)),
            )
            .default_service(web::to(routes::not_found))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
