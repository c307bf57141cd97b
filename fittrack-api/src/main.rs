use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use log::info;

use fittrack_api::{config::Config, routes};
use fittrack_client::Client;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    log4rs::init_file("log4rs.yml", Default::default()).unwrap();

    let config = Config::from_env();

    info!("Creating upstream API client");
    let client: Arc<dyn Client> = Arc::new(fittrack_client::create(
        config.exercise_api_url.clone(),
        config.exercise_api_key.clone(),
    ));

    info!("Starting server on port {}", config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(web::Data::from(client.clone()))
            .service(routes::calculator)
            .service(routes::exercises)
            .service(routes::nutrition)
            .service(routes::health)
            .default_service(web::route().to(routes::not_found))
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}
