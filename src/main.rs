use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use log::info;

use face_registry::api::{delete_user, info as api_info, list_users, register_face, user_images};
use face_registry::app_state::AppState;
use face_registry::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = AppConfig::load().expect("Failed to load configuration");
    log4rs::init_file(&config.logging.config_file, Default::default())
        .expect("Failed to initialize logging");

    info!(
        "Starting server on {}:{}",
        config.server.host, config.server.port
    );

    let app_state = AppState::from_config(config.clone());
    let max_payload_size = config.server.max_payload_size;

    HttpServer::new(move || {
        // Browser frontends call this API from other origins; any origin,
        // method, and header is accepted.
        App::new()
            .wrap(Cors::permissive())
            .wrap(actix_web::middleware::Logger::default())
            .app_data(web::PayloadConfig::default().limit(max_payload_size))
            .app_data(web::Data::new(app_state.clone()))
            .service(register_face)
            .service(delete_user)
            .service(list_users)
            .service(user_images)
            .service(api_info)
    })
    .workers(config.server.workers)
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
