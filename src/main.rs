use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use hotel_booking_web::config::AppConfig;
use hotel_booking_web::routes;
use hotel_booking_web::services::upstream::{http::HttpUpstream, Upstreams};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();
    log::info!("Upstream services: {:?}", config.services);
    if config.offline_fallback {
        log::info!("Offline fallback enabled, read views degrade to sample data");
    }

    let client = HttpUpstream::new(&config)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    let upstreams = Upstreams::from_http(client);

    let bind = (config.host.clone(), config.port);
    log::info!("Attempting to bind to {}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .supports_credentials()
                    .max_age(3600),
            )
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(upstreams.clone()))
            .configure(routes::configure)
    })
    .bind(bind)?
    .run()
    .await
}
