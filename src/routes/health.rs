use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::BTreeMap;
use std::env;

use crate::config::AppConfig;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: BTreeMap<&'static str, String>,
    offline_fallback: bool,
    environment: String,
    version: String,
}

/*
    /health
*/
pub async fn health_check(config: web::Data<AppConfig>) -> impl Responder {
    let services = &config.services;

    let health = HealthStatus {
        status: "ok".to_string(),
        services: BTreeMap::from([
            ("rooms", services.rooms.clone()),
            ("bookings", services.bookings.clone()),
            ("payments", services.payments.clone()),
            ("users", services.users.clone()),
            ("reviews", services.reviews.clone()),
        ]),
        offline_fallback: config.offline_fallback,
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    HttpResponse::Ok().json(health)
}
