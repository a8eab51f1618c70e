pub mod auth;
pub mod bookings;
pub mod health;
pub mod reviews;
pub mod rooms;

use actix_web::web;

use crate::middleware::auth::SessionMiddleware;

/// Every page endpoint, shared by the server binary and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .wrap(SessionMiddleware::optional())
                .service(
                    web::scope("/auth")
                        .route("/login", web::post().to(auth::login))
                        .route("/register", web::post().to(auth::register))
                        .route("/logout", web::post().to(auth::logout))
                        .service(
                            web::scope("")
                                .wrap(SessionMiddleware::required())
                                .route("/session", web::get().to(auth::session)),
                        ),
                )
                .service(
                    web::scope("/rooms")
                        .route("", web::get().to(rooms::list))
                        .route("/featured", web::get().to(rooms::featured))
                        .route("/{id}", web::get().to(rooms::detail))
                        .route("/{id}/quote", web::get().to(rooms::quote))
                        .route("/{id}/reviews", web::get().to(reviews::list))
                        // Protected routes
                        .service(
                            web::scope("")
                                .wrap(SessionMiddleware::required())
                                .route("/{id}/reviews", web::post().to(reviews::create)),
                        ),
                )
                .route("/bookings", web::post().to(bookings::create))
                .route("/checkout", web::get().to(bookings::summary))
                .route("/checkout", web::post().to(bookings::pay))
                .route(
                    "/booking-confirmation",
                    web::get().to(bookings::confirmation),
                ),
        );
}
