use actix_web::web;

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;

/// Route table, shared by the server binary and the test suite.
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::pages::home))
        .route("/dashboard", web::get().to(handlers::pages::dashboard))
        .service(
            web::scope("/rooms")
                .route("", web::get().to(handlers::rooms::get_rooms))
                .route("/{id}", web::get().to(handlers::rooms::get_room_details)),
        )
        .service(
            web::scope("/search")
                .route("/room", web::get().to(handlers::search::room_search_form))
                .route("/room", web::post().to(handlers::search::search_rooms))
                .route("/booking", web::get().to(handlers::search::search_bookings)),
        )
        .service(
            web::scope("/bookings")
                .route("", web::post().to(handlers::bookings::create_booking))
                .route("/{id}", web::get().to(handlers::bookings::get_booking))
                .route("/{id}", web::put().to(handlers::bookings::edit_booking))
                .route("/{id}", web::delete().to(handlers::bookings::cancel_booking)),
        );
}
