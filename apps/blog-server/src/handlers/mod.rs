//! HTTP handlers and route configuration.

mod health;
mod pages;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(posts::index))
        .route("/post/{id}", web::get().to(posts::detail))
        .route("/new-post", web::get().to(posts::new_post_form))
        .route("/new-post", web::post().to(posts::create_post))
        .route("/edit-post/{id}", web::get().to(posts::edit_post_form))
        .route("/edit-post/{id}", web::post().to(posts::edit_post))
        .route("/about", web::get().to(pages::about))
        .route("/contact", web::get().to(pages::contact))
        .route("/health", web::get().to(health::health_check));
}
