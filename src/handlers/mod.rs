use actix_web::web;

pub mod employee;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/").route(web::post().to(employee::create_employee)),
    )
    .service(
        web::resource("/UpdateEmployee").route(web::put().to(employee::update_employee)),
    );
}
