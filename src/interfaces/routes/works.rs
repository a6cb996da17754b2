use actix_web::web;
use crate::handlers::works;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/works")
            .service(
                web::resource("")
                    .route(web::get().to(works::get_all_works))
                    .route(web::post().to(works::create_work))
            )
            .service(
                web::resource("/{work_id}")
                    .route(web::get().to(works::get_work_by_id))
                    .route(web::put().to(works::update_work))
                    .route(web::delete().to(works::delete_work))
            )
    );
}
