use crate::management::session_manager::SessionManager;
use crate::management::utils::location::LocationStatus;
use crate::utils::config::Config;
use actix_web::{get, web, HttpResponse, Responder, Scope};
use tokio::sync::RwLock;

pub fn initialize() -> Scope {
    web::scope("/location")
        .service(location_list)
}

#[get("/list")]
async fn location_list(manager: web::Data<RwLock<SessionManager>>) -> impl Responder {
    let config = Config::now().await;
    let manager = manager.read().await;
    let mut locations = Vec::with_capacity(config.locations.len());
    for location in config.locations {
        let session = manager.information(&location.id).await;
        locations.push(LocationStatus { location, session });
    }
    HttpResponse::Ok().json(web::Json(locations))
}
