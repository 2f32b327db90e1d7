pub mod api;

use crate::web::api::{config, default, location, log, session};
use actix_web::web::{self, ServiceConfig};

pub fn configure(service_config: &mut ServiceConfig) {
    service_config
        .service(config::initialize())
        .service(location::initialize())
        .service(log::initialize())
        .service(session::initialize())
        .service(default::health)
        .default_service(web::route().to(default::default_route));
}
