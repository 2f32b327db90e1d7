use actix_web::{get, HttpResponse, Responder};
use serde_json::json;

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({"status": "healthy", "service": "viewer"}))
}

pub async fn default_route() -> impl Responder {
    HttpResponse::NotFound().body("404 Not Found")
}
