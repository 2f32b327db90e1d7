use crate::utils::logging::Logger;
use actix_web::{get, web, HttpResponse, Responder, Scope};
use chrono::{DateTime, Local};
use uuid::Uuid;

pub fn initialize() -> Scope {
    web::scope("/log")
        .service(system_log)
        .service(system_log_since)
        .service(session_log)
}

#[get("/system_log")]
async fn system_log() -> impl Responder {
    let system_log = Logger::get_system_logs().await
        .into_iter().map(|log| log.to_plain_string()).collect::<Vec<String>>();
    HttpResponse::Ok().json(web::Json(system_log))
}

#[get("/system_log/since/{since}")]
async fn system_log_since(since: web::Path<String>) -> impl Responder {
    match parse_datetime(&since.into_inner()) {
        Ok(since_time) => {
            let logs = Logger::get_system_logs_since(since_time).await
                .into_iter().map(|log| log.to_plain_string()).collect::<Vec<String>>();
            HttpResponse::Ok().json(web::Json(logs))
        }
        Err(_) => HttpResponse::BadRequest().body("Invalid datetime format."),
    }
}

#[get("/session/{session_id}")]
async fn session_log(session_id: web::Path<Uuid>) -> impl Responder {
    match Logger::get_session_logs(session_id.into_inner()).await {
        Some(session_log) => {
            let session_log = session_log
                .into_iter().map(|log| log.to_plain_string()).collect::<Vec<String>>();
            HttpResponse::Ok().json(web::Json(session_log))
        }
        None => HttpResponse::NotFound().body("Session log not found."),
    }
}

fn parse_datetime(datetime_str: &str) -> Result<DateTime<Local>, String> {
    DateTime::parse_from_rfc3339(datetime_str)
        .map_err(|_| "Invalid datetime format".to_string())
        .map(|datetime| datetime.with_timezone(&Local))
}
