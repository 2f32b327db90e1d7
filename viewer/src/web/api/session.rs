use crate::management::session_manager::{SessionManager, SharedSession};
use crate::utils::config::Config;
use crate::utils::logging::*;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{get, post, web, HttpResponse, Responder, Scope};
use analytics::aggregation::aggregator;
use analytics::aggregation::traffic_count::TrafficCount;
use analytics::detection::detection::Detection;
use analytics::detection::raw_prediction::RawPrediction;
use analytics::session::detection_session::DetectionSession;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

pub fn initialize() -> Scope {
    web::scope("/session")
        .service(session_list)
        .service(select_session)
        .service(record_frame)
        .service(clear_history)
        .service(discard_session)
        .service(series)
        .service(summary)
        .service(export_csv)
        .service(export_json)
}

#[derive(Deserialize, Debug)]
pub struct FramePayload {
    pub timestamp: f64, //seconds
    #[serde(default)]
    pub predictions: Vec<RawPrediction>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct FrameResponse {
    pub detections: Vec<Detection>,
    pub counts: TrafficCount,
}

#[derive(Deserialize, Debug)]
struct SeriesQuery {
    start: Option<f64>,
    end: Option<f64>,
    bucket_width: Option<f64>,
}

#[derive(Deserialize, Debug)]
struct WidthQuery {
    bucket_width: Option<f64>,
}

#[get("/list")]
async fn session_list(manager: web::Data<RwLock<SessionManager>>) -> impl Responder {
    let sessions = manager.read().await.list().await;
    HttpResponse::Ok().json(web::Json(sessions))
}

#[post("/{location_id}/select")]
async fn select_session(manager: web::Data<RwLock<SessionManager>>, location_id: web::Path<String>) -> impl Responder {
    let location_id = location_id.into_inner();
    let config = Config::now().await;
    if config.location(&location_id).is_none() {
        return HttpResponse::NotFound().body(String::from(SessionEntry::LocationDoesNotExist(location_id)));
    }
    let shared = manager.write().await.select(&location_id, Arc::new(config.class_lookup())).await;
    let information = shared.read().await.information();
    HttpResponse::Ok().json(web::Json(information))
}

#[post("/{location_id}/frame")]
async fn record_frame(manager: web::Data<RwLock<SessionManager>>, location_id: web::Path<String>, payload: web::Json<FramePayload>) -> impl Responder {
    let shared = match find_session(&manager, &location_id).await {
        Ok(shared) => shared,
        Err(response) => return response,
    };
    let min_confidence = Config::now().await.min_confidence;
    let FramePayload { timestamp, predictions } = payload.into_inner();
    let predictions: Vec<RawPrediction> = if min_confidence > 0.0 {
        predictions.into_iter().filter(|prediction| prediction.confidence >= min_confidence).collect()
    } else {
        predictions
    };
    let detections = shared.write().await.record_frame(&predictions, timestamp);
    let counts = DetectionSession::snapshot_count(&detections);
    HttpResponse::Ok().json(web::Json(FrameResponse { detections, counts }))
}

#[post("/{location_id}/clear")]
async fn clear_history(manager: web::Data<RwLock<SessionManager>>, location_id: web::Path<String>) -> impl Responder {
    let shared = match find_session(&manager, &location_id).await {
        Ok(shared) => shared,
        Err(response) => return response,
    };
    let mut session = shared.write().await;
    session.clear_history();
    HttpResponse::Ok().json(web::Json(session.information()))
}

#[post("/{location_id}/discard")]
async fn discard_session(manager: web::Data<RwLock<SessionManager>>, location_id: web::Path<String>) -> impl Responder {
    let location_id = location_id.into_inner();
    match manager.write().await.discard(&location_id).await {
        Some(information) => HttpResponse::Ok().json(web::Json(information)),
        None => HttpResponse::NotFound().body(String::from(SessionEntry::SessionDoesNotExist(location_id))),
    }
}

#[get("/{location_id}/series")]
async fn series(manager: web::Data<RwLock<SessionManager>>, location_id: web::Path<String>, query: web::Query<SeriesQuery>) -> impl Responder {
    let shared = match find_session(&manager, &location_id).await {
        Ok(shared) => shared,
        Err(response) => return response,
    };
    let config = Config::now().await;
    let session = shared.read().await;
    let start_time = query.start.unwrap_or(0.0);
    let end_time = query.end.unwrap_or_else(|| session.history().max_timestamp());
    let bucket_width = query.bucket_width.unwrap_or(config.bucket_width);
    if let Err(message) = check_bucket_limit(start_time, end_time, bucket_width, config.max_bucket_count) {
        return reject(session.uuid(), message).await;
    }
    match session.aggregate(start_time, end_time, bucket_width) {
        Ok(buckets) => HttpResponse::Ok().json(web::Json(buckets)),
        Err(err) => reject(session.uuid(), err.into()).await,
    }
}

#[get("/{location_id}/summary")]
async fn summary(manager: web::Data<RwLock<SessionManager>>, location_id: web::Path<String>, query: web::Query<WidthQuery>) -> impl Responder {
    let shared = match find_session(&manager, &location_id).await {
        Ok(shared) => shared,
        Err(response) => return response,
    };
    let session = shared.read().await;
    let bucket_width = match checked_series_width(&session, query.bucket_width).await {
        Ok(bucket_width) => bucket_width,
        Err(message) => return reject(session.uuid(), message).await,
    };
    match session.summary(bucket_width) {
        Ok(summary) => HttpResponse::Ok().json(web::Json(summary)),
        Err(err) => reject(session.uuid(), err.into()).await,
    }
}

#[get("/{location_id}/export/csv")]
async fn export_csv(manager: web::Data<RwLock<SessionManager>>, location_id: web::Path<String>, query: web::Query<WidthQuery>) -> impl Responder {
    let shared = match find_session(&manager, &location_id).await {
        Ok(shared) => shared,
        Err(response) => return response,
    };
    let session = shared.read().await;
    let bucket_width = match checked_series_width(&session, query.bucket_width).await {
        Ok(bucket_width) => bucket_width,
        Err(message) => return reject(session.uuid(), message).await,
    };
    match session.export_series(bucket_width) {
        Ok(csv) => {
            let content_disposition = ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![
                    DispositionParam::Filename(format!("{}_traffic.csv", session.location_id())),
                ],
            };
            HttpResponse::Ok()
                .content_type("text/csv")
                .insert_header(content_disposition)
                .body(csv)
        }
        Err(err) => reject(session.uuid(), err.into()).await,
    }
}

#[get("/{location_id}/export/json")]
async fn export_json(manager: web::Data<RwLock<SessionManager>>, location_id: web::Path<String>, query: web::Query<WidthQuery>) -> impl Responder {
    let shared = match find_session(&manager, &location_id).await {
        Ok(shared) => shared,
        Err(response) => return response,
    };
    let session = shared.read().await;
    let bucket_width = match checked_series_width(&session, query.bucket_width).await {
        Ok(bucket_width) => bucket_width,
        Err(message) => return reject(session.uuid(), message).await,
    };
    match session.export_series_json(bucket_width) {
        Ok(json) => HttpResponse::Ok()
            .content_type("application/json")
            .body(json),
        Err(ExportEntry::Aggregation(err)) => reject(session.uuid(), err.into()).await,
        Err(err) => {
            logging_error!(session.uuid(), err, "");
            HttpResponse::InternalServerError().finish()
        }
    }
}

async fn find_session(manager: &RwLock<SessionManager>, location_id: &str) -> Result<SharedSession, HttpResponse> {
    manager.read().await.get(location_id)
        .ok_or_else(|| HttpResponse::NotFound().body(String::from(SessionEntry::SessionDoesNotExist(location_id.to_string()))))
}

/// Width for a series running from `0` to the latest detection, checked against the bucket limit.
async fn checked_series_width(session: &DetectionSession, bucket_width: Option<f64>) -> Result<f64, String> {
    let config = Config::now().await;
    let bucket_width = bucket_width.unwrap_or(config.bucket_width);
    check_bucket_limit(0.0, session.history().max_timestamp(), bucket_width, config.max_bucket_count)?;
    Ok(bucket_width)
}

fn check_bucket_limit(start_time: f64, end_time: f64, bucket_width: f64, limit: usize) -> Result<(), String> {
    let count = aggregator::bucket_count(start_time, end_time, bucket_width)?;
    if count > limit {
        return Err(SessionEntry::TooManyBuckets(count, limit).into());
    }
    Ok(())
}

async fn reject(session_id: Uuid, message: String) -> HttpResponse {
    logging_warning!(session_id, message.clone(), "");
    HttpResponse::BadRequest().body(message)
}
