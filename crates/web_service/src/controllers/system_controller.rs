use actix_web::{web, HttpResponse};

use crate::{dto::HealthStatus, server::AppState};

async fn health_check(app_state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus {
        status: "ok".to_string(),
        api_key_configured: app_state.notes.is_configured().await,
    })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(health_check)));
}
