use actix_web::{web, HttpResponse};
use note_core::{CleanupRequest, GenerationRequest};

use crate::{error::AppError, server::AppState};

async fn generate_article(
    app_state: web::Data<AppState>,
    payload: web::Json<GenerationRequest>,
) -> Result<HttpResponse, AppError> {
    let result = app_state.notes.generate_article(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn cleanup_text(
    app_state: web::Data<AppState>,
    payload: web::Json<CleanupRequest>,
) -> Result<HttpResponse, AppError> {
    let result = app_state.notes.cleanup_text(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/generate/article").route(web::post().to(generate_article)))
        .service(web::resource("/generate/cleanup").route(web::post().to(cleanup_text)));
}
