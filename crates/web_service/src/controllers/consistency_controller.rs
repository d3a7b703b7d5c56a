use actix_web::{web, HttpResponse};
use note_core::ConsistencyRequest;

use crate::{error::AppError, server::AppState};

async fn check_consistency(
    app_state: web::Data<AppState>,
    payload: web::Json<ConsistencyRequest>,
) -> Result<HttpResponse, AppError> {
    let result = app_state
        .notes
        .check_consistency(payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/consistency/check").route(web::post().to(check_consistency)));
}
