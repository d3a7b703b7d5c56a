use actix_web::{web, HttpResponse};

use crate::{
    dto::{ApiKeyRequest, ApiKeySaved, CredentialStatus},
    error::AppError,
    server::AppState,
};

async fn get_settings(app_state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(CredentialStatus {
        api_key_configured: app_state.notes.is_configured().await,
    })
}

/// Validates the key with a live completion call before adopting it; the env file
/// write that follows is best-effort.
async fn save_api_key(
    app_state: web::Data<AppState>,
    payload: web::Json<ApiKeyRequest>,
) -> Result<HttpResponse, AppError> {
    app_state.notes.update_api_key(&payload.api_key).await?;
    Ok(HttpResponse::Ok().json(ApiKeySaved { success: true }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/settings").route(web::get().to(get_settings)))
        .service(web::resource("/settings/apikey").route(web::post().to(save_api_key)))
        .service(web::resource("/settings/credential").route(web::post().to(save_api_key)));
}
