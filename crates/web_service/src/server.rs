use std::path::PathBuf;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use log::{error, info};
use note_core::env_file::EnvFilePersister;
use note_core::{Credential, NoteService};

use crate::config::{build_provider, load_api_key, load_generation_settings};
use crate::controllers::{
    consistency_controller, generate_controller, settings_controller, system_controller,
};
use crate::error::AppError;
use crate::middleware::RequestTracing;

pub struct AppState {
    pub notes: NoteService,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Accepted API keys are written back here.
    pub env_file: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            env_file: PathBuf::from(".env"),
        }
    }
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::InvalidRequest(err.to_string()).into())
}

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api")
            .configure(generate_controller::config)
            .configure(consistency_controller::config)
            .configure(settings_controller::config)
            .configure(system_controller::config),
    );
}

pub fn build_app_state(config: &ServerConfig) -> Result<AppState, String> {
    let provider = build_provider()?;
    let settings = load_generation_settings();
    let credential = Credential::new(load_api_key());

    info!(
        "Using model {} via {} (article={}, summary={}, cleanup={}, consistency={})",
        settings.model,
        provider.base_url(),
        settings.max_tokens_article,
        settings.max_tokens_summary,
        settings.max_tokens_cleanup,
        settings.max_tokens_consistency
    );

    let notes = NoteService::new(Arc::new(provider), credential, settings)
        .with_persister(EnvFilePersister::new(config.env_file.clone()));

    Ok(AppState { notes })
}

pub async fn run(config: ServerConfig) -> Result<(), String> {
    info!("Starting web service...");

    let app_state = web::Data::new(build_app_state(&config)?);
    if !app_state.notes.is_configured().await {
        info!("No API key configured yet; set one via POST /api/settings/apikey");
    }

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(RequestTracing)
            .wrap(Cors::permissive())
            .configure(app_config)
    })
    .bind((config.host.as_str(), config.port))
    .map_err(|e| format!("Failed to bind server: {e}"))?
    .run();

    info!(
        "Starting web service on http://{}:{}",
        config.host, config.port
    );

    if let Err(e) = server.await {
        error!("Web server error: {}", e);
        return Err(format!("Web server error: {e}"));
    }

    Ok(())
}
