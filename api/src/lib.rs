pub mod render;

use std::sync::Arc;

use actix_web::{guard, web, HttpResponse};
use anyhow::Result;
use chrono::Utc;
use minijinja::Environment;
use service::Service;
use url::Url;

pub struct AppState {
    pub service: Arc<dyn Service>,
    /// Linked from the page as the raw scan results.
    pub snapshot_url: Url,
    pub templates: Environment<'static>,
}

impl AppState {
    pub fn new(service: Arc<dyn Service>, snapshot_url: Url) -> Result<Self> {
        Ok(Self {
            service,
            snapshot_url,
            templates: render::templates()?,
        })
    }
}

pub async fn index(state: web::Data<AppState>) -> HttpResponse {
    let rows = state.service.get_rows(Utc::now()).await;
    log::debug!("Rendering {} rows", rows.len());
    match render::page(&state.templates, &rows, &state.snapshot_url) {
        Ok(html) => HttpResponse::Ok().content_type("text/html; charset=utf-8").body(html),
        Err(e) => {
            log::error!("Error rendering page: {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub async fn rows(state: web::Data<AppState>) -> HttpResponse {
    let rows = state.service.get_rows(Utc::now()).await;
    HttpResponse::Ok().json(rows)
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").guard(guard::Get()).to(index))
        .service(web::resource("/api/rows").guard(guard::Get()).to(rows))
        .service(web::resource("/health").guard(guard::Get()).to(health));
}
