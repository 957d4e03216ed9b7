use std::{net::TcpListener, sync::Arc};

use actix_web::{middleware, App, HttpServer};
use anyhow::Result;
use api::AppState;
use client::HttpClient;
use envconfig::Envconfig;
use service::ServiceImpl;
use url::Url;

#[derive(Envconfig, Clone)]
pub struct AppConfig {
    #[envconfig(
        from = "SNAPSHOT_URL",
        default = "https://testnet-files.itrocket.net/source/.rpc_combined.json"
    )]
    pub snapshot_url: Url,

    #[envconfig(from = "APP_HOST", default = "127.0.0.1")]
    pub host: String,

    #[envconfig(from = "APP_PORT", default = "8080")]
    pub port: u16,
}

impl AppConfig {
    pub fn connection_string(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let app_config = AppConfig::init_from_env()?;
    let listener = TcpListener::bind(app_config.connection_string())?;
    log::info!(
        "Serving RPC scan results from {} on {}",
        app_config.snapshot_url,
        app_config.connection_string()
    );

    let client = Arc::new(HttpClient::new(app_config.snapshot_url.clone()));
    let service = Arc::new(ServiceImpl::new(client));
    let state = actix_web::web::Data::new(AppState::new(service, app_config.snapshot_url.clone())?);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(api::configure)
    })
    .listen(listener)?
    .run();

    Ok(server.await?)
}
