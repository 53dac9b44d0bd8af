mod config;
mod guard;
mod model;
mod web;

use actix_web::{middleware::Logger, App, HttpServer, web::Data};
use actix_files as fs;
use anyhow::Context;
use dotenv::dotenv;
use log::{info, error};
use tera::Tera;

use config::Config;
use guard::AegisGuard;
use model::Papi;
use web::routes;

// App state structure
pub struct AppState {
    pub tera: Tera,
    pub papi: Papi,
    pub guard: AegisGuard,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting PAPI web application");

    let config = Config::from_env().map_err(|e| {
        error!("Configuration error: {:#}", e);
        e
    })?;

    // Initialize template engine
    let mut tera = Tera::new(&config.template_glob()).map_err(|e| {
        error!("Template parsing error: {}", e);
        e
    })?;
    tera.autoescape_on(vec![".html"]);

    let app_state = Data::new(AppState {
        tera,
        papi: Papi::new(),
        guard: AegisGuard::new(),
    });

    let static_dir = config.static_dir.clone();
    info!("Listening on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(routes::configure)
            .service(fs::Files::new("/static", &static_dir))
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?
    .run()
    .await
    .context("Server terminated with an error")
}
