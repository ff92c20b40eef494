use actix_web::{web, App, HttpServer};
use irricontrol::bootstrap::dirs::init_directories;
use irricontrol::bootstrap::startup::log_startup_info;
use irricontrol::config::AppConfig;
use irricontrol::middleware::cors::cors_middleware;
use irricontrol::middleware::request_trace::RequestTrace;
use irricontrol::middleware::structured_logger::StructuredLogger;
use irricontrol::middleware::trace_span::TraceSpan;
use irricontrol::routes;
use irricontrol::state::AppState;
use irricontrol::telemetry;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Environment variables must be set by the runtime environment
    // (docker env_file, or sourced manually for local runs).
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    telemetry::init_tracing(&config.log_level);
    init_directories(&config.storage);
    log_startup_info(&config);

    let AppConfig {
        host,
        port,
        app,
        security,
        cors_origins,
        storage,
        ..
    } = config;

    let api_prefix = app.api_prefix.clone();
    let static_dir = storage.static_dir;
    let data = web::Data::new(AppState::new(app, security));

    HttpServer::new(move || {
        let api_prefix = api_prefix.clone();
        let static_dir = static_dir.clone();
        App::new()
            .wrap(cors_middleware(&cors_origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(move |cfg| routes::configure(cfg, &api_prefix, &static_dir))
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    info!("shutdown complete");
    Ok(())
}
