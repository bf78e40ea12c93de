use log::info;

use sales_dashboard_api::models::config::ServerConfig;
use sales_dashboard_api::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // Missing GEMINI_API_KEY fails deserialization here, before the server
    // ever binds.
    let server_config: ServerConfig = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default())
        .build()
        .and_then(config::Config::try_deserialize)
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    info!(
        "Starting Sales Dashboard API on {}:{}",
        server_config.address, server_config.port
    );

    run(server_config).await
}
