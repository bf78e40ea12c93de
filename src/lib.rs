use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};

use crate::llm::{GeminiClient, LlmGateway};
use crate::models::config::ServerConfig;
use crate::repository::json_file::JsonFileRepository;
use crate::routes::ai::ask_ai;
use crate::routes::sales_reps::{list_sales_reps, search_sales_reps};

pub mod domain;
pub mod dto;
pub mod llm;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod search;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let repo = JsonFileRepository::new(&server_config.data_file);

    let gemini = GeminiClient::new(
        server_config.gemini_api_key.clone(),
        server_config.llm_models.clone(),
    )
    .map_err(|e| std::io::Error::other(format!("Failed to build LLM gateway: {e}")))?;
    let llm: web::Data<dyn LlmGateway> = web::Data::from(Arc::new(gemini) as Arc<dyn LlmGateway>);

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api")
                    .service(list_sales_reps)
                    .service(search_sales_reps)
                    .service(ask_ai),
            )
            .app_data(web::Data::new(repo.clone()))
            .app_data(llm.clone())
    })
    .bind(bind_address)?
    .run()
    .await
}
