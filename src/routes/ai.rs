use actix_web::{HttpResponse, Responder, post, web};
use log::error;

use crate::dto::ai::AiQuery;
use crate::llm::LlmGateway;
use crate::repository::json_file::JsonFileRepository;
use crate::routes::error_response;
use crate::services::ai as ai_service;

/// Accepts a user question and optionally a dataset, returns the model's
/// answer. Without a `data` field the backing file is consulted.
#[post("/ai")]
pub async fn ask_ai(
    body: web::Json<AiQuery>,
    repo: web::Data<JsonFileRepository>,
    llm: web::Data<dyn LlmGateway>,
) -> impl Responder {
    match ai_service::ask(repo.get_ref(), llm.get_ref(), body.into_inner()).await {
        Ok(answer) => HttpResponse::Ok().json(answer),
        Err(e) => {
            error!("Error processing AI request: {e}");
            error_response(&e)
        }
    }
}
