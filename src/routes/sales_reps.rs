use actix_web::{HttpResponse, Responder, get, web};
use log::error;

use crate::dto::sales_reps::{ListSalesRepsQuery, SearchQuery};
use crate::repository::json_file::JsonFileRepository;
use crate::routes::error_response;
use crate::services::sales_reps as sales_reps_service;

/// Returns sales representatives with per-field filtering and pagination.
#[get("/sales-reps")]
pub async fn list_sales_reps(
    params: web::Query<ListSalesRepsQuery>,
    repo: web::Data<JsonFileRepository>,
) -> impl Responder {
    match sales_reps_service::list_sales_reps(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => {
            error!("Error processing request: {e}");
            error_response(&e)
        }
    }
}

/// Free-text search across names, roles, regions and skills.
#[get("/sales-reps/search")]
pub async fn search_sales_reps(
    params: web::Query<SearchQuery>,
    repo: web::Data<JsonFileRepository>,
) -> impl Responder {
    match sales_reps_service::search_sales_reps(repo.get_ref(), params.into_inner()) {
        Ok(reps) => HttpResponse::Ok().json(reps),
        Err(e) => {
            error!("Failed to search sales reps: {e}");
            error_response(&e)
        }
    }
}
