use actix_web::{HttpResponse, Responder, get, post, web};

use crate::forms::clients::AddClientForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::clients as client_service;

#[post("/v1/clients")]
pub async fn add_client(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddClientForm>,
) -> impl Responder {
    match client_service::create_client(repo.get_ref(), form) {
        Ok(client) => HttpResponse::Created().json(client),
        Err(err) => error_response(&err),
    }
}

#[get("/v1/clients/{client_id}")]
pub async fn show_client(
    client_id: web::Path<i64>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match client_service::get_client(repo.get_ref(), client_id.into_inner()) {
        Ok(client) => HttpResponse::Ok().json(client),
        Err(err) => error_response(&err),
    }
}
