use actix_web::{HttpResponse, Responder, get, post, web};

use crate::domain::order_filter::OrderFilters;
use crate::domain::types::OrderId;
use crate::forms::orders::NewOrderForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::ServiceError;
use crate::services::orders as order_service;

#[post("/v1/orders")]
pub async fn create_order(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<NewOrderForm>,
) -> impl Responder {
    match order_service::create_order(repo.get_ref(), &form) {
        Ok(order) => {
            log::info!("Created order {} for client {}", order.id, order.client_id);
            HttpResponse::Created().json(order)
        }
        Err(err) => error_response(&err),
    }
}

#[get("/v1/orders/{order_id}")]
pub async fn show_order(
    order_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let order_id = match order_id.parse::<OrderId>() {
        Ok(order_id) => order_id,
        Err(err) => return error_response(&ServiceError::from(err)),
    };

    match order_service::get_order(repo.get_ref(), Some(order_id)) {
        Ok(order) => HttpResponse::Ok().json(order),
        Err(err) => error_response(&err),
    }
}

#[get("/v1/orders")]
pub async fn search_orders(
    repo: web::Data<DieselRepository>,
    web::Query(filters): web::Query<OrderFilters>,
) -> impl Responder {
    match order_service::search_orders(repo.get_ref(), filters) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(&err),
    }
}
