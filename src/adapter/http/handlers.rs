// src/adapter/http/handlers.rs
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};

use super::AppState;
use crate::application::dto::{OrderQuery, PlaceOrderRequest, UpdateOrderRequest};
use crate::domain::errors::DomainError;
use crate::domain::models::Order;

/// `POST /api/orders`
pub async fn place_order(
    State(state): State<AppState>,
    payload: Result<Json<PlaceOrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Order>), DomainError> {
    let Json(request) = payload?;
    let order = state.orders.place_order(request).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// `GET /api/orders`
pub async fn list_orders(
    State(state): State<AppState>,
    query: Result<Query<OrderQuery>, QueryRejection>,
) -> Result<Json<Vec<Order>>, DomainError> {
    let Query(query) = query?;
    let orders = state.orders.list_orders(query).await?;
    Ok(Json(orders))
}

/// `GET /api/orders/{id}`
pub async fn get_order(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Order>, DomainError> {
    let Path(id) = id?;
    let order = state.orders.get_order(id).await?;
    Ok(Json(order))
}

/// `PUT /api/orders/{id}`
pub async fn update_order(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateOrderRequest>, JsonRejection>,
) -> Result<Json<Order>, DomainError> {
    let Path(id) = id?;
    let Json(request) = payload?;
    let order = state.orders.update_order(id, request).await?;
    Ok(Json(order))
}

/// `DELETE /api/orders/{id}`
pub async fn delete_order(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, DomainError> {
    let Path(id) = id?;
    state.orders.delete_order(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
