use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use promise_order::Order;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/orders/{order_id}", get(get_order))
}

/// GET /v1/orders/:order_id
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Order>, AppError> {
    let order = state
        .order_dao
        .get(&order_id)
        .await?
        .ok_or_else(|| AppError::NotFoundError(format!("Order {} not found", order_id)))?;

    Ok(Json(order))
}
