use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use promise_core::Promise;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/promises/{order_item_id}", get(get_promises))
}

/// GET /v1/promises/:order_item_id
/// Every promise the configured sources hold for the item, stamped with its delivery date
pub async fn get_promises(
    State(state): State<AppState>,
    Path(order_item_id): Path<String>,
) -> Result<Json<Vec<Promise>>, AppError> {
    let promises = state.promise_dao.get(&order_item_id).await?;
    Ok(Json(promises))
}
