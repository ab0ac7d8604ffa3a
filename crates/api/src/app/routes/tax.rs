use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::app::dto::{Envelope, TaxRateRequest};
use crate::app::{SharedInventory, errors};

pub fn router() -> Router {
    Router::new().route("/tax-rate", get(get_tax_rate).put(update_tax_rate))
}

pub async fn get_tax_rate(
    Extension(inventory): Extension<SharedInventory>,
) -> axum::response::Response {
    let inventory = inventory.lock().await;

    (
        StatusCode::OK,
        Json(Envelope::ok(
            "Information retrieved successfully",
            inventory.tax_rate(),
        )),
    )
        .into_response()
}

pub async fn update_tax_rate(
    Extension(inventory): Extension<SharedInventory>,
    Json(body): Json<TaxRateRequest>,
) -> axum::response::Response {
    let mut inventory = inventory.lock().await;

    match inventory.set_tax_rate(body.rate) {
        Ok(()) => (
            StatusCode::OK,
            Json(Envelope::ok("Tax rate updated successfully", body.rate)),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
