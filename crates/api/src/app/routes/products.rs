use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};

use stockbook_inventory::Product;

use crate::app::dto::{Envelope, MovementRequest, PriceRequest, ProductRequest};
use crate::app::{SharedInventory, errors};

pub fn router() -> Router {
    Router::new()
        .route("/products", post(create_product).get(list_products))
        .route("/products/price", patch(update_price))
        .route("/products/movement", patch(record_movement))
        .route("/products/:name", get(get_product).delete(remove_product))
}

pub async fn create_product(
    Extension(inventory): Extension<SharedInventory>,
    Json(body): Json<ProductRequest>,
) -> axum::response::Response {
    let mut inventory = inventory.lock().await;

    match inventory.add_product(body.name, body.price, body.quantity) {
        Ok(product) => (
            StatusCode::CREATED,
            Json(Envelope::ok("Product saved successfully", product)),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn remove_product(
    Extension(inventory): Extension<SharedInventory>,
    Path(name): Path<String>,
) -> axum::response::Response {
    let mut inventory = inventory.lock().await;

    match inventory.remove_product(&name) {
        Ok(()) => (
            StatusCode::OK,
            Json(Envelope::<()>::ok_empty("Product removed successfully")),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_price(
    Extension(inventory): Extension<SharedInventory>,
    Json(body): Json<PriceRequest>,
) -> axum::response::Response {
    let mut inventory = inventory.lock().await;

    match inventory.update_price(&body.name, body.price) {
        Ok(price) => (
            StatusCode::OK,
            Json(Envelope::ok("Price updated successfully", price)),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn record_movement(
    Extension(inventory): Extension<SharedInventory>,
    Json(body): Json<MovementRequest>,
) -> axum::response::Response {
    let mut inventory = inventory.lock().await;

    match inventory.record_movement(&body.name, body.quantity, body.movement) {
        Ok(quantity) => (
            StatusCode::OK,
            Json(Envelope::ok("Quantity updated successfully", quantity)),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(inventory): Extension<SharedInventory>,
    Path(name): Path<String>,
) -> axum::response::Response {
    let mut inventory = inventory.lock().await;

    match inventory.product(&name) {
        Ok(product) => (
            StatusCode::OK,
            Json(Envelope::ok(
                "Information retrieved successfully",
                product.clone(),
            )),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_products(
    Extension(inventory): Extension<SharedInventory>,
) -> axum::response::Response {
    let mut inventory = inventory.lock().await;

    let products: Vec<Product> = match inventory.list() {
        Ok(products) => products.to_vec(),
        Err(e) => return errors::domain_error_to_response(e),
    };
    let envelope = if products.is_empty() {
        Envelope::ok_empty("Inventory has no products")
    } else {
        Envelope::ok("Information retrieved successfully", products)
    };

    (StatusCode::OK, Json(envelope)).into_response()
}
