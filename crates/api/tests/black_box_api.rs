use reqwest::StatusCode;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{Value, json};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build the same router as prod, but bind to an ephemeral port.
        let app = stockbook_api::app::build_app();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn data_decimal(body: &Value) -> Decimal {
    serde_json::from_value(body["data"].clone()).expect("data is a decimal")
}

#[tokio::test]
async fn health_endpoint_is_up() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn product_lifecycle_over_http() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Register a product.
    let res = client
        .post(format!("{}/products", server.base_url))
        .json(&json!({ "name": "Keyboard", "price": "35.39", "quantity": 10 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["name"], json!("Keyboard"));

    // The full list carries totals at the default 16% rate.
    let res = client
        .get(format!("{}/products", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    let total: Decimal =
        serde_json::from_value(body["data"][0]["total_value"].clone()).unwrap();
    assert_eq!(total, dec!(410.5240));

    // Lookup is case-insensitive.
    let res = client
        .get(format!("{}/products/keyboard", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // Stock out more than available: rejected with the current quantity.
    let res = client
        .patch(format!("{}/products/movement", server.base_url))
        .json(&json!({ "name": "Keyboard", "quantity": 20, "movement": "out" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["data"], json!(10));

    // A covered outbound movement succeeds.
    let res = client
        .patch(format!("{}/products/movement", server.base_url))
        .json(&json!({ "name": "Keyboard", "quantity": 4, "movement": "out" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"], json!(6));

    // Negative re-price: rejected, current price reported back.
    let res = client
        .patch(format!("{}/products/price", server.base_url))
        .json(&json!({ "name": "Keyboard", "price": "-1" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(data_decimal(&body), dec!(35.39));

    // Valid re-price persists.
    let res = client
        .patch(format!("{}/products/price", server.base_url))
        .json(&json!({ "name": "Keyboard", "price": "40.00" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(data_decimal(&body), dec!(40.00));

    // Remove, then the product is gone.
    let res = client
        .delete(format!("{}/products/Keyboard", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/products/Keyboard", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_product_names_conflict() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/products", server.base_url))
        .json(&json!({ "name": "Mouse", "price": "12.50", "quantity": 3 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(format!("{}/products", server.base_url))
        .json(&json!({ "name": "MOUSE", "price": "9.99", "quantity": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn tax_rate_changes_show_up_in_recomputed_totals() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/tax-rate", server.base_url))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(data_decimal(&body), dec!(16));

    client
        .post(format!("{}/products", server.base_url))
        .json(&json!({ "name": "Cable", "price": "29.28", "quantity": 10 }))
        .send()
        .await
        .unwrap();

    let res = client
        .put(format!("{}/tax-rate", server.base_url))
        .json(&json!({ "rate": "21" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // The same product's total now reflects the new rate, with no writes.
    let res = client
        .get(format!("{}/products/Cable", server.base_url))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    let total: Decimal =
        serde_json::from_value(body["data"]["total_value"].clone()).unwrap();
    assert_eq!(total, dec!(354.288));

    // Negative rates are rejected, and the prior rate sticks.
    let res = client
        .put(format!("{}/tax-rate", server.base_url))
        .json(&json!({ "rate": "-5" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client
        .get(format!("{}/tax-rate", server.base_url))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(data_decimal(&body), dec!(21));
}

#[tokio::test]
async fn empty_inventory_lists_with_a_distinct_message() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/products", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Inventory has no products"));
    assert_eq!(body["data"], Value::Null);
}

#[tokio::test]
async fn movement_on_unknown_product_is_not_found() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .patch(format!("{}/products/movement", server.base_url))
        .json(&json!({ "name": "Ghost", "quantity": 1, "movement": "in" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
