use axum::Router;

pub mod products;
pub mod system;
pub mod tax;

pub fn router() -> Router {
    Router::new().merge(tax::router()).merge(products::router())
}
