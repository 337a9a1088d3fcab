//! HTTP API handlers for dfgate-gw

pub mod cors;
pub mod health;
pub mod query;
pub mod result;
pub mod upload;

pub use cors::cors_layer;
pub use health::health_routes;
pub use result::result_routes;
pub use upload::upload_routes;
