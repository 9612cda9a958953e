//! Topup Client - HTTP client for the storefront API
//!
//! Provides network-based calls to the storefront API (brand catalog,
//! order creation, status queries) and the order lifecycle tracker that
//! polls an order to its terminal state.

pub mod config;
pub mod error;
pub mod http;
pub mod tracker;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use tracker::{OrderTracker, StatusSource, TrackedOrder};

// Re-export shared types for convenience
pub use shared::models::{
    BrandDetail, CreateOrderRequest, Order, OrderHistoryItem, OrderStatus,
    OrderStatusResponse, Payment,
};
