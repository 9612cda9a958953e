//! HTTP client for the storefront API

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{
    BrandDetail, CreateOrderRequest, Order, OrderHistoryItem, OrderStatusResponse,
};
use shared::response::ApiResponse;
use urlencoding::encode;

/// HTTP client for making network requests to the storefront API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    /// Unwrap the API envelope, mapping non-success codes to errors
    fn take_data<T>(response: ApiResponse<T>, what: &str) -> ClientResult<T> {
        if !response.is_success() {
            return Err(ClientError::Api {
                code: response.code,
                message: response.message,
            });
        }
        response
            .data
            .ok_or_else(|| ClientError::InvalidResponse(format!("Missing {what} data")))
    }

    // ========== Catalog API ==========

    /// Brand names from the content catalog
    pub async fn content_brands(&self) -> ClientResult<Vec<String>> {
        let response: ApiResponse<Vec<String>> = self.get("/api/content/brands").await?;
        Self::take_data(response, "content brands")
    }

    /// Brand names from the product catalog
    pub async fn product_brands(&self) -> ClientResult<Vec<String>> {
        let response: ApiResponse<Vec<String>> = self.get("/api/products/brands").await?;
        Self::take_data(response, "product brands")
    }

    /// The full brand-name universe: union of both catalog endpoints,
    /// deduplicated, first-occurrence order preserved so slug resolution
    /// stays deterministic across the merged list.
    pub async fn brand_names(&self) -> ClientResult<Vec<String>> {
        let content = self.content_brands().await?;
        let products = self.product_brands().await?;
        Ok(merge_brand_names(content, products))
    }

    /// Brand metadata (image, description, optional popup)
    pub async fn brand_detail(&self, name: &str) -> ClientResult<BrandDetail> {
        let response: ApiResponse<BrandDetail> =
            self.get(&format!("/api/brands/{}", encode(name))).await?;
        Self::take_data(response, "brand")
    }

    // ========== Order API ==========

    /// Create an order from SKU + customer number
    pub async fn create_order(&self, request: &CreateOrderRequest) -> ClientResult<Order> {
        let response: ApiResponse<Order> = self.post("/api/orders", request).await?;
        let order = Self::take_data(response, "order")?;
        tracing::debug!(order_id = %order.id, ref_id = %order.ref_id, "order created");
        Ok(order)
    }

    /// Current status of an order; polled by the lifecycle tracker
    pub async fn order_status(&self, order_id: &str) -> ClientResult<OrderStatusResponse> {
        let response: ApiResponse<OrderStatusResponse> = self
            .get(&format!("/api/orders/{}/status", encode(order_id)))
            .await?;
        Self::take_data(response, "order status")
    }

    /// Order history for a contact phone (feeds the tracking screen)
    pub async fn track_orders(&self, phone: &str) -> ClientResult<Vec<OrderHistoryItem>> {
        let response: ApiResponse<Vec<OrderHistoryItem>> = self
            .get(&format!("/api/orders/track?phone={}", encode(phone)))
            .await?;
        Self::take_data(response, "order history")
    }
}

/// Merge the two catalog brand lists into one deduplicated universe,
/// preserving first-occurrence order.
pub fn merge_brand_names(content: Vec<String>, products: Vec<String>) -> Vec<String> {
    let mut merged = Vec::with_capacity(content.len() + products.len());
    for name in content.into_iter().chain(products) {
        if !merged.contains(&name) {
            merged.push(name);
        }
    }
    merged
}
