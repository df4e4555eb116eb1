//! Order endpoints.
//!
//! Thin IO layer: each method maps one endpoint, decodes the JSON body, and
//! surfaces any non-2xx response as [`crate::errors::Error::Network`].
//! Conversion to domain entities happens in the caller so that a malformed
//! payload and a failed request travel the same failure path.

use crate::api::ApiClient;
use crate::api::dto::{OrderData, OrderToSend, StatusToSend};
use crate::entities::{Feedback, OrderStatus};
use crate::errors::Result;

/// Order operations of the storefront API.
///
/// Implemented by [`ApiClient`] over HTTP and by the test mock in
/// `test_utils`.
#[allow(async_fn_in_trait)]
pub trait OrderApi {
    /// `GET /api/orders` — all orders visible to the signed-in user.
    async fn fetch_orders(&self) -> Result<Vec<OrderData>>;

    /// `GET /api/orders/{id}` — a single order.
    async fn fetch_order(&self, id: i64) -> Result<OrderData>;

    /// `POST /api/orders` — create an order from a checkout draft.
    async fn create_order(&self, draft: &OrderToSend) -> Result<OrderData>;

    /// `PUT /api/orders/{id}` — request a status transition; returns the
    /// updated order record as the backend accepted it.
    async fn update_order_status(&self, id: i64, status: OrderStatus) -> Result<OrderData>;

    /// `DELETE /api/orders/{id}`.
    async fn delete_order(&self, id: i64) -> Result<()>;

    /// `POST /api/orders/{id}/feedback` — attach customer feedback.
    async fn send_feedback(&self, id: i64, feedback: &Feedback) -> Result<OrderData>;
}

impl OrderApi for ApiClient {
    async fn fetch_orders(&self) -> Result<Vec<OrderData>> {
        let response = self
            .http
            .get(self.url("/api/orders"))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn fetch_order(&self, id: i64) -> Result<OrderData> {
        let response = self
            .http
            .get(self.url(&format!("/api/orders/{id}")))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn create_order(&self, draft: &OrderToSend) -> Result<OrderData> {
        let response = self
            .http
            .post(self.url("/api/orders"))
            .json(draft)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn update_order_status(&self, id: i64, status: OrderStatus) -> Result<OrderData> {
        let body = StatusToSend {
            status: status.as_wire().to_string(),
        };
        let response = self
            .http
            .put(self.url(&format!("/api/orders/{id}")))
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn delete_order(&self, id: i64) -> Result<()> {
        self.http
            .delete(self.url(&format!("/api/orders/{id}")))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn send_feedback(&self, id: i64, feedback: &Feedback) -> Result<OrderData> {
        let response = self
            .http
            .post(self.url(&format!("/api/orders/{id}/feedback")))
            .json(feedback)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}
