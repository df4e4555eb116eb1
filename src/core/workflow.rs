//! Order workflow controller - fetch, convert, store, and status updates.
//!
//! The order collection lives in a single [`OrderStore`] mutated only through
//! whole-value reducer operations, so readers never observe a half-updated
//! order. Status updates are pessimistic: the row is marked in-flight before
//! the request goes out and the marker is cleared when the request settles,
//! success or failure, via an RAII guard rather than manual bookkeeping. The
//! client does not enforce the status transition graph; it sends the target
//! status and trusts the backend's answer. Two rapid updates to the same row
//! race at the network layer and the store applies whichever response
//! arrives last — an acknowledged weak-consistency point, not a defect.

use crate::api::OrderApi;
use crate::core::convert::{carts_to_order, order_from_wire, order_to_wire};
use crate::entities::{Cart, Order, OrderStatus, PaymentMethod, User};
use crate::errors::Result;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Client-side order collection plus the transient per-row update markers.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: Vec<Order>,
    updating: HashSet<i64>,
}

impl OrderStore {
    /// The stored orders, in presentation order (newest first after a
    /// refresh).
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Whether an update request for this row is outstanding.
    #[must_use]
    pub fn is_updating(&self, id: i64) -> bool {
        self.updating.contains(&id)
    }

    /// Ids with an outstanding update request.
    #[must_use]
    pub fn updating_ids(&self) -> Vec<i64> {
        self.updating.iter().copied().collect()
    }

    /// Replaces the whole collection.
    pub fn set_orders(&mut self, orders: Vec<Order>) {
        self.orders = orders;
    }

    /// Replaces the order with the same id by the updated value. Unknown ids
    /// are ignored; the collection is never partially mutated.
    pub fn replace(&mut self, updated: Order) {
        for order in &mut self.orders {
            if order.id == updated.id {
                *order = updated;
                break;
            }
        }
    }

    fn begin_update(&mut self, id: i64) {
        self.updating.insert(id);
    }

    fn finish_update(&mut self, id: i64) {
        self.updating.remove(&id);
    }
}

fn lock_store(store: &Arc<Mutex<OrderStore>>) -> MutexGuard<'_, OrderStore> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Scoped completion handler for the in-flight marker: marks the row on
/// construction and clears it on drop, so every exit path — success,
/// conversion failure, network failure — clears the marker and no row is
/// ever left permanently stuck.
struct InFlightGuard {
    store: Arc<Mutex<OrderStore>>,
    id: i64,
}

impl InFlightGuard {
    fn begin(store: Arc<Mutex<OrderStore>>, id: i64) -> Self {
        lock_store(&store).begin_update(id);
        Self { store, id }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        lock_store(&self.store).finish_update(self.id);
    }
}

/// Orchestrates the order-management pipeline over an [`OrderApi`]
/// implementation.
pub struct OrderWorkflow<A> {
    api: A,
    store: Arc<Mutex<OrderStore>>,
}

impl<A: OrderApi> OrderWorkflow<A> {
    /// Creates a workflow with an empty store.
    #[must_use]
    pub fn new(api: A) -> Self {
        Self {
            api,
            store: Arc::new(Mutex::new(OrderStore::default())),
        }
    }

    /// Shared handle to the store, for views and tests.
    #[must_use]
    pub fn store(&self) -> Arc<Mutex<OrderStore>> {
        Arc::clone(&self.store)
    }

    /// Clone of the current collection, for rendering.
    #[must_use]
    pub fn orders_snapshot(&self) -> Vec<Order> {
        lock_store(&self.store).orders().to_vec()
    }

    /// Fetches all orders, converts them, and stores them newest-first.
    ///
    /// The sort is stable, so orders with identical timestamps keep the
    /// server's relative order. Any fetch or conversion failure leaves the
    /// prior store contents untouched.
    ///
    /// # Errors
    /// Propagates network and conversion failures for the interface layer to
    /// surface as a single notification.
    pub async fn refresh(&self) -> Result<()> {
        let raw = self.api.fetch_orders().await?;
        let mut orders = raw
            .into_iter()
            .map(order_from_wire)
            .collect::<Result<Vec<_>>>()?;
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        debug!(count = orders.len(), "refreshed order collection");
        lock_store(&self.store).set_orders(orders);
        Ok(())
    }

    /// Requests a status transition for one order.
    ///
    /// The row is marked in-flight before the request and the marker is
    /// cleared when the request settles, whatever the outcome. On success the
    /// stored order is replaced by id with the record the backend returned;
    /// on failure the store is untouched.
    ///
    /// # Errors
    /// Propagates network and conversion failures; the in-flight marker is
    /// cleared in all cases.
    pub async fn update_status(&self, id: i64, status: OrderStatus) -> Result<()> {
        let _in_flight = InFlightGuard::begin(Arc::clone(&self.store), id);

        let raw = self.api.update_order_status(id, status).await?;
        let updated = order_from_wire(raw)?;

        debug!(id, status = %status, "order status updated");
        lock_store(&self.store).replace(updated);
        Ok(())
    }

    /// Checkout: builds a draft order from the cart, posts it, and returns
    /// the created order as the backend recorded it.
    ///
    /// # Errors
    /// Propagates network and conversion failures.
    pub async fn place_order(
        &self,
        carts: Vec<Cart>,
        status: OrderStatus,
        payment_method: PaymentMethod,
        note: String,
        user: User,
    ) -> Result<Order> {
        let draft = carts_to_order(carts, payment_method, note, user);
        let raw = self.api.create_order(&order_to_wire(&draft, status)).await?;
        order_from_wire(raw)
    }
}
