// src/application/usecase/order_usecase.rs
// Order placement and order management use cases

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use crate::application::dto::{OrderQuery, PlaceOrderRequest, UpdateOrderRequest};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Order, OrderDraft};
use crate::domain::repository::{OrderRepository, ProductRepository, UserRepository};

#[async_trait]
pub trait OrderUseCase: Send + Sync {
    /// Validate a checkout request, reserve stock and create the order
    async fn place_order(&self, request: PlaceOrderRequest) -> DomainResult<Order>;

    async fn get_order(&self, id: i64) -> DomainResult<Order>;

    async fn list_orders(&self, query: OrderQuery) -> DomainResult<Vec<Order>>;

    /// Apply a partial update; status transitions are not restricted
    async fn update_order(&self, id: i64, request: UpdateOrderRequest) -> DomainResult<Order>;

    /// Remove the order and its items. Stock is not returned to the products.
    async fn delete_order(&self, id: i64) -> DomainResult<()>;
}

pub struct OrderWorkflow {
    users: Arc<dyn UserRepository>,
    products: Arc<dyn ProductRepository>,
    orders: Arc<dyn OrderRepository>,
}

impl OrderWorkflow {
    pub fn new(
        users: Arc<dyn UserRepository>,
        products: Arc<dyn ProductRepository>,
        orders: Arc<dyn OrderRepository>,
    ) -> Self {
        Self {
            users,
            products,
            orders,
        }
    }

    /// Fail fast before any write: the user and every product must exist and
    /// each product must hold enough stock for the summed demand of the order.
    ///
    /// This is advisory only. Another checkout may take the stock before this
    /// one commits, which `OrderRepository::place` detects on its own.
    async fn precheck(&self, draft: &OrderDraft) -> DomainResult<()> {
        if self.users.find_by_id(draft.user_id).await?.is_none() {
            return Err(DomainError::user_not_found(draft.user_id));
        }

        let mut demand: HashMap<i64, i64> = HashMap::new();

        for item in &draft.items {
            let product = self
                .products
                .find_by_id(item.product_id)
                .await?
                .ok_or_else(|| DomainError::product_not_found(item.product_id))?;

            // Saturates; the transactional decrement still rejects the excess line
            let requested = demand.entry(product.id).or_insert(0);
            *requested = requested.saturating_add(item.quantity);

            if *requested > product.stock {
                return Err(DomainError::InsufficientStock {
                    product_id: product.id,
                    product_name: product.name,
                    requested: *requested,
                    available: product.stock,
                });
            }
        }

        Ok(())
    }
}

fn rejected(error: DomainError) -> DomainError {
    // Persistence failures are reported where they are turned into responses
    if !matches!(error, DomainError::Persistence(_)) {
        log::warn!("Order rejected: {}", error);
    }
    error
}

#[async_trait]
impl OrderUseCase for OrderWorkflow {
    async fn place_order(&self, request: PlaceOrderRequest) -> DomainResult<Order> {
        let draft = request.validate().map_err(rejected)?;

        self.precheck(&draft).await.map_err(rejected)?;

        let order = self.orders.place(&draft).await.map_err(rejected)?;

        log::info!(
            "Order {} placed for user {}: {} line item(s), total {}",
            order.id,
            order.user_id,
            order.items.len(),
            order.total_amount
        );

        Ok(order)
    }

    async fn get_order(&self, id: i64) -> DomainResult<Order> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::order_not_found(id))
    }

    async fn list_orders(&self, query: OrderQuery) -> DomainResult<Vec<Order>> {
        let filter = query.to_filter()?;
        self.orders.find_all(&filter).await
    }

    async fn update_order(&self, id: i64, request: UpdateOrderRequest) -> DomainResult<Order> {
        let patch = request.validate()?;

        let order = self
            .orders
            .update(id, &patch)
            .await?
            .ok_or_else(|| DomainError::order_not_found(id))?;

        log::info!(
            "Order {} updated: status {}, payment {}",
            order.id,
            order.status,
            order.payment_status
        );

        Ok(order)
    }

    async fn delete_order(&self, id: i64) -> DomainResult<()> {
        if !self.orders.delete(id).await? {
            return Err(DomainError::order_not_found(id));
        }

        log::info!("Order {} deleted", id);
        Ok(())
    }
}
