// src/domain/repository/mod.rs
// Repository interfaces for domain entities

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{
    Category, NewCategory, NewProduct, NewUser, Order, OrderDraft, OrderFilter, OrderPatch,
    Product, User,
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &NewUser) -> DomainResult<User>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, category: &NewCategory) -> DomainResult<Category>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Category>>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: &NewProduct) -> DomainResult<Product>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Product>>;
}

/// Repository interface for orders and their line items
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist the order, its items and every stock decrement as one unit.
    ///
    /// Each decrement only applies while the product still has enough stock.
    /// If any line item cannot be applied, nothing is written and the error
    /// names the offending product (`NotFound` or `InsufficientStock`).
    async fn place(&self, draft: &OrderDraft) -> DomainResult<Order>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Order>>;

    /// List orders matching the filter, oldest first
    async fn find_all(&self, filter: &OrderFilter) -> DomainResult<Vec<Order>>;

    /// Apply the patch; `None` when the order does not exist
    async fn update(&self, id: i64, patch: &OrderPatch) -> DomainResult<Option<Order>>;

    /// Delete the order and its items; `false` when nothing was deleted
    async fn delete(&self, id: i64) -> DomainResult<bool>;
}
