// src/infrastructure/database/rows.rs
// Raw table rows and their conversion into domain models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    Category, Order, OrderItem, OrderStatus, PaymentStatus, Product, User,
};

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct UserRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            role: row.role,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct CategoryRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            name: row.name,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ProductRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: i64,
    pub category_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = DomainError;

    fn try_from(row: ProductRow) -> DomainResult<Self> {
        Ok(Product {
            price: stored_decimal(&row.price, "products.price", row.id)?,
            id: row.id,
            name: row.name,
            description: row.description,
            stock: row.stock,
            category_id: row.category_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct OrderRow {
    pub id: i64,
    pub user_id: i64,
    pub status: String,
    pub total_amount: String,
    pub shipping_address: String,
    pub payment_method: String,
    pub payment_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderRow {
    pub fn into_order(self, items: Vec<OrderItem>) -> DomainResult<Order> {
        Ok(Order {
            status: self
                .status
                .parse::<OrderStatus>()
                .map_err(|_| corrupt("orders.status", self.id, &self.status))?,
            payment_status: self
                .payment_status
                .parse::<PaymentStatus>()
                .map_err(|_| corrupt("orders.payment_status", self.id, &self.payment_status))?,
            total_amount: stored_decimal(&self.total_amount, "orders.total_amount", self.id)?,
            id: self.id,
            user_id: self.user_id,
            shipping_address: self.shipping_address,
            payment_method: self.payment_method,
            created_at: self.created_at,
            updated_at: self.updated_at,
            items,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct OrderItemRow {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub price: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<OrderItemRow> for OrderItem {
    type Error = DomainError;

    fn try_from(row: OrderItemRow) -> DomainResult<Self> {
        Ok(OrderItem {
            price: stored_decimal(&row.price, "order_items.price", row.id)?,
            id: row.id,
            order_id: row.order_id,
            product_id: row.product_id,
            quantity: row.quantity,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn stored_decimal(raw: &str, column: &str, id: i64) -> DomainResult<Decimal> {
    Decimal::from_str(raw).map_err(|_| corrupt(column, id, raw))
}

fn corrupt(column: &str, id: i64, raw: &str) -> DomainError {
    DomainError::Persistence(format!("invalid value '{}' in {} for row {}", raw, column, id))
}
