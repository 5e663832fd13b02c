// src/infrastructure/database/orders.rs
// Order persistence, including the transactional checkout

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{SqliteConnection, SqlitePool};
use std::collections::HashMap;

use super::rows::{OrderItemRow, OrderRow};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{LineItem, Order, OrderDraft, OrderFilter, OrderItem, OrderPatch};
use crate::domain::repository::OrderRepository;

const SELECT_ORDER: &str = "SELECT id, user_id, status, total_amount, shipping_address, payment_method,
        payment_status, created_at, updated_at
     FROM orders WHERE id = ?";

const SELECT_ORDER_ITEMS: &str = "SELECT id, order_id, product_id, quantity, price, created_at, updated_at
     FROM order_items WHERE order_id = ? ORDER BY id";

pub struct SqliteOrderRepository {
    pool: SqlitePool,
}

impl SqliteOrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Read one order and its items through an existing connection or transaction
async fn load_order(conn: &mut SqliteConnection, id: i64) -> DomainResult<Option<Order>> {
    let Some(row) = sqlx::query_as::<_, OrderRow>(SELECT_ORDER)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
    else {
        return Ok(None);
    };

    let items = sqlx::query_as::<_, OrderItemRow>(SELECT_ORDER_ITEMS)
        .bind(id)
        .fetch_all(&mut *conn)
        .await?
        .into_iter()
        .map(OrderItem::try_from)
        .collect::<DomainResult<Vec<_>>>()?;

    row.into_order(items).map(Some)
}

/// Explain why a conditional decrement touched no row
async fn stock_failure(conn: &mut SqliteConnection, item: &LineItem) -> DomainError {
    let product = sqlx::query_as::<_, (String, i64)>("SELECT name, stock FROM products WHERE id = ?")
        .bind(item.product_id)
        .fetch_optional(&mut *conn)
        .await;

    match product {
        Ok(Some((name, stock))) => DomainError::InsufficientStock {
            product_id: item.product_id,
            product_name: name,
            requested: item.quantity,
            available: stock,
        },
        Ok(None) => DomainError::product_not_found(item.product_id),
        Err(e) => e.into(),
    }
}

#[async_trait]
impl OrderRepository for SqliteOrderRepository {
    async fn place(&self, draft: &OrderDraft) -> DomainResult<Order> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        // First statement is a write so the transaction takes the write lock up front
        let order_id = sqlx::query(
            "INSERT INTO orders (user_id, status, total_amount, shipping_address, payment_method,
                 payment_status, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(draft.user_id)
        .bind(draft.status.as_str())
        .bind(draft.total_amount.to_string())
        .bind(&draft.shipping_address)
        .bind(&draft.payment_method)
        .bind(draft.payment_status.as_str())
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        for item in &draft.items {
            let decremented = sqlx::query(
                "UPDATE products SET stock = stock - ?1, updated_at = ?2
                 WHERE id = ?3 AND stock >= ?1",
            )
            .bind(item.quantity)
            .bind(now)
            .bind(item.product_id)
            .execute(&mut *tx)
            .await?;

            if decremented.rows_affected() == 0 {
                // Dropping `tx` rolls back the order and every item written so far
                return Err(stock_failure(&mut tx, item).await);
            }

            sqlx::query(
                "INSERT INTO order_items (order_id, product_id, quantity, price, created_at, updated_at)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(order_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(item.price.to_string())
            .bind(now)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        }

        let order = load_order(&mut tx, order_id).await?.ok_or_else(|| {
            DomainError::Persistence(format!("order {} vanished before commit", order_id))
        })?;

        tx.commit().await?;

        Ok(order)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Order>> {
        let mut conn = self.pool.acquire().await?;
        load_order(&mut conn, id).await
    }

    async fn find_all(&self, filter: &OrderFilter) -> DomainResult<Vec<Order>> {
        let status = filter.status.map(|s| s.as_str());

        // One snapshot for both queries so every listed order has its items
        let mut tx = self.pool.begin().await?;

        let rows = sqlx::query_as::<_, OrderRow>(
            "SELECT id, user_id, status, total_amount, shipping_address, payment_method,
                 payment_status, created_at, updated_at
             FROM orders
             WHERE (?1 IS NULL OR user_id = ?1) AND (?2 IS NULL OR status = ?2)
             ORDER BY id",
        )
        .bind(filter.user_id)
        .bind(status)
        .fetch_all(&mut *tx)
        .await?;

        let item_rows = sqlx::query_as::<_, OrderItemRow>(
            "SELECT oi.id, oi.order_id, oi.product_id, oi.quantity, oi.price, oi.created_at,
                 oi.updated_at
             FROM order_items oi
             JOIN orders o ON o.id = oi.order_id
             WHERE (?1 IS NULL OR o.user_id = ?1) AND (?2 IS NULL OR o.status = ?2)
             ORDER BY oi.order_id, oi.id",
        )
        .bind(filter.user_id)
        .bind(status)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        let mut items_by_order: HashMap<i64, Vec<OrderItem>> = HashMap::new();
        for row in item_rows {
            let item = OrderItem::try_from(row)?;
            items_by_order.entry(item.order_id).or_default().push(item);
        }

        rows.into_iter()
            .map(|row| {
                let items = items_by_order.remove(&row.id).unwrap_or_default();
                row.into_order(items)
            })
            .collect()
    }

    async fn update(&self, id: i64, patch: &OrderPatch) -> DomainResult<Option<Order>> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            "UPDATE orders SET
                 status = COALESCE(?1, status),
                 payment_status = COALESCE(?2, payment_status),
                 shipping_address = COALESCE(?3, shipping_address),
                 payment_method = COALESCE(?4, payment_method),
                 updated_at = ?5
             WHERE id = ?6",
        )
        .bind(patch.status.map(|s| s.as_str()))
        .bind(patch.payment_status.map(|s| s.as_str()))
        .bind(patch.shipping_address.as_deref())
        .bind(patch.payment_method.as_deref())
        .bind(Utc::now())
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Ok(None);
        }

        let order = load_order(&mut tx, id).await?;
        tx.commit().await?;

        Ok(order)
    }

    async fn delete(&self, id: i64) -> DomainResult<bool> {
        let deleted = sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(deleted.rows_affected() > 0)
    }
}
