// Shared fixtures for the integration tests
#![allow(dead_code)]

use std::sync::Arc;

use rust_decimal::Decimal;
use serde_json::{json, Value};

use storefront::application::dto::PlaceOrderRequest;
use storefront::application::usecase::OrderWorkflow;
use storefront::domain::models::{
    Category, NewCategory, NewProduct, NewUser, Order, OrderFilter, Product, User,
};
use storefront::domain::repository::{
    CategoryRepository, OrderRepository, ProductRepository, UserRepository,
};
use storefront::infrastructure::database::Database;

pub struct Shop {
    pub database: Database,
    pub user: User,
    pub category: Category,
}

impl Shop {
    pub async fn open() -> Self {
        Self::on(Database::in_memory().await.unwrap()).await
    }

    /// Seed a customer and a category into an already migrated database
    pub async fn on(database: Database) -> Self {
        let user = database
            .users()
            .create(&NewUser {
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                email: "ada@example.com".into(),
                role: "customer".into(),
            })
            .await
            .unwrap();

        let category = database
            .categories()
            .create(&NewCategory {
                name: "Hardware".into(),
                description: None,
            })
            .await
            .unwrap();

        Self {
            database,
            user,
            category,
        }
    }

    pub fn workflow(&self) -> Arc<OrderWorkflow> {
        Arc::new(OrderWorkflow::new(
            Arc::new(self.database.users()),
            Arc::new(self.database.products()),
            Arc::new(self.database.orders()),
        ))
    }

    pub async fn add_product(&self, name: &str, price: Decimal, stock: i64) -> Product {
        self.database
            .products()
            .create(&NewProduct {
                name: name.into(),
                description: format!("{} for testing", name),
                price,
                stock,
                category_id: self.category.id,
            })
            .await
            .unwrap()
    }

    pub async fn stock_of(&self, product_id: i64) -> i64 {
        self.database
            .products()
            .find_by_id(product_id)
            .await
            .unwrap()
            .expect("product exists")
            .stock
    }

    pub async fn all_orders(&self) -> Vec<Order> {
        self.database
            .orders()
            .find_all(&OrderFilter::default())
            .await
            .unwrap()
    }
}

/// Checkout body for `(product_id, quantity)` pairs, priced at 10.00 each
pub fn checkout_body(user_id: i64, items: &[(i64, i64)]) -> Value {
    let order_items: Vec<Value> = items
        .iter()
        .map(|(product_id, quantity)| {
            json!({ "productId": product_id, "quantity": quantity, "price": "10.00" })
        })
        .collect();

    json!({
        "userId": user_id,
        "totalAmount": format!("{}.00", 10 * items.iter().map(|(_, q)| q).sum::<i64>()),
        "shippingAddress": "1 Analytical Way, London",
        "paymentMethod": "card",
        "orderItems": order_items,
    })
}

pub fn checkout(user_id: i64, items: &[(i64, i64)]) -> PlaceOrderRequest {
    serde_json::from_value(checkout_body(user_id, items)).unwrap()
}
