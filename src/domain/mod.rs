// src/domain/mod.rs
pub mod errors;
pub mod models;
pub mod repository;

// Re-export common types for convenience
pub use errors::{AppError, AppResult, DomainError, DomainResult};
pub use models::{
    Category, LineItem, NewCategory, NewProduct, NewUser, Order, OrderDraft, OrderFilter,
    OrderItem, OrderPatch, OrderStatus, PaymentStatus, Product, User,
};
pub use repository::{CategoryRepository, OrderRepository, ProductRepository, UserRepository};
