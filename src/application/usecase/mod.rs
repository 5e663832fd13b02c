pub mod order_usecase;

// Re-export public API
pub use order_usecase::{OrderUseCase, OrderWorkflow};
