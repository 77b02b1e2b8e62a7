//! Service layer for Horizon
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, audit logging, and the projection entry points.

pub mod account;
pub mod category;
pub mod planning;
pub mod projection;
pub mod transaction;

pub use account::AccountService;
pub use category::CategoryService;
pub use planning::PlanningService;
pub use projection::ProjectionService;
pub use transaction::TransactionService;
