//! Core of the ice-time cost planner: the plan model, its calculations,
//! and the store that keeps the plan, local storage and the shareable link
//! in step.

pub mod calculations;
pub mod models;
pub mod parse;
pub mod persistence;
pub mod query;
pub mod storage;
pub mod store;

pub use models::*;
pub use persistence::{PlanPersistence, STORAGE_KEY, StoredPlan};
pub use query::AddressBar;
pub use storage::{LocalStorage, StorageConfig, StorageError, StorageRegistry};
pub use store::{LoadSource, PlanStore};
