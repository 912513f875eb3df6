//! File-backed [`LocalStorage`](ice_core::LocalStorage) for the planner.

mod factory;
mod storage;

pub use factory::FileStorageFactory;
pub use storage::FileStorage;
