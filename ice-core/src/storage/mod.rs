pub mod backend;
pub mod factory;
pub mod memory;

pub use backend::{LocalStorage, StorageError};
pub use factory::{StorageConfig, StorageFactory, StorageRegistry};
pub use memory::{MemoryStorage, MemoryStorageFactory};
