//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Key-value storage (LocalStorage on web, in-memory elsewhere)
//! - The current calendar date

pub mod clock;
pub mod storage;

pub use clock::{Clock, FixedClock, SystemClock};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use storage::{KeyValueStore, MemoryStore, StorageError};
