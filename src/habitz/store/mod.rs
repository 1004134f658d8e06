//! # Storage Layer
//!
//! The whole habit collection lives in one JSON document. The [`HabitStore`]
//! trait is the only way the rest of the crate touches it, so the API layer
//! never knows about file paths.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - One pretty-printed JSON array on disk (`db.json` by default)
//!   - Writes go to a temp file that is renamed over the document
//!   - A missing or corrupt document loads as empty and is rewritten
//!
//! - [`memory::MemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Counts writes and can simulate write failures
//!
//! ## Consistency
//!
//! There is no locking. Two requests that both load and then save can race,
//! and the last save wins.

use crate::error::Result;
use crate::model::Habit;

pub mod fs;
pub mod memory;

/// A store shared between request tasks.
pub type SharedStore = std::sync::Arc<dyn HabitStore>;

/// Abstract interface for the habit document.
///
/// Both methods take `&self`; implementations that hold state use interior
/// mutability so a store can be shared across request tasks.
pub trait HabitStore: Send + Sync {
    /// Read the full collection, in creation order.
    fn load(&self) -> Result<Vec<Habit>>;

    /// Replace the full collection.
    fn save(&self, habits: &[Habit]) -> Result<()>;
}

impl<S: HabitStore + ?Sized> HabitStore for std::sync::Arc<S> {
    fn load(&self) -> Result<Vec<Habit>> {
        (**self).load()
    }

    fn save(&self, habits: &[Habit]) -> Result<()> {
        (**self).save(habits)
    }
}
