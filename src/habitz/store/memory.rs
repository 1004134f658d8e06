use super::HabitStore;
use crate::error::{HabitzError, Result};
use crate::model::Habit;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct MemoryStore {
    habits: Mutex<Vec<Habit>>,
    writes: AtomicUsize,
    simulate_read_error: AtomicBool,
    simulate_write_error: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `save` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Enable read error simulation for testing error handling.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.store(simulate, Ordering::SeqCst);
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    /// Current contents, without counting as a store read.
    pub fn snapshot(&self) -> Vec<Habit> {
        self.habits
            .lock()
            .map(|habits| habits.clone())
            .unwrap_or_default()
    }
}

impl HabitStore for MemoryStore {
    fn load(&self) -> Result<Vec<Habit>> {
        if self.simulate_read_error.load(Ordering::SeqCst) {
            return Err(HabitzError::Store("Simulated read error".to_string()));
        }
        let habits = self
            .habits
            .lock()
            .map_err(|_| HabitzError::Store("memory store lock poisoned".to_string()))?;
        Ok(habits.clone())
    }

    fn save(&self, new_habits: &[Habit]) -> Result<()> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(HabitzError::Store("Simulated write error".to_string()));
        }
        let mut habits = self
            .habits
            .lock()
            .map_err(|_| HabitzError::Store("memory store lock poisoned".to_string()))?;
        *habits = new_habits.to_vec();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// --- Test Fixtures ---
