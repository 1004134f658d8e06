//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for habit operations, whatever the transport in front of it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (optional description, today's date from the clock)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no HTTP work. Status codes and JSON bodies are decided in `http/`.
//!
//! ## Generic Over HabitStore
//!
//! `HabitsApi<S: HabitStore>` is generic over the storage backend:
//! - Production: `HabitsApi<FileStore>`
//! - Testing: `HabitsApi<MemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::store::HabitStore;
use chrono::{Local, NaiveDate};

/// Source of "today" for completion marks.
pub type Clock = fn() -> NaiveDate;

/// The server's local calendar day.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// The main API facade for habit operations.
pub struct HabitsApi<S: HabitStore> {
    store: S,
    clock: Clock,
}

impl<S: HabitStore> HabitsApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            clock: local_today,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn list_habits(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn create_habit(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::create::run(&self.store, name, description)
    }

    pub fn delete_habit(&self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&self.store, id)
    }

    pub fn complete_habit(&self, id: &str) -> Result<commands::CmdResult> {
        commands::complete::run(&self.store, id, self.today())
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HabitzError;
    use crate::store::memory::MemoryStore;

    fn fixed_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn api() -> HabitsApi<MemoryStore> {
        HabitsApi::new(MemoryStore::new()).with_clock(fixed_day)
    }

    #[test]
    fn complete_uses_injected_clock() {
        let api = api();
        let id = api.create_habit("Read", None).unwrap().affected_habits[0]
            .id
            .to_string();

        let result = api.complete_habit(&id).unwrap();
        assert_eq!(result.affected_habits[0].completed_dates, vec![fixed_day()]);
    }

    #[test]
    fn default_clock_is_local_day() {
        let api = HabitsApi::new(MemoryStore::new());
        assert_eq!(api.today(), Local::now().date_naive());
    }

    #[test]
    fn read_complete_delete_scenario() {
        let api = api();

        let created = api.create_habit("Read", Some("daily")).unwrap();
        let habit = &created.affected_habits[0];
        assert!(habit.completed_dates.is_empty());
        let id = habit.id.to_string();

        api.complete_habit(&id).unwrap();
        let second = api.complete_habit(&id).unwrap();
        assert_eq!(second.affected_habits[0].completed_dates.len(), 1);

        api.delete_habit(&id).unwrap();
        assert!(api.list_habits().unwrap().listed_habits.is_empty());
        // create, first complete, delete
        assert_eq!(api.store().write_count(), 3);
    }

    #[test]
    fn completing_unknown_id_does_not_write() {
        let api = api();
        let err = api.complete_habit("missing").unwrap_err();
        assert!(matches!(err, HabitzError::HabitNotFound(_)));
        assert_eq!(api.store().write_count(), 0);
    }
}
