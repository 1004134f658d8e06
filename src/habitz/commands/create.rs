use crate::commands::{CmdMessage, CmdResult};
use crate::error::{HabitzError, Result};
use crate::model::Habit;
use crate::store::HabitStore;
use tracing::info;

pub fn run<S: HabitStore + ?Sized>(
    store: &S,
    name: &str,
    description: Option<&str>,
) -> Result<CmdResult> {
    let name = name.trim();
    if name.is_empty() {
        return Err(HabitzError::Validation("Habit name cannot be empty".into()));
    }

    let habit = Habit::new(name.to_string(), description.unwrap_or_default().to_string());
    let mut habits = store.load()?;
    habits.push(habit.clone());
    store.save(&habits)?;

    info!(id = %habit.id, name = %habit.name, "habit created");

    let mut result = CmdResult::default()
        .with_affected_habits(vec![habit.clone()])
        .persisted();
    result.add_message(CmdMessage::success(format!("Habit created: {}", habit.name)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::store::memory::MemoryStore;

    #[test]
    fn creates_habit_with_fresh_id_and_no_completions() {
        let store = MemoryStore::new();
        let result = run(&store, "Read", Some("daily")).unwrap();

        let habit = &result.affected_habits[0];
        assert!(!habit.id.is_nil());
        assert_eq!(habit.name, "Read");
        assert_eq!(habit.description, "daily");
        assert!(habit.completed_dates.is_empty());
        assert_eq!(store.write_count(), 1);

        let listed = list::run(&store).unwrap().listed_habits;
        assert_eq!(listed, vec![habit.clone()]);
    }

    #[test]
    fn ids_are_unique() {
        let store = MemoryStore::new();
        let a = run(&store, "A", None).unwrap().affected_habits.remove(0);
        let b = run(&store, "B", None).unwrap().affected_habits.remove(0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn missing_description_defaults_to_empty() {
        let store = MemoryStore::new();
        let result = run(&store, "Walk", None).unwrap();
        assert_eq!(result.affected_habits[0].description, "");
    }

    #[test]
    fn name_is_trimmed() {
        let store = MemoryStore::new();
        let result = run(&store, "  Stretch \n", None).unwrap();
        assert_eq!(result.affected_habits[0].name, "Stretch");
    }

    #[test]
    fn rejects_blank_names_without_writing() {
        let store = MemoryStore::new();
        run(&store, "Keep", None).unwrap();

        for name in ["", "   ", "\t\n"] {
            let err = run(&store, name, Some("x")).unwrap_err();
            assert!(matches!(err, HabitzError::Validation(_)));
        }

        assert_eq!(store.write_count(), 1);
        assert_eq!(store.snapshot().len(), 1);
    }

    #[test]
    fn surfaces_write_failures() {
        let store = MemoryStore::new();
        store.set_simulate_write_error(true);
        let err = run(&store, "Read", None).unwrap_err();
        assert!(err.is_storage());
        assert!(store.snapshot().is_empty());
    }
}
