use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::HabitStore;
use tracing::info;

use super::helpers::position_of;

pub fn run<S: HabitStore + ?Sized>(store: &S, id: &str) -> Result<CmdResult> {
    let mut habits = store.load()?;
    let index = position_of(&habits, id)?;
    let removed = habits.remove(index);
    store.save(&habits)?;

    info!(id = %removed.id, name = %removed.name, "habit deleted");

    let mut result = CmdResult::default()
        .with_affected_habits(vec![removed.clone()])
        .persisted();
    result.add_message(CmdMessage::success("Habit deleted"));
    Ok(result)
}
