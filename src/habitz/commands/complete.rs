use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::HabitStore;
use chrono::NaiveDate;
use tracing::{debug, info};

use super::helpers::position_of;

/// Mark the habit done for `today`. A second call on the same day does not
/// touch the store.
pub fn run<S: HabitStore + ?Sized>(store: &S, id: &str, today: NaiveDate) -> Result<CmdResult> {
    let mut habits = store.load()?;
    let index = position_of(&habits, id)?;

    let newly_marked = habits[index].mark_completed(today);
    let habit = habits[index].clone();

    let mut result = CmdResult::default().with_affected_habits(vec![habit.clone()]);
    if newly_marked {
        store.save(&habits)?;
        info!(id = %habit.id, day = %today, "habit completed");
        result = result.persisted();
        result.add_message(CmdMessage::success("Marked as done"));
    } else {
        debug!(id = %habit.id, day = %today, "habit already completed today");
        result.add_message(CmdMessage::info("Already marked as done today"));
    }
    Ok(result)
}
