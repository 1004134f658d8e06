use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::HabitStore;

pub fn run<S: HabitStore + ?Sized>(store: &S) -> Result<CmdResult> {
    let habits = store.load()?;
    Ok(CmdResult::default().with_listed_habits(habits))
}
