use crate::error::{HabitzError, Result};
use crate::model::Habit;
use uuid::Uuid;

/// Position of the habit with `id` in the loaded collection.
///
/// Only the stored form (lowercase, hyphenated) matches. Anything else,
/// including other spellings of the same UUID, is reported as not found.
pub fn position_of(habits: &[Habit], id: &str) -> Result<usize> {
    let not_found = || HabitzError::HabitNotFound(id.to_string());
    let uuid = Uuid::parse_str(id).map_err(|_| not_found())?;
    if uuid.hyphenated().to_string() != id {
        return Err(not_found());
    }
    habits
        .iter()
        .position(|h| h.id == uuid)
        .ok_or_else(not_found)
}
