use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    // Serialized as "YYYY-MM-DD"; kept in the order the days were marked
    #[serde(default)]
    pub completed_dates: Vec<NaiveDate>,
}

impl Habit {
    pub fn new(name: String, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            created_at: Utc::now(),
            completed_dates: Vec::new(),
        }
    }

    pub fn is_completed_on(&self, day: NaiveDate) -> bool {
        self.completed_dates.contains(&day)
    }

    /// Records `day` as done. Returns false when it was already recorded.
    pub fn mark_completed(&mut self, day: NaiveDate) -> bool {
        if self.is_completed_on(day) {
            return false;
        }
        self.completed_dates.push(day);
        true
    }
}
