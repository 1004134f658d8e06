use crate::model::Habit;

pub mod complete;
pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Habits created, removed or updated by the command.
    pub affected_habits: Vec<Habit>,
    pub listed_habits: Vec<Habit>,
    /// Whether the command rewrote the document.
    pub persisted: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_habits(mut self, habits: Vec<Habit>) -> Self {
        self.affected_habits = habits;
        self
    }

    pub fn with_listed_habits(mut self, habits: Vec<Habit>) -> Self {
        self.listed_habits = habits;
        self
    }

    pub fn persisted(mut self) -> Self {
        self.persisted = true;
        self
    }

    /// Text of the first message, if any.
    pub fn headline(&self) -> Option<&str> {
        self.messages.first().map(|m| m.content.as_str())
    }
}
