//! # Command Layer
//!
//! One module per user-facing operation. Each exposes a `run` function that
//! takes the [`AddressBook`](crate::book::AddressBook) plus plain arguments and
//! returns a [`CmdResult`]. Commands never print and never touch the disk;
//! persistence is the API's job.

use crate::model::Record;

pub mod add;
pub mod birthday;
pub mod change;
pub mod create;
pub mod days;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod remove;
pub mod search;
pub mod show;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
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

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created or changed by the command, in their final state.
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<Record>,
    pub pages: Vec<Vec<Record>>,
    pub days_to_birthday: Option<i64>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_pages(mut self, pages: Vec<Vec<Record>>) -> Self {
        self.pages = pages;
        self
    }

    pub fn with_days_to_birthday(mut self, days: i64) -> Self {
        self.days_to_birthday = Some(days);
        self
    }
}
