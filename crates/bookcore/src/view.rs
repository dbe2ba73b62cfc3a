use crate::Record;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output seam for the assistant. Console, buffers and JSON export all sit
/// behind it.
pub trait UserView {
    fn show_message(&mut self, message: &str);

    fn show_contacts(&mut self, contacts: &[ContactSummary]);

    fn show_birthdays(&mut self, birthdays: &[UpcomingBirthday]);
}

/// Flattened contact row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSummary {
    pub name: String,
    pub phones: Vec<String>,
    pub birthday: Option<String>,
}

impl From<&Record> for ContactSummary {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name.to_string(),
            phones: record.phones.iter().map(|p| p.to_string()).collect(),
            birthday: record.birthday.map(|b| b.to_string()),
        }
    }
}

impl fmt::Display for ContactSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Phone: {}, Birthday: {}",
            self.name,
            self.phones.join(", "),
            self.birthday.as_deref().unwrap_or("No birthday")
        )
    }
}

/// A birthday whose next anniversary falls inside the lookahead window.
/// `birthday` is that anniversary, formatted `DD.MM.YYYY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthday {
    pub name: String,
    pub birthday: String,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Birthday: {}", self.name, self.birthday)
    }
}
