use crate::{ContactError, ContactSummary, Record, Result, UpcomingBirthday};
use crate::field::BIRTHDAY_FORMAT;
use chrono::{Days, NaiveDate};
use std::collections::BTreeMap;

/// Default lookahead for [`AddressBook::upcoming_birthdays`].
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// Contacts keyed by name, iterated in name order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any existing record with the same name.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name.to_string();
        tracing::debug!(name = %key, "Storing contact");
        self.records.insert(key, record)
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find(&self, name: &str) -> Result<&Record> {
        self.records
            .get(name)
            .ok_or_else(|| ContactError::NotFound(name.to_string()).into())
    }

    pub fn find_mut(&mut self, name: &str) -> Result<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| ContactError::NotFound(name.to_string()).into())
    }

    pub fn delete(&mut self, name: &str) -> bool {
        self.records.remove(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn contacts(&self) -> Vec<ContactSummary> {
        self.records().map(ContactSummary::from).collect()
    }

    /// Contacts whose next birthday falls within `window_days` of `today`,
    /// both ends inclusive, soonest first.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
        let horizon = today
            .checked_add_days(Days::new(u64::from(window_days)))
            .unwrap_or(NaiveDate::MAX);
        let mut upcoming: Vec<(NaiveDate, &Record)> = self
            .records()
            .filter_map(|record| {
                let next = record.birthday.as_ref().map(|b| b.next_anniversary(today))?;
                (next <= horizon).then_some((next, record))
            })
            .collect();
        upcoming.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.name.cmp(&b.1.name)));

        upcoming
            .into_iter()
            .map(|(date, record)| UpcomingBirthday {
                name: record.name.to_string(),
                birthday: date.format(BIRTHDAY_FORMAT).to_string(),
            })
            .collect()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
