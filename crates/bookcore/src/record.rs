use crate::{Birthday, ContactError, ContactSummary, Name, Phone, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single address book entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: Name,
    #[serde(default)]
    pub phones: Vec<Phone>,
    #[serde(default)]
    pub birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn with_phone(mut self, number: &str) -> Result<Self> {
        self.add_phone(number)?;
        Ok(self)
    }

    pub fn with_birthday(mut self, value: &str) -> Result<Self> {
        self.set_birthday(value)?;
        Ok(self)
    }

    pub fn add_phone(&mut self, number: &str) -> Result<&Phone> {
        let phone = Phone::new(number)?;
        if self.phones.contains(&phone) {
            return Err(ContactError::DuplicatePhone(phone.into()).into());
        }
        self.phones.push(phone);
        Ok(&self.phones[self.phones.len() - 1])
    }

    pub fn remove_phone(&mut self, number: &str) -> Result<Phone> {
        let phone = Phone::new(number)?;
        let index = self.position_of(&phone)?;
        Ok(self.phones.remove(index))
    }

    /// Replace `old` with `new` in place. Nothing changes unless both numbers
    /// are valid, `old` is on the record and `new` is not already there.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let old = Phone::new(old)?;
        let new = Phone::new(new)?;
        let index = self.position_of(&old)?;
        if old != new && self.phones.contains(&new) {
            return Err(ContactError::DuplicatePhone(new.into()).into());
        }
        self.phones[index] = new;
        Ok(())
    }

    pub fn find_phone(&self, number: &str) -> Result<&Phone> {
        let phone = Phone::new(number)?;
        let index = self.position_of(&phone)?;
        Ok(&self.phones[index])
    }

    pub fn set_birthday(&mut self, value: &str) -> Result<Birthday> {
        let birthday = Birthday::new(value)?;
        self.birthday = Some(birthday);
        Ok(birthday)
    }

    /// Phones joined the way they are shown to the user
    pub fn phone_list(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn position_of(&self, phone: &Phone) -> Result<usize> {
        self.phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| ContactError::PhoneNotFound(phone.to_string()).into())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&ContactSummary::from(self), f)
    }
}
