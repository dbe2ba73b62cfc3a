//! Core address book types
//!
//! Validated contact fields, records, the address book itself and the view
//! trait the assistant renders through. Nothing here touches the filesystem
//! or the terminal.

mod book;
mod error;
mod field;
mod record;
mod view;

pub use book::{AddressBook, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use error::{BookError, ContactError, FieldError, InputError};
pub use field::{Birthday, Name, Phone, BIRTHDAY_FORMAT};
pub use record::Record;
pub use view::{ContactSummary, UpcomingBirthday, UserView};

/// Result type for address book operations
pub type Result<T> = std::result::Result<T, BookError>;
