use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("{0}")]
    Field(#[from] FieldError),

    #[error("{0}")]
    Contact(#[from] ContactError),

    #[error("{0}")]
    Input(#[from] InputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported address book version: {0}")]
    UnsupportedVersion(u32),
}

impl BookError {
    /// Storage failures end the session; everything else is reported and the
    /// session carries on.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BookError::Field(_) | BookError::Contact(_) | BookError::Input(_)
        )
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Invalid phone number: {0} (expected 10 digits)")]
    InvalidPhone(String),

    #[error("Invalid date format: {0}. Use DD.MM.YYYY")]
    InvalidBirthday(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Contact not found: {0}")]
    NotFound(String),

    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    #[error("Phone number already exists: {0}")]
    DuplicatePhone(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input, please try again. Usage: {usage}")]
    WrongArity { usage: String },
}
