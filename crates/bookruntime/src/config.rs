use bookcore::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use std::path::PathBuf;

/// File the address book is kept in when no path is given
pub const DEFAULT_STORAGE_FILE: &str = "addressbook.json";

/// Configuration for an assistant session
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub storage_path: PathBuf,
    pub birthday_window_days: u32,
    /// Save after every command that changes the book, not only on exit
    pub autosave: bool,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_FILE),
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            autosave: false,
        }
    }
}
