use bookcore::{AddressBook, BookError, Record, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Version written into every saved address book
pub const BOOK_FORMAT_VERSION: u32 = 1;

/// Somewhere an address book can be loaded from and saved to
pub trait BookStore {
    fn load(&self) -> Result<AddressBook>;

    fn save(&self, book: &AddressBook) -> Result<()>;
}

#[derive(Serialize)]
struct DocumentRef<'a> {
    version: u32,
    contacts: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct Document {
    version: u32,
    #[serde(default)]
    contacts: Vec<Record>,
}

/// Address book kept as a pretty-printed JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> Result<AddressBook> {
        if !self.path.exists() {
            tracing::info!("No address book at {}, starting empty", self.path.display());
            return Ok(AddressBook::new());
        }

        let raw = fs::read_to_string(&self.path)?;
        let document: Document = serde_json::from_str(&raw)?;
        if document.version != BOOK_FORMAT_VERSION {
            return Err(BookError::UnsupportedVersion(document.version));
        }

        let book: AddressBook = document.contacts.into_iter().collect();
        tracing::info!(
            "Loaded {} contacts from {}",
            book.len(),
            self.path.display()
        );
        Ok(book)
    }

    /// Writes a sibling temp file first and renames it over the target, so an
    /// interrupted save leaves the previous book intact.
    fn save(&self, book: &AddressBook) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let document = DocumentRef {
            version: BOOK_FORMAT_VERSION,
            contacts: book.records().collect(),
        };
        let json = serde_json::to_string_pretty(&document)?;

        let temp = self.temp_path();
        fs::write(&temp, json)?;
        fs::rename(&temp, &self.path)?;

        tracing::info!("Saved {} contacts to {}", book.len(), self.path.display());
        Ok(())
    }
}

/// In-process store, for tests and dry runs
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    book: AddressBook,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: AddressBook) -> Self {
        Self {
            inner: Mutex::new(MemoryState { book, saves: 0 }),
        }
    }

    /// Book as of the last save
    pub fn snapshot(&self) -> AddressBook {
        self.state().book.clone()
    }

    pub fn save_count(&self) -> usize {
        self.state().saves
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl BookStore for MemoryStore {
    fn load(&self) -> Result<AddressBook> {
        Ok(self.state().book.clone())
    }

    fn save(&self, book: &AddressBook) -> Result<()> {
        let mut state = self.state();
        state.book = book.clone();
        state.saves += 1;
        Ok(())
    }
}
