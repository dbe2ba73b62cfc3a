//! Assistant runtime
//!
//! Parses command lines, runs them against an address book, renders the
//! results through a [`bookcore::UserView`] and persists the book.

mod assistant;
mod command;
mod config;
mod console;
mod registry;
mod session;
mod storage;

pub use assistant::{Assistant, Flow};
pub use command::Input;
pub use config::{AssistantConfig, DEFAULT_STORAGE_FILE};
pub use console::ConsoleView;
pub use registry::{CommandKind, CommandRegistry, CommandSpec};
pub use session::{run_session, SessionEnd};
pub use storage::{BookStore, JsonFileStore, MemoryStore, BOOK_FORMAT_VERSION};
