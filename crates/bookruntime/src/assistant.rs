use crate::command::Input;
use crate::config::AssistantConfig;
use crate::registry::{CommandKind, CommandRegistry};
use crate::storage::BookStore;
use bookcore::{AddressBook, Record, Result, UserView};
use chrono::{Local, NaiveDate};

/// What the session should do after a line has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interprets assistant commands against an address book
pub struct Assistant<S: BookStore> {
    book: AddressBook,
    store: S,
    config: AssistantConfig,
    registry: CommandRegistry,
    dirty: bool,
}

impl<S: BookStore> Assistant<S> {
    /// Load the book from `store` and start a session over it
    pub fn open(store: S, config: AssistantConfig) -> Result<Self> {
        let book = store.load()?;
        Ok(Self::with_book(book, store, config))
    }

    pub fn with_book(book: AddressBook, store: S, config: AssistantConfig) -> Self {
        Self {
            book,
            store,
            config,
            registry: CommandRegistry::with_builtins(),
            dirty: false,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether the book has changes that have not been saved yet
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.book)?;
        self.dirty = false;
        Ok(())
    }

    /// Handle one line of input, using the local date for birthday lookups
    pub fn handle_line(&mut self, line: &str, view: &mut dyn UserView) -> Result<Flow> {
        let today = Local::now().date_naive();
        self.handle_line_on(line, view, today)
    }

    /// Handle one line of input as if it were `today`.
    ///
    /// Mistakes in the input or against the book are shown through `view` and
    /// the session carries on. Storage failures are returned.
    pub fn handle_line_on(
        &mut self,
        line: &str,
        view: &mut dyn UserView,
        today: NaiveDate,
    ) -> Result<Flow> {
        let Some(input) = Input::parse(line) else {
            return Ok(Flow::Continue);
        };

        let Some(kind) = self.registry.resolve(&input.keyword) else {
            tracing::debug!("Unknown command: {}", input.keyword);
            view.show_message("Invalid command.");
            return Ok(Flow::Continue);
        };

        tracing::debug!(command = ?kind, args = input.args.len(), "Dispatching command");
        match self.dispatch(kind, &input, view, today) {
            Ok(flow) => {
                if kind.is_mutating() && self.dirty && self.config.autosave {
                    self.save()?;
                }
                Ok(flow)
            }
            Err(e) if e.is_recoverable() => {
                tracing::debug!("Command {:?} rejected: {}", kind, e);
                view.show_message(&e.to_string());
                Ok(Flow::Continue)
            }
            Err(e) => Err(e),
        }
    }

    fn dispatch(
        &mut self,
        kind: CommandKind,
        input: &Input,
        view: &mut dyn UserView,
        today: NaiveDate,
    ) -> Result<Flow> {
        let usage = self.registry.usage(kind);
        match kind {
            CommandKind::Hello => {
                view.show_message("How can I help you?");
            }
            CommandKind::Add => {
                let [name, phone] = input.expect_args::<2>(usage)?;
                self.add_contact(name, phone)?;
                view.show_message(&format!(
                    "Contact {} added with phone number {}",
                    name, phone
                ));
            }
            CommandKind::Change => {
                let [name, old, new] = input.expect_args::<3>(usage)?;
                self.book.find_mut(name)?.edit_phone(old, new)?;
                self.dirty = true;
                view.show_message(&format!(
                    "Phone number for {} changed from {} to {}",
                    name, old, new
                ));
            }
            CommandKind::Phone => {
                let [name] = input.expect_args::<1>(usage)?;
                let record = self.book.find(name)?;
                view.show_message(&format!("{}'s phones: {}", name, record.phone_list()));
            }
            CommandKind::All => {
                input.expect_args::<0>(usage)?;
                if self.book.is_empty() {
                    view.show_message("No contacts saved.");
                } else {
                    view.show_contacts(&self.book.contacts());
                }
            }
            CommandKind::Delete => match input.optional_arg(usage)? {
                None => view.show_message("Please provide the name of the contact to delete."),
                Some(name) => {
                    if self.book.delete(name) {
                        self.dirty = true;
                        view.show_message(&format!("Contact {} deleted", name));
                    } else {
                        view.show_message(&format!("Contact {} not found", name));
                    }
                }
            },
            CommandKind::AddBirthday => {
                let [name, birthday] = input.expect_args::<2>(usage)?;
                self.book.find_mut(name)?.set_birthday(birthday)?;
                self.dirty = true;
                view.show_message(&format!("Birthday for {} added.", name));
            }
            CommandKind::ShowBirthday => match input.optional_arg(usage)? {
                None => view.show_message("Please provide the contact name."),
                Some(name) => match self.book.get(name).and_then(|r| r.birthday) {
                    Some(birthday) => {
                        view.show_message(&format!("{}'s birthday is {}", name, birthday))
                    }
                    None => view.show_message(&format!("No birthday found for {}.", name)),
                },
            },
            CommandKind::Birthdays => {
                input.expect_args::<0>(usage)?;
                let window = self.config.birthday_window_days;
                let upcoming = self.book.upcoming_birthdays(today, window);
                if upcoming.is_empty() {
                    view.show_message(&format!(
                        "No upcoming birthdays in the next {} days.",
                        window
                    ));
                } else {
                    view.show_birthdays(&upcoming);
                }
            }
            CommandKind::Help => {
                view.show_message(&self.registry.help_text());
            }
            CommandKind::Exit => {
                self.save()?;
                view.show_message("Good bye!");
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Add `phone` to `name`, creating the contact if it does not exist yet.
    /// A rejected phone leaves the book untouched.
    fn add_contact(&mut self, name: &str, phone: &str) -> Result<()> {
        if self.book.get(name).is_some() {
            self.book.find_mut(name)?.add_phone(phone)?;
        } else {
            let record = Record::new(name)?.with_phone(phone)?;
            self.book.add_record(record);
        }
        self.dirty = true;
        Ok(())
    }
}
