// crates/bookruntime/tests/assistant_test.rs

use bookcore::{AddressBook, ContactSummary, Record, UpcomingBirthday, UserView};
use bookruntime::{Assistant, AssistantConfig, Flow, MemoryStore};
use chrono::NaiveDate;

/// Initialize tracing for tests
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};
    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Collects everything the assistant shows, one entry per line
#[derive(Default)]
struct RecordingView {
    lines: Vec<String>,
}

impl RecordingView {
    fn last(&self) -> &str {
        self.lines.last().map(String::as_str).unwrap_or("")
    }
}

impl UserView for RecordingView {
    fn show_message(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }

    fn show_contacts(&mut self, contacts: &[ContactSummary]) {
        self.lines.extend(contacts.iter().map(|c| c.to_string()));
    }

    fn show_birthdays(&mut self, birthdays: &[UpcomingBirthday]) {
        self.lines.extend(birthdays.iter().map(|b| b.to_string()));
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

fn assistant() -> Assistant<MemoryStore> {
    init_tracing();
    Assistant::open(MemoryStore::new(), AssistantConfig::default()).unwrap()
}

fn run(assistant: &mut Assistant<MemoryStore>, view: &mut RecordingView, line: &str) -> Flow {
    assistant.handle_line_on(line, view, today()).unwrap()
}

#[test]
fn test_greeting_and_unknown_commands() {
    let mut a = assistant();
    let mut view = RecordingView::default();

    for greeting in ["hello", "HI", "Hey"] {
        run(&mut a, &mut view, greeting);
        assert_eq!(view.last(), "How can I help you?");
    }

    run(&mut a, &mut view, "dance");
    assert_eq!(view.last(), "Invalid command.");

    let before = view.lines.len();
    assert_eq!(run(&mut a, &mut view, "   "), Flow::Continue);
    assert_eq!(view.lines.len(), before, "blank input prints nothing");
}

#[test]
fn test_add_creates_then_extends_contact() {
    let mut a = assistant();
    let mut view = RecordingView::default();

    run(&mut a, &mut view, "add John 1234567890");
    assert_eq!(view.last(), "Contact John added with phone number 1234567890");

    run(&mut a, &mut view, "add John 0987654321");
    run(&mut a, &mut view, "phone John");
    assert_eq!(view.last(), "John's phones: 1234567890, 0987654321");
    assert!(a.is_dirty());
}

#[test]
fn test_add_keeps_existing_birthday() {
    let mut a = assistant();
    let mut view = RecordingView::default();

    run(&mut a, &mut view, "add Ann 1111111111");
    run(&mut a, &mut view, "add-birthday Ann 12.06.1990");
    run(&mut a, &mut view, "add Ann 2222222222");
    run(&mut a, &mut view, "show-birthday Ann");
    assert_eq!(view.last(), "Ann's birthday is 12.06.1990");
}

#[test]
fn test_invalid_input_is_reported_not_fatal() {
    let mut a = assistant();
    let mut view = RecordingView::default();

    run(&mut a, &mut view, "add John 12345");
    assert!(view.last().starts_with("Invalid phone number: 12345"));
    assert!(a.book().get("John").is_none(), "rejected phone creates nothing");

    run(&mut a, &mut view, "add John");
    assert_eq!(
        view.last(),
        "Invalid input, please try again. Usage: add <name> <phone>"
    );

    run(&mut a, &mut view, "phone Nobody");
    assert_eq!(view.last(), "Contact not found: Nobody");

    assert!(!a.is_dirty());
}

#[test]
fn test_change_phone() {
    let mut a = assistant();
    let mut view = RecordingView::default();

    run(&mut a, &mut view, "add John 1111111111");
    run(&mut a, &mut view, "change John 1111111111 2222222222");
    assert_eq!(
        view.last(),
        "Phone number for John changed from 1111111111 to 2222222222"
    );

    run(&mut a, &mut view, "change John 1111111111 3333333333");
    assert_eq!(view.last(), "Phone number not found: 1111111111");

    run(&mut a, &mut view, "phone John");
    assert_eq!(view.last(), "John's phones: 2222222222");
}

#[test]
fn test_delete_messages() {
    let mut a = assistant();
    let mut view = RecordingView::default();

    run(&mut a, &mut view, "delete");
    assert_eq!(
        view.last(),
        "Please provide the name of the contact to delete."
    );

    run(&mut a, &mut view, "add John 1111111111");
    run(&mut a, &mut view, "delete John");
    assert_eq!(view.last(), "Contact John deleted");

    run(&mut a, &mut view, "delete John");
    assert_eq!(view.last(), "Contact John not found");
}

#[test]
fn test_birthday_commands() {
    let mut a = assistant();
    let mut view = RecordingView::default();

    run(&mut a, &mut view, "show-birthday");
    assert_eq!(view.last(), "Please provide the contact name.");

    run(&mut a, &mut view, "add-birthday Ghost 01.01.2000");
    assert_eq!(view.last(), "Contact not found: Ghost");

    run(&mut a, &mut view, "add Ann 1111111111");
    run(&mut a, &mut view, "show-birthday Ann");
    assert_eq!(view.last(), "No birthday found for Ann.");

    run(&mut a, &mut view, "add-birthday Ann 2000-01-01");
    assert_eq!(view.last(), "Invalid date format: 2000-01-01. Use DD.MM.YYYY");

    run(&mut a, &mut view, "add-birthday Ann 14.06.1990");
    assert_eq!(view.last(), "Birthday for Ann added.");

    run(&mut a, &mut view, "birthdays");
    assert_eq!(view.last(), "Name: Ann, Birthday: 14.06.2024");
}

#[test]
fn test_birthdays_respects_configured_window() {
    init_tracing();
    let book: AddressBook = vec![Record::new("Ann")
        .unwrap()
        .with_phone("1111111111")
        .unwrap()
        .with_birthday("20.06.1990")
        .unwrap()]
    .into_iter()
    .collect();

    let mut narrow = Assistant::with_book(book.clone(), MemoryStore::new(), AssistantConfig::default());
    let mut view = RecordingView::default();
    run(&mut narrow, &mut view, "birthdays");
    assert_eq!(view.last(), "No upcoming birthdays in the next 7 days.");

    let config = AssistantConfig {
        birthday_window_days: 14,
        ..AssistantConfig::default()
    };
    let mut wide = Assistant::with_book(book, MemoryStore::new(), config);
    run(&mut wide, &mut view, "birthdays");
    assert_eq!(view.last(), "Name: Ann, Birthday: 20.06.2024");
}

#[test]
fn test_all_lists_contacts() {
    let mut a = assistant();
    let mut view = RecordingView::default();

    run(&mut a, &mut view, "all");
    assert_eq!(view.last(), "No contacts saved.");

    run(&mut a, &mut view, "add Bob 2222222222");
    run(&mut a, &mut view, "add Ann 1111111111");
    run(&mut a, &mut view, "add-birthday Ann 01.01.1990");
    view.lines.clear();

    run(&mut a, &mut view, "all");
    assert_eq!(
        view.lines,
        vec![
            "Name: Ann, Phone: 1111111111, Birthday: 01.01.1990",
            "Name: Bob, Phone: 2222222222, Birthday: No birthday",
        ]
    );
}

#[test]
fn test_help_lists_every_command() {
    let mut a = assistant();
    let mut view = RecordingView::default();

    run(&mut a, &mut view, "help");
    let help = view.last();
    for usage in [
        "add <name> <phone>",
        "change <name> <old_phone> <new_phone>",
        "show-birthday <name>",
        "birthdays",
        "exit",
    ] {
        assert!(help.contains(usage), "help is missing {usage}");
    }
}

#[test]
fn test_exit_saves_and_stops() {
    let mut a = assistant();
    let mut view = RecordingView::default();

    run(&mut a, &mut view, "add John 1111111111");
    assert_eq!(a.store().save_count(), 0);

    assert_eq!(run(&mut a, &mut view, "close"), Flow::Exit);
    assert_eq!(view.last(), "Good bye!");
    assert_eq!(a.store().save_count(), 1);
    assert!(a.store().snapshot().get("John").is_some());
    assert!(!a.is_dirty());
}

#[test]
fn test_autosave_after_each_change() {
    init_tracing();
    let config = AssistantConfig {
        autosave: true,
        ..AssistantConfig::default()
    };
    let mut a = Assistant::open(MemoryStore::new(), config).unwrap();
    let mut view = RecordingView::default();

    run(&mut a, &mut view, "add John 1111111111");
    assert_eq!(a.store().save_count(), 1);

    run(&mut a, &mut view, "phone John");
    run(&mut a, &mut view, "add John bad");
    assert_eq!(a.store().save_count(), 1, "reads and rejected changes don't save");

    run(&mut a, &mut view, "delete John");
    assert_eq!(a.store().save_count(), 2);
    assert!(a.store().snapshot().is_empty());
}

#[test]
fn test_open_loads_existing_book() {
    init_tracing();
    let book: AddressBook = vec![Record::new("Ann").unwrap().with_phone("1111111111").unwrap()]
        .into_iter()
        .collect();
    let mut a = Assistant::open(MemoryStore::with_book(book), AssistantConfig::default()).unwrap();
    let mut view = RecordingView::default();

    run(&mut a, &mut view, "phone Ann");
    assert_eq!(view.last(), "Ann's phones: 1111111111");
}

#[test]
fn test_single_name_commands_reject_extra_arguments() {
    let mut a = assistant();
    let mut view = RecordingView::default();

    run(&mut a, &mut view, "add Ann 1111111111");
    run(&mut a, &mut view, "add Bob 2222222222");
    run(&mut a, &mut view, "add-birthday Ann 01.01.1990");

    run(&mut a, &mut view, "delete Ann Bob");
    assert_eq!(
        view.last(),
        "Invalid input, please try again. Usage: delete <name>"
    );
    assert_eq!(a.book().len(), 2, "nobody is deleted");

    run(&mut a, &mut view, "show-birthday Ann Bob");
    assert_eq!(
        view.last(),
        "Invalid input, please try again. Usage: show-birthday <name>"
    );
}

#[test]
fn test_change_to_existing_number_is_rejected() {
    let mut a = assistant();
    let mut view = RecordingView::default();

    run(&mut a, &mut view, "add John 1111111111");
    run(&mut a, &mut view, "add John 2222222222");
    run(&mut a, &mut view, "change John 1111111111 2222222222");
    assert_eq!(view.last(), "Phone number already exists: 2222222222");

    run(&mut a, &mut view, "phone John");
    assert_eq!(view.last(), "John's phones: 1111111111, 2222222222");
}

#[test]
fn test_birthdays_with_largest_window() {
    init_tracing();
    let book: AddressBook = vec![Record::new("Ann")
        .unwrap()
        .with_phone("1111111111")
        .unwrap()
        .with_birthday("01.04.1990")
        .unwrap()]
    .into_iter()
    .collect();
    let config = AssistantConfig {
        birthday_window_days: u32::MAX,
        ..AssistantConfig::default()
    };
    let mut a = Assistant::with_book(book, MemoryStore::new(), config);
    let mut view = RecordingView::default();

    assert_eq!(run(&mut a, &mut view, "birthdays"), Flow::Continue);
    assert_eq!(view.last(), "Name: Ann, Birthday: 01.04.2025");
}
