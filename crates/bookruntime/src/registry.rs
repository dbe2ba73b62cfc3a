use std::collections::HashMap;

/// Every command the assistant understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Hello,
    Add,
    Change,
    Phone,
    All,
    Delete,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Help,
    Exit,
}

impl CommandKind {
    /// Whether a successful run of the command changes the book
    pub fn is_mutating(self) -> bool {
        matches!(
            self,
            CommandKind::Add | CommandKind::Change | CommandKind::Delete | CommandKind::AddBirthday
        )
    }
}

/// Keyword, aliases and help text for one command
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub kind: CommandKind,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub usage: &'static str,
    pub description: &'static str,
}

impl CommandSpec {
    pub fn keywords(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }
}

/// Registry of the commands available in a session
pub struct CommandRegistry {
    specs: Vec<CommandSpec>,
    keywords: HashMap<String, CommandKind>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            specs: Vec::new(),
            keywords: HashMap::new(),
        }
    }

    /// Registry holding the built-in command set
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for spec in builtin_specs() {
            registry.register(spec);
        }
        registry
    }

    /// Register a command under its name and aliases. A later registration
    /// takes over any keyword it shares with an earlier one.
    pub fn register(&mut self, spec: CommandSpec) {
        tracing::debug!("Registering command: {}", spec.name);
        for keyword in spec.keywords() {
            self.keywords.insert(keyword.to_string(), spec.kind);
        }
        self.specs.push(spec);
    }

    /// Resolve a keyword, ignoring case
    pub fn resolve(&self, keyword: &str) -> Option<CommandKind> {
        self.keywords.get(&keyword.to_lowercase()).copied()
    }

    pub fn spec(&self, kind: CommandKind) -> Option<&CommandSpec> {
        self.specs.iter().find(|s| s.kind == kind)
    }

    pub fn usage(&self, kind: CommandKind) -> &'static str {
        self.spec(kind).map(|s| s.usage).unwrap_or("help")
    }

    pub fn specs(&self) -> &[CommandSpec] {
        &self.specs
    }

    /// One line per command, usage then description
    pub fn help_text(&self) -> String {
        let width = self.specs.iter().map(|s| s.usage.len()).max().unwrap_or(0);
        self.specs
            .iter()
            .map(|s| format!("{:<width$}  {}", s.usage, s.description, width = width))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

fn builtin_specs() -> Vec<CommandSpec> {
    vec![
        CommandSpec {
            kind: CommandKind::Hello,
            name: "hello",
            aliases: &["hi", "hey"],
            usage: "hello",
            description: "Greet the assistant",
        },
        CommandSpec {
            kind: CommandKind::Add,
            name: "add",
            aliases: &[],
            usage: "add <name> <phone>",
            description: "Add a contact, or another phone to an existing one",
        },
        CommandSpec {
            kind: CommandKind::Change,
            name: "change",
            aliases: &[],
            usage: "change <name> <old_phone> <new_phone>",
            description: "Replace one of a contact's phone numbers",
        },
        CommandSpec {
            kind: CommandKind::Phone,
            name: "phone",
            aliases: &[],
            usage: "phone <name>",
            description: "Show a contact's phone numbers",
        },
        CommandSpec {
            kind: CommandKind::All,
            name: "all",
            aliases: &[],
            usage: "all",
            description: "Show every contact",
        },
        CommandSpec {
            kind: CommandKind::Delete,
            name: "delete",
            aliases: &[],
            usage: "delete <name>",
            description: "Delete a contact",
        },
        CommandSpec {
            kind: CommandKind::AddBirthday,
            name: "add-birthday",
            aliases: &[],
            usage: "add-birthday <name> <DD.MM.YYYY>",
            description: "Set a contact's birthday",
        },
        CommandSpec {
            kind: CommandKind::ShowBirthday,
            name: "show-birthday",
            aliases: &[],
            usage: "show-birthday <name>",
            description: "Show a contact's birthday",
        },
        CommandSpec {
            kind: CommandKind::Birthdays,
            name: "birthdays",
            aliases: &[],
            usage: "birthdays",
            description: "List birthdays coming up soon",
        },
        CommandSpec {
            kind: CommandKind::Help,
            name: "help",
            aliases: &[],
            usage: "help",
            description: "Show this list",
        },
        CommandSpec {
            kind: CommandKind::Exit,
            name: "exit",
            aliases: &["close"],
            usage: "exit",
            description: "Save and quit",
        },
    ]
}
