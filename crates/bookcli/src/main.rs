// crates/bookcli/src/main.rs

use anyhow::{Context, Result};
use bookcore::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use bookruntime::{
    run_session, Assistant, AssistantConfig, ConsoleView, Flow, JsonFileStore,
    DEFAULT_STORAGE_FILE,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "assistant", version)]
#[command(about = "Address book assistant", long_about = None)]
struct Cli {
    /// Address book file
    #[arg(long, global = true, env = "ASSISTANT_BOOK", default_value = DEFAULT_STORAGE_FILE)]
    file: PathBuf,

    /// How many days ahead `birthdays` looks (at most a year)
    #[arg(
        long,
        global = true,
        env = "ASSISTANT_BIRTHDAY_WINDOW",
        default_value_t = DEFAULT_BIRTHDAY_WINDOW_DAYS,
        value_parser = clap::value_parser!(u32).range(..=366)
    )]
    window_days: u32,

    /// Save after every change instead of only on exit
    #[arg(long, global = true, env = "ASSISTANT_AUTOSAVE")]
    autosave: bool,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (the default)
    Repl,

    /// Run a single assistant command and save
    Exec {
        /// Command and its arguments, e.g. `add Alice 0123456789`
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Write every contact as JSON
    Export {
        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the commands the assistant understands
    Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = AssistantConfig {
        storage_path: cli.file.clone(),
        birthday_window_days: cli.window_days,
        autosave: cli.autosave,
    };

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            let assistant = open_assistant(config)?;
            let runtime = tokio::runtime::Runtime::new()?;
            let result = runtime.block_on(repl(assistant));
            // A pending stdin read cannot be cancelled, so don't wait on it.
            runtime.shutdown_background();
            result?;
        }

        Commands::Exec { words } => {
            let assistant = open_assistant(config)?;
            exec_once(assistant, &words.join(" "))?;
        }

        Commands::Export { output } => {
            let assistant = open_assistant(config)?;
            export_contacts(&assistant, output)?;
        }

        Commands::Commands => {
            list_commands();
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_assistant(config: AssistantConfig) -> Result<Assistant<JsonFileStore>> {
    let store = JsonFileStore::new(&config.storage_path);
    let path = store.path().to_path_buf();
    Assistant::open(store, config)
        .with_context(|| format!("Failed to open address book at {}", path.display()))
}

async fn repl(mut assistant: Assistant<JsonFileStore>) -> Result<()> {
    let mut view = ConsoleView::stdout();
    let interrupted = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };
    let end = run_session(&mut assistant, tokio::io::stdin(), &mut view, interrupted)
        .await
        .context("Session failed")?;
    tracing::debug!(?end, "Session finished");
    Ok(())
}

fn exec_once(mut assistant: Assistant<JsonFileStore>, line: &str) -> Result<()> {
    let mut view = ConsoleView::stdout();
    let flow = assistant.handle_line(line, &mut view)?;
    if flow == Flow::Continue && assistant.is_dirty() {
        assistant.save().context("Failed to save address book")?;
    }
    Ok(())
}

fn export_contacts(assistant: &Assistant<JsonFileStore>, output: Option<PathBuf>) -> Result<()> {
    let contacts = assistant.book().contacts();
    let json = serde_json::to_string_pretty(&contacts)?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Exported {} contacts to {}", contacts.len(), path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn list_commands() {
    let registry = bookruntime::CommandRegistry::with_builtins();
    for spec in registry.specs() {
        let keywords = spec.keywords().collect::<Vec<_>>().join(", ");
        println!("{:<16} {:<40} {}", keywords, spec.usage, spec.description);
    }
}
