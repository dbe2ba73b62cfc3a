use crate::assistant::{Assistant, Flow};
use crate::console::ConsoleView;
use crate::storage::BookStore;
use bookcore::{Result, UserView};
use std::future::Future;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// How an interactive session came to an end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `exit` or `close`
    Exit,
    /// Input reached end of file
    InputClosed,
    /// `shutdown` resolved, e.g. on Ctrl-C
    Interrupted,
}

/// Read commands line by line from `input` until `exit`, end of input or
/// `shutdown`.
///
/// `shutdown` is polled across the whole session, so an interrupt that
/// arrives while a command is running ends the session at the next prompt.
/// Apart from `exit`, which saves by itself, the book is saved before
/// returning.
pub async fn run_session<S, R, W, F>(
    assistant: &mut Assistant<S>,
    input: R,
    view: &mut ConsoleView<W>,
    shutdown: F,
) -> Result<SessionEnd>
where
    S: BookStore,
    R: AsyncRead + Unpin,
    W: Write,
    F: Future<Output = ()>,
{
    let mut lines = BufReader::new(input).lines();
    tokio::pin!(shutdown);

    view.show_message("Welcome to the assistant bot!");
    let end = loop {
        view.prompt("Enter a command: ");
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => {
                    if assistant.handle_line(&line, &mut *view)? == Flow::Exit {
                        return Ok(SessionEnd::Exit);
                    }
                }
                None => {
                    tracing::info!("Input closed, ending session");
                    break SessionEnd::InputClosed;
                }
            },
            _ = &mut shutdown => {
                tracing::info!("Interrupted, ending session");
                break SessionEnd::Interrupted;
            }
        }
    };

    assistant.save()?;
    view.show_message("");
    view.show_message("Good bye!");
    Ok(end)
}
