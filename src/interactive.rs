//! Interactive session: open images, then copy or save the result.
//!
//! Commands are read from stdin on a dedicated thread. Each `open` runs its
//! decode and render on tokio's blocking pool and reports back over a
//! channel; the [`Session`] decides whether the result is still wanted.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tokio::sync::mpsc;

use crate::ascii::AsciiArt;
use crate::convert::{convert_file, ConvertOptions};
use crate::error::ConvertError;
use crate::session::{CommitOutcome, RequestId, Session};
use crate::sink::{Clipboard, Export, LazyClipboard, NOTHING_TO_EXPORT};

const HELP: &str = "\
Commands:
  open <path>    convert an image
  show           print the current art
  copy           copy the current art to the clipboard
  save [file]    save the current art to a text file
  help           show this help
  quit           leave (also: exit, Ctrl-D)";

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Open(PathBuf),
    Show,
    Copy,
    Save(Option<PathBuf>),
    Help,
    Quit,
}

/// Parse one input line. Blank lines parse to `None`.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "open" | "o" => {
            if rest.is_empty() {
                return Err("Usage: open <path>".to_string());
            }
            ShellCommand::Open(PathBuf::from(rest))
        }
        "show" => ShellCommand::Show,
        "copy" | "c" => ShellCommand::Copy,
        "save" | "s" => ShellCommand::Save((!rest.is_empty()).then(|| PathBuf::from(rest))),
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("Unknown command '{}'. Type 'help'.", other)),
    };
    Ok(Some(command))
}

/// Whether the loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A conversion that has finished on the blocking pool.
#[derive(Debug)]
pub struct Finished {
    pub id: RequestId,
    pub path: PathBuf,
    pub result: Result<AsciiArt, ConvertError>,
}

/// Command handling state for one interactive session.
pub struct Shell<W: Write> {
    session: Session,
    options: ConvertOptions,
    default_filename: PathBuf,
    clipboard: Box<dyn Clipboard>,
    results: mpsc::UnboundedSender<Finished>,
    out: W,
}

impl<W: Write> Shell<W> {
    /// Create a shell writing to `out`, plus the receiver its conversions
    /// report to. Feed received values back through [`Shell::finish`].
    pub fn new(
        options: ConvertOptions,
        default_filename: PathBuf,
        out: W,
    ) -> (Self, mpsc::UnboundedReceiver<Finished>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let shell = Self {
            session: Session::new(),
            options,
            default_filename,
            clipboard: Box::new(LazyClipboard::default()),
            results: tx,
            out,
        };
        (shell, rx)
    }

    /// Replace the clipboard (the system clipboard by default).
    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Run one command. `Open` must be called from within a tokio runtime.
    pub fn handle(&mut self, command: ShellCommand) -> io::Result<Flow> {
        match command {
            ShellCommand::Open(path) => self.open(path)?,
            ShellCommand::Show => match self.session.current() {
                Some(art) => write!(self.out, "{}", art)?,
                None => writeln!(self.out, "{}", NOTHING_TO_EXPORT)?,
            },
            ShellCommand::Copy => match self.session.copy_to(self.clipboard.as_mut()) {
                Ok(Export::Done(())) => writeln!(self.out, "Copied to clipboard.")?,
                Ok(Export::NothingToExport) => writeln!(self.out, "{}", NOTHING_TO_EXPORT)?,
                Err(e) => writeln!(self.out, "Error: {}", e)?,
            },
            ShellCommand::Save(path) => {
                let path = path.unwrap_or_else(|| self.default_filename.clone());
                match self.session.save_to(&path) {
                    Ok(Export::Done(written)) => {
                        writeln!(self.out, "Saved to {}", written.display())?
                    }
                    Ok(Export::NothingToExport) => writeln!(self.out, "{}", NOTHING_TO_EXPORT)?,
                    Err(e) => writeln!(self.out, "Error: {}", e)?,
                }
            }
            ShellCommand::Help => writeln!(self.out, "{}", HELP)?,
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn open(&mut self, path: PathBuf) -> io::Result<()> {
        let id = self.session.begin_request();
        let options = self.options.clone();
        let tx = self.results.clone();
        log::debug!("Request {} for {}", id, path.display());

        writeln!(self.out, "Converting {}...", path.display())?;
        tokio::task::spawn_blocking(move || {
            let result = convert_file(&path, &options);
            // the receiver only goes away when the session is over
            let _ = tx.send(Finished { id, path, result });
        });
        Ok(())
    }

    /// Apply a finished conversion, printing the art if it became current.
    pub fn finish(&mut self, finished: Finished) -> io::Result<CommitOutcomeKind> {
        let Finished { id, path, result } = finished;
        match self.session.commit(id, result) {
            CommitOutcome::Applied => {
                if let Some(art) = self.session.current() {
                    write!(self.out, "{}", art)?;
                    writeln!(
                        self.out,
                        "[{}x{} from {}]",
                        art.width(),
                        art.height(),
                        path.display()
                    )?;
                }
                Ok(CommitOutcomeKind::Applied)
            }
            CommitOutcome::Stale { latest } => {
                log::info!(
                    "Ignoring {} ({}): superseded by {}",
                    path.display(),
                    id,
                    latest
                );
                Ok(CommitOutcomeKind::Stale)
            }
            CommitOutcome::Failed(e) => {
                writeln!(self.out, "Error: {}", e)?;
                Ok(CommitOutcomeKind::Failed)
            }
        }
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()
    }
}

/// [`CommitOutcome`] without its payload, for callers that only branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcomeKind {
    Applied,
    Stale,
    Failed,
}

/// Read lines from stdin on a plain thread.
///
/// Blocking stdin reads inside the runtime would keep it from shutting down.
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<io::Result<String>> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || forward_lines(io::stdin().lock(), &tx));
    rx
}

/// Send each line of `reader` to `tx` until EOF, a read error, or the
/// receiver going away. Invalid UTF-8 is replaced rather than ending input.
fn forward_lines<R: BufRead>(mut reader: R, tx: &mpsc::UnboundedSender<io::Result<String>>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                if let std::borrow::Cow::Owned(_) = line {
                    log::warn!("Input line is not valid UTF-8; replaced invalid bytes");
                }
                let line = line.trim_end_matches(&['\n', '\r'][..]).to_string();
                if tx.send(Ok(line)).is_err() {
                    break;
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                let _ = tx.send(Err(e));
                break;
            }
        }
    }
}

/// Run the interactive session until quit, EOF or Ctrl-C.
pub async fn run(options: ConvertOptions, default_filename: PathBuf) -> io::Result<()> {
    let (mut shell, mut results) = Shell::new(options, default_filename, io::stdout());
    let mut lines = spawn_stdin_reader();

    writeln!(shell.out, "asciify interactive session. Type 'help' for commands.")?;
    shell.prompt()?;

    loop {
        tokio::select! {
            line = lines.recv() => {
                let line = match line {
                    Some(line) => line?,
                    None => break,
                };
                match parse_command(&line) {
                    Ok(Some(command)) => {
                        if shell.handle(command)? == Flow::Quit {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(msg) => writeln!(shell.out, "{}", msg)?,
                }
                shell.prompt()?;
            }
            Some(finished) = results.recv() => {
                writeln!(shell.out)?;
                shell.finish(finished)?;
                shell.prompt()?;
            }
            _ = tokio::signal::ctrl_c() => {
                writeln!(shell.out)?;
                break;
            }
        }
    }

    log::debug!("Interactive session ended");
    Ok(())
}
