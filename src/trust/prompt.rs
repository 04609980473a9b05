//! Interactive trust prompt
//!
//! The prompt is the only interactive I/O in the tool. Failing to obtain a
//! line (end of input, Ctrl-C, broken terminal) is an ordinary outcome, not an
//! error.

use crate::io::CanonicalPath;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tracing::debug;

/// What the user gave us when asked about a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    /// A line of input, without the trailing newline
    Line(String),
    /// Input ended or was interrupted before a line arrived
    Unavailable,
}

/// Source of trust decisions for unknown paths
pub trait Prompt {
    /// Ask whether `path` should be trusted
    fn ask(&mut self, path: &CanonicalPath) -> PromptResponse;
}

/// Line-oriented prompt over any reader/writer pair
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
    absorb_interrupts: bool,
}

impl TerminalPrompt<StdinLock<'static>, Stdout> {
    /// Prompt on the process's stdin/stdout, treating Ctrl-C as "no answer"
    pub fn stdio() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stdout(),
            absorb_interrupts: true,
        }
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            absorb_interrupts: false,
        }
    }

    /// Consume the prompt, returning its output sink
    pub fn into_output(self) -> W {
        self.output
    }

    fn show(&mut self, path: &CanonicalPath) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "🔒 Unknown virtual environment detected:")?;
        writeln!(self.output, "   {}", path)?;
        writeln!(self.output)?;
        write!(self.output, "Trust and activate this venv? [y/N/block] ")?;
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<R, W> {
    fn ask(&mut self, path: &CanonicalPath) -> PromptResponse {
        // Installed before the prompt is visible, so a Ctrl-C aimed at it
        // can never hit the default disposition.
        let _guard = if self.absorb_interrupts {
            InterruptGuard::install()
        } else {
            None
        };

        if let Err(e) = self.show(path) {
            debug!("Could not display trust prompt: {}", e);
            return PromptResponse::Unavailable;
        }

        match read_line(&mut self.input) {
            Some(line) => PromptResponse::Line(line),
            None => {
                // Leave the cursor on a fresh line after ^C / ^D
                let _ = writeln!(self.output);
                PromptResponse::Unavailable
            }
        }
    }
}

/// Read one line. `None` on end of input with nothing read, or on any read
/// error (including `Interrupted`, which is how SIGINT surfaces here).
fn read_line<R: BufRead>(input: &mut R) -> Option<String> {
    let mut line = Vec::new();
    loop {
        let (used, done) = match input.fill_buf() {
            Ok([]) => {
                return (!line.is_empty()).then(|| String::from_utf8_lossy(&line).into_owned());
            }
            Ok(available) => match available.iter().position(|&b| b == b'\n') {
                Some(end) => {
                    line.extend_from_slice(&available[..end]);
                    (end + 1, true)
                }
                None => {
                    line.extend_from_slice(available);
                    (available.len(), false)
                }
            },
            Err(e) => {
                debug!("Prompt input unavailable: {}", e);
                return None;
            }
        };
        input.consume(used);
        if done {
            return Some(String::from_utf8_lossy(&line).into_owned());
        }
    }
}

/// Routes SIGINT to a no-op handler without `SA_RESTART` while alive, so a
/// blocked read returns `Interrupted` instead of the process dying.
#[cfg(unix)]
struct InterruptGuard {
    previous: libc::sigaction,
}

#[cfg(unix)]
impl InterruptGuard {
    fn install() -> Option<Self> {
        extern "C" fn on_interrupt(_signal: libc::c_int) {}

        // SAFETY: both sigaction structs are fully initialized (zeroed, then
        // the handler and empty mask set) before being passed to the kernel,
        // and the handler is async-signal-safe.
        unsafe {
            let mut action: libc::sigaction = std::mem::zeroed();
            action.sa_sigaction = on_interrupt as extern "C" fn(libc::c_int) as libc::sighandler_t;
            libc::sigemptyset(&mut action.sa_mask);
            action.sa_flags = 0;

            let mut previous: libc::sigaction = std::mem::zeroed();
            if libc::sigaction(libc::SIGINT, &action, &mut previous) != 0 {
                debug!("Failed to install SIGINT handler for prompt");
                return None;
            }
            Some(Self { previous })
        }
    }
}

#[cfg(unix)]
impl Drop for InterruptGuard {
    fn drop(&mut self) {
        // SAFETY: restores the disposition captured in install()
        unsafe {
            libc::sigaction(libc::SIGINT, &self.previous, std::ptr::null_mut());
        }
    }
}

#[cfg(not(unix))]
struct InterruptGuard;

#[cfg(not(unix))]
impl InterruptGuard {
    fn install() -> Option<Self> {
        None
    }
}
