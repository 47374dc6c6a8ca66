//! Interactive session
//!
//! Read-eval-print loop that maps operator lines onto the command channel.

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::error::{ChannelError, Result};
use crate::network::CommandChannel;
use crate::protocol::{Command, CommandType};
use super::verb::{plan, Action, Verb, VERBS};

/// Printed once when the loop starts
pub const INTRO: &str = "Type 'help' for more information.";

/// Printed after a successful `quit`
pub const FAREWELL: &str = "Goodbye.";

/// Lifecycle of a shell session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    /// Accepting input
    Running,

    /// `quit` ran or the channel failed; no further input is taken
    Terminated,
}

/// The operator shell
///
/// Holds the only `CommandChannel` for the process. Output (prompt, help,
/// errors) goes to `out`, which is stdout in the binary.
pub struct Shell<W: Write> {
    channel: CommandChannel,
    out: W,
    prompt: String,
    state: ShellState,
}

impl<W: Write> Shell<W> {
    /// Create a running shell over an already connected channel
    pub fn new(channel: CommandChannel, config: &Config, out: W) -> Self {
        Self {
            channel,
            out,
            prompt: config.prompt.clone(),
            state: ShellState::Running,
        }
    }

    /// Current state
    pub fn state(&self) -> ShellState {
        self.state
    }

    /// The channel commands are sent on
    pub fn channel(&self) -> &CommandChannel {
        &self.channel
    }

    /// Consume the shell and hand back its output sink
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run until `quit`, end of input, or a fatal channel error
    ///
    /// End of input behaves like `quit`. Recoverable errors are printed and
    /// the loop continues; fatal ones are printed and returned.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        writeln!(self.out, "{}", INTRO)?;

        let mut line = Vec::new();
        while self.state == ShellState::Running {
            write!(self.out, "{}", self.prompt)?;
            self.out.flush()?;

            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                writeln!(self.out)?;
                tracing::debug!("End of input, closing the test channel");
                if let Err(e) = self.quit() {
                    self.fail(&e);
                    writeln!(self.out, "Error: {}", e)?;
                    return Err(e);
                }
                break;
            }

            if let Err(e) = self.execute_line(&line) {
                writeln!(self.out, "Error: {}", e)?;
                if !e.is_recoverable() {
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    /// Parse and execute one raw input line
    ///
    /// Lines must be UTF-8. Blank lines do nothing; unknown verbs are
    /// reported on the output and leave the shell running. A fatal error
    /// moves the shell to `Terminated` and releases the channel.
    pub fn execute_line(&mut self, raw: &[u8]) -> Result<ShellState> {
        if self.state == ShellState::Terminated {
            return Err(ChannelError::ChannelClosed);
        }

        let result = self.execute_text(raw);
        if let Err(e) = &result {
            if !e.is_recoverable() {
                self.fail(e);
            }
        }
        result
    }

    fn execute_text(&mut self, raw: &[u8]) -> Result<ShellState> {
        let line = std::str::from_utf8(raw)
            .map_err(|_| ChannelError::Validation("Unrecognized characters.".to_string()))?;

        let mut tokens = line.split_whitespace();
        let Some(word) = tokens.next() else {
            return Ok(self.state);
        };

        let Some(verb) = Verb::parse(word) else {
            tracing::debug!("Unknown verb {:?}", word);
            writeln!(self.out, "*** Unknown syntax: {}", line.trim())?;
            return Ok(self.state);
        };

        let args: Vec<&str> = tokens.collect();
        let action = plan(verb, &args)?;
        tracing::debug!("{} -> {:?}", verb.name(), action);
        self.dispatch(action)?;

        Ok(self.state)
    }

    fn dispatch(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Raw(bytes) => self.channel.send_raw(bytes),
            Action::Send(command) => self.channel.send(&command),
            Action::Quit => self.quit(),
            Action::Help(topic) => self.print_help(topic.as_deref()),
        }
    }

    fn quit(&mut self) -> Result<()> {
        self.channel
            .send(&Command::bare(CommandType::CloseTestChannel))?;
        self.channel.close()?;
        writeln!(self.out, "{}", FAREWELL)?;
        self.state = ShellState::Terminated;
        Ok(())
    }

    fn fail(&mut self, error: &ChannelError) {
        tracing::error!("Test channel session ended: {}", error);
        self.state = ShellState::Terminated;
        if !self.channel.is_closed() {
            if let Err(e) = self.channel.close() {
                tracing::warn!("Error closing channel: {}", e);
            }
        }
    }

    fn print_help(&mut self, topic: Option<&str>) -> Result<()> {
        match topic {
            None => {
                writeln!(self.out, "Documented commands (type help <verb>):")?;
                for spec in VERBS {
                    writeln!(self.out, "  {:<18} {}", spec.name, spec.summary)?;
                }
            }
            Some(topic) => match Verb::parse(topic) {
                Some(verb) => {
                    let spec = verb.spec();
                    writeln!(self.out, "usage: {}", spec.usage)?;
                    writeln!(self.out, "{}", spec.summary)?;
                    writeln!(self.out, "{}", spec.description)?;
                }
                None => writeln!(self.out, "*** No help on {}", topic)?,
            },
        }
        Ok(())
    }
}
