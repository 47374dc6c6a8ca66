//! Shell verbs
//!
//! Static table of operator verbs and the pure step that turns a verb plus
//! its tokens into an `Action`. No I/O happens here.

use rand::rngs::OsRng;
use rand::Rng;

use crate::error::{ChannelError, Result};
use crate::protocol::{Command, CommandType, HCI_RESET_PACKET};

/// Length of a generated device name
pub const DEVICE_NAME_LEN: usize = 6;

const DEVICE_NAME_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Operator verbs accepted at the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    HciReset,
    TimeoutAll,
    Discover,
    DiscoverInterval,
    Clear,
    SetEventDelay,
    ClearEventDelay,
    Quit,
    Help,
}

/// Help metadata for one verb
#[derive(Debug)]
pub struct VerbSpec {
    pub verb: Verb,
    pub name: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
}

/// Every verb, in the order `help` lists them
///
/// Laid out in `Verb` declaration order; `Verb::spec` indexes by discriminant.
pub const VERBS: &[VerbSpec] = &[
    VerbSpec {
        verb: Verb::HciReset,
        name: "hci_reset",
        usage: "hci_reset",
        summary: "Sends an HCI Reset command to the controller.",
        description: "Writes a raw HCI_Reset packet straight onto the connection.",
    },
    VerbSpec {
        verb: Verb::TimeoutAll,
        name: "timeout_all",
        usage: "timeout_all",
        summary: "Causes all HCI commands to time out.",
        description: "Arguments: none.\nEvery HCI command received afterwards gets no response.",
    },
    VerbSpec {
        verb: Verb::Discover,
        name: "discover",
        usage: "discover [name ...]",
        summary: "Sends an inquiry result for one or more devices.",
        description: "Arguments: name_1 name_2 ...\n\
                      Sends an inquiry result for each named device. If no names are\n\
                      given, a random six character name is used instead.",
    },
    VerbSpec {
        verb: Verb::DiscoverInterval,
        name: "discover_interval",
        usage: "discover_interval <interval_ms>",
        summary: "Sends inquiry results for a random device on an interval.",
        description: "Arguments: interval_in_ms\n\
                      Sends an inquiry result for a device with a random name every\n\
                      interval_in_ms milliseconds.",
    },
    VerbSpec {
        verb: Verb::Clear,
        name: "clear",
        usage: "clear",
        summary: "Resets the controller to its original, unmodified state.",
        description: "Arguments: none.\nClears every test channel modification.",
    },
    VerbSpec {
        verb: Verb::SetEventDelay,
        name: "set_event_delay",
        usage: "set_event_delay <delay_ms>",
        summary: "Delays every event sent by the controller.",
        description: "Arguments: delay_in_ms\n\
                      Events are sent back delay_in_ms milliseconds after the command.",
    },
    VerbSpec {
        verb: Verb::ClearEventDelay,
        name: "clear_event_delay",
        usage: "clear_event_delay",
        summary: "Sends events without delay again.",
        description: "Arguments: none.\nSets the event response delay back to zero.",
    },
    VerbSpec {
        verb: Verb::Quit,
        name: "quit",
        usage: "quit",
        summary: "Exits the test channel.",
        description: "Arguments: none.\n\
                      Tells the controller the test channel is closing, then disconnects.",
    },
    VerbSpec {
        verb: Verb::Help,
        name: "help",
        usage: "help [verb]",
        summary: "Lists verbs, or describes one.",
        description: "Arguments: optional verb name.",
    },
];

impl Verb {
    /// Look up a verb by the word the operator typed
    pub fn parse(word: &str) -> Option<Verb> {
        VERBS.iter().find(|spec| spec.name == word).map(|spec| spec.verb)
    }

    /// Help metadata for this verb
    pub fn spec(self) -> &'static VerbSpec {
        &VERBS[self as usize]
    }

    /// The word typed at the prompt
    pub fn name(self) -> &'static str {
        self.spec().name
    }
}

/// What the shell should do for one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Write bytes directly on the connection
    Raw(&'static [u8]),

    /// Send a named command through the codec
    Send(Command),

    /// Say goodbye to the simulator and stop
    Quit,

    /// Print help, optionally for a single topic
    Help(Option<String>),
}

/// Validate a verb's tokens and decide what to do
pub fn plan(verb: Verb, args: &[&str]) -> Result<Action> {
    let action = match verb {
        Verb::HciReset => {
            expect_no_args(verb, args)?;
            Action::Raw(&HCI_RESET_PACKET)
        }
        Verb::TimeoutAll => {
            expect_no_args(verb, args)?;
            Action::Send(Command::bare(CommandType::TimeoutAll))
        }
        Verb::Discover => {
            let names = if args.is_empty() {
                vec![random_device_name()]
            } else {
                args.iter().map(|name| name.to_string()).collect()
            };
            Action::Send(Command::of(CommandType::Discover, names))
        }
        Verb::DiscoverInterval => {
            let interval = expect_milliseconds(verb, args)?;
            Action::Send(Command::of(CommandType::DiscoverInterval, [interval]))
        }
        Verb::Clear => {
            expect_no_args(verb, args)?;
            Action::Send(Command::bare(CommandType::Clear))
        }
        Verb::SetEventDelay => {
            let delay = expect_milliseconds(verb, args)?;
            Action::Send(Command::of(CommandType::SetEventDelay, [delay]))
        }
        Verb::ClearEventDelay => {
            expect_no_args(verb, args)?;
            Action::Send(Command::bare(CommandType::ClearEventDelay))
        }
        Verb::Quit => {
            expect_no_args(verb, args)?;
            Action::Quit
        }
        Verb::Help => match args {
            [] => Action::Help(None),
            [topic] => Action::Help(Some(topic.to_string())),
            _ => return Err(usage(verb)),
        },
    };
    Ok(action)
}

/// Random uppercase alphanumeric device name, e.g. `K3Z9QA`
pub fn random_device_name() -> String {
    let mut rng = OsRng;
    (0..DEVICE_NAME_LEN)
        .map(|_| DEVICE_NAME_CHARSET[rng.gen_range(0..DEVICE_NAME_CHARSET.len())] as char)
        .collect()
}

// =============================================================================
// Argument checks
// =============================================================================

fn usage(verb: Verb) -> ChannelError {
    ChannelError::Validation(format!("usage: {}", verb.spec().usage))
}

fn expect_no_args(verb: Verb, args: &[&str]) -> Result<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(usage(verb))
    }
}

/// Exactly one non-negative integer token, forwarded as typed
fn expect_milliseconds<'a>(verb: Verb, args: &[&'a str]) -> Result<&'a str> {
    match args {
        [token] if token.parse::<u64>().is_ok() => Ok(*token),
        _ => Err(usage(verb)),
    }
}
