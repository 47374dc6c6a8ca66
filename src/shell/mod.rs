//! Shell Module
//!
//! Interactive front end for the test channel.
//!
//! ## Flow
//! ```text
//! line ──► Verb::parse ──► plan(verb, args) ──► Action ──► CommandChannel
//! ```
//!
//! `hci_reset` is the one verb that skips the codec and writes a raw
//! packet. Every other verb that talks to the simulator sends a named
//! command.

mod verb;
mod session;

pub use verb::{plan, random_device_name, Action, Verb, VerbSpec, DEVICE_NAME_LEN, VERBS};
pub use session::{Shell, ShellState, FAREWELL, INTRO};
