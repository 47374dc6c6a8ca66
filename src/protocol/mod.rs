//! Protocol Module
//!
//! Defines the wire protocol for the simulator's test channel.
//!
//! ## Frame Format
//!
//! Every length is a single unsigned octet, so names, arguments and the
//! argument count are all capped at 255. The receiver depends on this.
//!
//! ```text
//! ┌────────────┬──────────────┬────────────┬─────────────┬──────────┬─────┐
//! │ NameLen(1) │ Name         │ ArgCount(1)│ ArgLen(1)   │ Arg      │ ... │
//! └────────────┴──────────────┴────────────┴─────────────┴──────────┴─────┘
//!                                            └── repeated ArgCount times ──┘
//! ```
//!
//! ### Commands
//! - TIMEOUT_ALL        - no arguments
//! - DISCOVER           - one or more device names
//! - DISCOVER_INTERVAL  - interval in ms
//! - CLEAR              - no arguments
//! - SET_EVENT_DELAY    - delay in ms
//! - CLEAR_EVENT_DELAY  - no arguments
//! - CLOSE_TEST_CHANNEL - no arguments
//!
//! ### Raw HCI Reset
//! `[0x01, 0x03, 0x0C, 0x00]`, written directly without framing.

mod command;
mod codec;

pub use command::{Command, CommandType, HCI_RESET_PACKET};
pub use codec::{
    decode_command, encode, encode_command, read_command, write_command, MAX_ARG_COUNT,
    MAX_FIELD_LEN,
};
