//! Network Module
//!
//! TCP plumbing for the test channel.
//!
//! ## Architecture
//! - `Connection`: one blocking socket, raw bytes only
//! - `CommandChannel`: codec + connection, single writer, no reader

mod connection;
mod channel;

pub use connection::Connection;
pub use channel::CommandChannel;
