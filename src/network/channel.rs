//! Command Channel
//!
//! Validates, encodes and sends commands over a `Connection`.

use crate::config::Config;
use crate::error::{ChannelError, Result};
use crate::protocol::{encode, Command};
use super::Connection;

/// The high-level send path to the simulator
///
/// Owns its connection exclusively. Once closed, or once a write has
/// failed, every further send returns `ChannelError::ChannelClosed`.
/// Nothing is ever retried: the simulator acts on each command as it
/// arrives, so a resend could apply it twice.
pub struct CommandChannel {
    /// `None` after `close()` or after a transport failure
    connection: Option<Connection>,
}

impl CommandChannel {
    /// Connect to the simulator described by `config`
    pub fn connect(config: &Config) -> Result<Self> {
        Ok(Self::new(Connection::connect(config)?))
    }

    /// Build a channel on top of an existing connection
    pub fn new(connection: Connection) -> Self {
        Self {
            connection: Some(connection),
        }
    }

    /// Encode `name` and `args` and send them as one frame
    ///
    /// Validation failures leave the channel untouched.
    pub fn send_command<S: AsRef<str>>(&mut self, name: &str, args: &[S]) -> Result<()> {
        if self.connection.is_none() {
            return Err(ChannelError::ChannelClosed);
        }

        let frame = match encode(name, args) {
            Ok(frame) => frame,
            Err(e) => {
                tracing::warn!("Rejected {} command: {}", name, e);
                return Err(e);
            }
        };

        tracing::debug!(
            "Sending {} ({} args, {} bytes)",
            name,
            args.len(),
            frame.len()
        );
        self.write(&frame)
    }

    /// Send a `Command`
    pub fn send(&mut self, command: &Command) -> Result<()> {
        self.send_command(&command.name, &command.args)
    }

    /// Write raw bytes directly, bypassing the command framing
    pub fn send_raw(&mut self, bytes: &[u8]) -> Result<()> {
        tracing::debug!("Sending raw packet {:02x?}", bytes);
        self.write(bytes)
    }

    /// Release the connection
    ///
    /// Fails with `ChannelError::ChannelClosed` if it was already released.
    pub fn close(&mut self) -> Result<()> {
        match self.connection.take() {
            Some(connection) => connection.close(),
            None => Err(ChannelError::ChannelClosed),
        }
    }

    /// Whether the channel can no longer send
    pub fn is_closed(&self) -> bool {
        self.connection.is_none()
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        let connection = self.connection.as_mut().ok_or(ChannelError::ChannelClosed)?;

        if let Err(e) = connection.send(bytes) {
            // A partial write leaves the remote decoder out of step; drop the socket.
            tracing::error!("Write to {} failed: {}", connection.peer_addr(), e);
            self.connection = None;
            return Err(e);
        }
        Ok(())
    }
}
