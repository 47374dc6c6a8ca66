//! Connection
//!
//! Owns the single TCP stream to the simulator. Knows nothing about framing.

use std::io::{self, Write};
use std::net::TcpStream;

use crate::config::Config;
use crate::error::{ChannelError, Result};

/// One stream socket to the simulator's test channel
pub struct Connection {
    /// The socket (unbuffered, every send is one `write_all`)
    stream: TcpStream,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Connect to `config.address:config.port`
    ///
    /// No timeout is applied; the OS connect timeout governs.
    pub fn connect(config: &Config) -> Result<Self> {
        let stream = TcpStream::connect((config.address.as_str(), config.port))
            .map_err(ChannelError::Transport)?;
        if config.nodelay {
            stream.set_nodelay(true).map_err(ChannelError::Transport)?;
        }
        let connection = Self::from_stream(stream);
        tracing::info!("Connected to test channel at {}", connection.peer_addr);
        Ok(connection)
    }

    /// Wrap an already connected stream
    pub fn from_stream(stream: TcpStream) -> Self {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        Self { stream, peer_addr }
    }

    /// Send all of `data`, blocking until the OS has accepted it
    pub fn send(&mut self, data: &[u8]) -> Result<()> {
        self.stream
            .write_all(data)
            .and_then(|()| self.stream.flush())
            .map_err(ChannelError::Transport)
    }

    /// Shut the socket down in both directions and release it
    pub fn close(self) -> Result<()> {
        match self.stream.shutdown(std::net::Shutdown::Both) {
            Ok(()) => {}
            // Peer already hung up; the socket is released on drop either way.
            Err(e) if e.kind() == io::ErrorKind::NotConnected => {}
            Err(e) => return Err(ChannelError::Transport(e)),
        }
        tracing::info!("Closed connection to {}", self.peer_addr);
        Ok(())
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}
