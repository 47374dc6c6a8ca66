//! Configuration for the test channel client
//!
//! Centralized configuration with sensible defaults.

/// Main configuration for a test channel session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Host the simulator listens on (usually `localhost` behind a port forward)
    pub address: String,

    /// Test channel port
    pub port: u16,

    /// Disable Nagle's algorithm so each command leaves immediately
    pub nodelay: bool,

    // -------------------------------------------------------------------------
    // Shell Configuration
    // -------------------------------------------------------------------------
    /// Prompt printed before each input line
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: "localhost".to_string(),
            port: 6111,
            nodelay: true,
            prompt: "$ ".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// `address:port`, suitable for `TcpStream::connect`
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the simulator host
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.config.address = address.into();
        self
    }

    /// Set the test channel port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Enable or disable TCP_NODELAY on the socket
    pub fn nodelay(mut self, nodelay: bool) -> Self {
        self.config.nodelay = nodelay;
        self
    }

    /// Set the shell prompt
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.prompt = prompt.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
