//! # Test Channel
//!
//! Interactive client for the Bluetooth controller simulator's test channel:
//! - Length-prefixed binary command framing (one-octet lengths)
//! - A single blocking TCP connection, send-only
//! - An operator shell mapping verbs to commands
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Shell (REPL)                            │
//! │              verb + args ──► Action                          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   CommandChannel                             │
//! │          (validate, encode, single write)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │    Codec    │          │ Connection  │
//!   │  (framing)  │          │ (TcpStream) │
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │  Simulator  │
//!                           │  (remote)   │
//!                           └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ChannelError, Result};
pub use config::Config;
pub use network::CommandChannel;
pub use shell::Shell;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the test channel client
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
