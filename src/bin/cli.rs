//! Test Channel CLI
//!
//! Connects to a running simulator and opens the operator shell.
//!
//! The simulator must already be listening; for a device, forward the port
//! first with `adb forward tcp:<port> tcp:<port>` and connect to `localhost`.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use test_channel::{CommandChannel, Config, Shell};
use tracing_subscriber::{fmt, EnvFilter};

/// Test channel client
#[derive(Parser, Debug)]
#[command(name = "test-channel")]
#[command(about = "Send test commands to a Bluetooth controller simulator")]
#[command(version)]
struct Args {
    /// Simulator host (e.g. localhost)
    address: String,

    /// Simulator test channel port
    port: u16,
}

fn main() -> ExitCode {
    // Logs go to stderr so the prompt owns stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,test_channel=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    // Usage errors and --help/--version exit here with clap's status
    let args = Args::parse();

    let config = Config::builder()
        .address(&args.address)
        .port(args.port)
        .build();

    tracing::debug!("Test channel v{}", test_channel::VERSION);
    tracing::info!("Connecting to {}", config.socket_addr());

    let channel = match CommandChannel::connect(&config) {
        Ok(channel) => channel,
        Err(e) => {
            println!("Error connecting to socket: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut shell = Shell::new(channel, &config, io::stdout());
    match shell.run(io::stdin().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Shell exited: {}", e);
            ExitCode::FAILURE
        }
    }
}
