//! `shadow` CLI — drive the device-shadow simulator from the command line.
//!
//! Plays the role of the host bridge: it feeds decoded request batches into
//! the engine, subscribes to the acknowledgment sink, and prints what a
//! script-level consumer would receive. Acks print to stdout as
//! `onRemoteMessage <payload>` lines; diagnostics go to stderr via `RUST_LOG`.
//!
//! ## Usage
//!
//! ```sh
//! # Print the seed-state query payload
//! shadow get
//!
//! # Apply an update batch (stdin → events + resulting payload on stdout)
//! echo '[{"state":{"desired":{"powerSwitch":1}}}]' | shadow update
//!
//! # Apply from a file, write the resulting payload to a file
//! shadow update -i batch.json -o shadow.json
//!
//! # Full bridge routing: only shadow/update paths reach the engine
//! echo '[{"powerSwitch":1}]' | shadow send --path panel/shadow/update
//!
//! # With diagnostics (GET/SEND/EMIT lines)
//! RUST_LOG=shadow_engine=info shadow update -i batch.json
//! ```

use std::io::{self, Read};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shadow_engine::{EmitError, Emitter, ShadowService, DEVICE_ID};
use shadow_json::{decode_batch, encode, Value};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shadow", version, about = "Device-shadow simulator CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the seed-state query payload
    Get {
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Apply an update batch and print the resulting query payload
    Update {
        /// Input file with a JSON array of requests (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file for the resulting payload (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Route a payload the way the host bridge does: only paths containing
    /// "shadow/update" reach the engine
    Send {
        /// Request path, e.g. panel/shadow/update
        #[arg(long)]
        path: String,
        /// Input file with a JSON array of requests (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file for the resulting payload (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Sink standing in for the script-level event subscriber: every dispatched
/// acknowledgment becomes one `onRemoteMessage <payload>` line on stdout.
struct StdoutEmitter;

impl Emitter for StdoutEmitter {
    fn send(&self, event: &str, payload: &Value) -> Result<(), EmitError> {
        println!("{event} {}", encode(payload));
        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let service = ShadowService::new(Arc::new(StdoutEmitter));

    match cli.command {
        Commands::Get { output } => {
            let payload = service.get_shadow_payload(DEVICE_ID);
            write_output(output.as_deref(), &payload)?;
        }
        Commands::Update { input, output } => {
            let batch = read_batch(input.as_deref())?;
            service.apply_update_batch(&batch);
            let payload = service.get_shadow_payload(DEVICE_ID);
            write_output(output.as_deref(), &payload)?;
        }
        Commands::Send {
            path,
            input,
            output,
        } => {
            let batch = read_batch(input.as_deref())?;
            service.send_message(&path, &batch);
            let payload = service.get_shadow_payload(DEVICE_ID);
            write_output(output.as_deref(), &payload)?;
        }
    }

    Ok(())
}

fn read_batch(path: Option<&str>) -> Result<Vec<Value>> {
    let json = read_input(path)?;
    decode_batch(&json).context("Failed to decode update batch")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
