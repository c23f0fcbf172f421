//! # SuperMart Register Library
//!
//! The register application: state, commands and the terminal shell.
//!
//! ## Module Organization
//! ```text
//! supermart_register/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── register.rs     ◄─── Register controller (event handlers)
//! ├── shell.rs        ◄─── Line-oriented terminal front-end
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── bill.rs     ◄─── Catalog + open bill
//! │   ├── form.rs     ◄─── Entry form + suggestions
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── bill.rs     ◄─── Add item, clear, read bill
//! │   ├── catalog.rs  ◄─── Product listing, suggestions
//! │   └── invoice.rs  ◄─── Invoice text
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod register;
pub mod shell;
pub mod state;

use std::io;

use supermart_core::Catalog;
use tracing::info;
use tracing_subscriber::EnvFilter;

use register::Register;
use state::ConfigState;

/// Default log filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn,supermart=info";

/// Starts the register on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Tracing ──────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr            │
/// │     • Default: warn,supermart=info, overridden by RUST_LOG             │
/// │                                                                         │
/// │  2. Load Configuration ──────────────────────────────────────────────► │
/// │     • Defaults, then SUPERMART_* environment overrides                 │
/// │                                                                         │
/// │  3. Build Register ──────────────────────────────────────────────────► │
/// │     • Default product table, empty bill, empty form                    │
/// │                                                                         │
/// │  4. Run Shell until quit / EOF ──────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> io::Result<()> {
    init_tracing();

    let config = ConfigState::from_env();
    let catalog = Catalog::default();
    info!(
        store = %config.store_name,
        products = catalog.len(),
        "Starting SuperMart register"
    );

    let mut register = Register::new(catalog, config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run(&mut register, stdin.lock(), stdout.lock())?;

    info!("Register closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command and rejected input
/// - `RUST_LOG=supermart=trace` - Everything from this app
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
