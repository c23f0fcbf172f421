//! # SuperMart Register Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        SuperMart Register                               │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Terminal (stdin / stdout)                                       │  │
//! │  │  • name / qty / pick      • add / clear                          │  │
//! │  │  • list / bill / json     • catalog                              │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  main.rs ────► calls lib::run, maps failure to exit code        │  │
//! │  │  lib.rs ─────► logging, config, register, shell loop            │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  supermart-core (catalog, ledger, invoice, autocomplete)         │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Logs go to stderr. Nothing is written to disk.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match supermart_register::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("supermart-register: {err}");
            ExitCode::FAILURE
        }
    }
}
