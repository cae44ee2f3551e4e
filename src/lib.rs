//! # Clockfill
//!
//! Logs daily work hours to Clockify for a date range. Weekends are skipped
//! unless requested, days that already have an entry are left alone, and
//! Argentina public holidays are logged as "Holiday" with their own tag.
//!
//! ## Modes
//!
//! - **Weekly** (no flags): continues after the last logged day up to this
//!   week's Friday.
//! - **Explicit** (`--from`, `--to`, `--desc`): logs the given range.
//! - **Dry run** (`--dry-run`): prints the plan, creates nothing.
//! - **Listing** (`--list`, `--list-tags`): shows IDs for configuration.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clockfill::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
