//! # Shiftdesk
//!
//! A command-line shift desk for facility teams.
//!
//! ## Features
//!
//! - **Work Logs**: Record daily maintenance work with photos and move it
//!   through Pending, In Progress and Completed
//! - **Shift Handover**: Pass pending work and a note to the team on the next shift
//! - **Duty Schedules**: Monthly calendar of the three-team rotation with overrides
//! - **Attendance Reports**: Totals, ratios and weekday charts that recompute
//!   whenever records change
//! - **Roster and Notifications**: Employee records, duty board and a facility inbox
//! - **Data Export**: Work logs and reports as CSV, JSON or Excel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftdesk::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
