//! Macros for printing [`Message`](super::Message)s.
//!
//! Every macro routes its output through one of two paths:
//!
//! - **Normal mode**: plain `println!`/`eprintln!` with an emoji prefix.
//! - **Debug mode**: the matching `tracing` level, so output is interleaved
//!   with the rest of the structured log.
//!
//! Debug mode is on when `SHIFTDESK_DEBUG` or `RUST_LOG` is set. The check
//! runs once per process.
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │   msg_info!()   │───▶│ SHIFTDESK_DEBUG  │───▶│ tracing::info!  │
//! │                 │    │ or RUST_LOG set? │    │ OR println!     │
//! └─────────────────┘    └──────────────────┘    └─────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shiftdesk::libs::messages::Message;
//! use shiftdesk::{msg_error, msg_print, msg_success};
//!
//! msg_success!(Message::WorkLogCreated(7));
//! msg_print!(Message::ScheduleHeader("2025-03".into()), true);
//! msg_error!(Message::WorkLogNotFound(7));
//! ```
//!
//! The second form, with a literal `true`, pads the message with blank lines
//! and is used for section headers.

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether messages should go to `tracing` instead of the terminal.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("SHIFTDESK_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a message without a prefix.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with a ✅ prefix.
///
/// ```text
/// ✅ Work log #3 recorded as Pending.
/// ✅ Handover with 2 item(s) sent to Kim.
/// ```
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an error message with a ❌ prefix.
///
/// Goes to stderr in normal mode and `tracing::error!` in debug mode.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints a warning with a ⚠️ prefix.
///
/// For conditions the user should know about that do not stop the command,
/// such as handover items that were left out.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("\n⚠️ {}\n", $msg);
        } else {
            println!("\n⚠️ {}\n", $msg);
        }
    };
}

/// Prints an informational message with an ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Logs a 🔍 message in debug mode; prints nothing otherwise.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Builds an `anyhow::Error` from a message, with the ❌ prefix.
///
/// ```rust,ignore
/// let id = employee.id.ok_or_else(|| msg_error_anyhow!(Message::EmployeeIdMissing))?;
/// ```
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}
