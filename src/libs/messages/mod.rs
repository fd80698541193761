//! User-facing text.
//!
//! All output shown on the terminal is a [`Message`] variant rendered through
//! its `Display` impl and printed with one of the `msg_*` macros.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
