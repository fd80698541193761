//! Parsing of free-text duration strings such as `"9h 18m"`.
//!
//! Attendance records carry their total worked time as text produced by an
//! external time clock. The text is not guaranteed to be clean, so parsing is
//! best-effort: anything that cannot be read contributes zero minutes and no
//! error is ever raised.
//!
//! ## Rules
//!
//! - `""` and `"-"` are zero
//! - the first run of digits immediately followed by `h` adds `hours * 60`
//! - the first run of digits immediately followed by `m` adds `minutes`
//! - either term may be missing; a string with neither is zero
//!
//! ## Usage
//!
//! ```rust
//! use shiftdesk::libs::duration::parse_minutes;
//!
//! assert_eq!(parse_minutes("9h 18m"), 558);
//! assert_eq!(parse_minutes("45m"), 45);
//! assert_eq!(parse_minutes("-"), 0);
//! ```

use regex::Regex;
use std::sync::OnceLock;

static HOURS_RE: OnceLock<Regex> = OnceLock::new();
static MINUTES_RE: OnceLock<Regex> = OnceLock::new();

fn hours_re() -> &'static Regex {
    HOURS_RE.get_or_init(|| Regex::new(r"(\d+)h").expect("static hours pattern"))
}

fn minutes_re() -> &'static Regex {
    MINUTES_RE.get_or_init(|| Regex::new(r"(\d+)m").expect("static minutes pattern"))
}

/// Returns the total number of minutes described by `text`.
pub fn parse_minutes(text: &str) -> u64 {
    if text.is_empty() || text == "-" {
        return 0;
    }

    let hours = capture_number(hours_re(), text);
    let minutes = capture_number(minutes_re(), text);

    hours.saturating_mul(60).saturating_add(minutes)
}

fn capture_number(re: &Regex, text: &str) -> u64 {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        // Digit runs too long for u64 degrade to zero like any other garbage
        .and_then(|m| m.as_str().parse::<u64>().ok())
        .unwrap_or(0)
}

/// Formats minutes back into the `"<h>h <m>m"` form used by attendance data.
pub fn format_minutes(minutes: u64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}
