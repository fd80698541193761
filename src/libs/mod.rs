//! Domain rules, shared infrastructure and terminal rendering.
//!
//! - **Domain**: work logs, the daily log workflow, handovers, schedules,
//!   employees, attendance, notifications and the activity trail
//! - **Infrastructure**: configuration, data directory, live feeds, photo storage
//! - **Presentation**: messages, table views and exports
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftdesk::db::{db::Db, work_logs::WorkLogs};
//! use shiftdesk::libs::daily_log::DailyLog;
//!
//! let logs = DailyLog::open(WorkLogs::new(Db::new()?), chrono::Local::now().date_naive())?;
//! println!("{} pending", logs.stats().pending);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod activity;
pub mod attendance;
pub mod config;
pub mod daily_log;
pub mod data_storage;
pub mod duration;
pub mod employee;
pub mod export;
pub mod feed;
pub mod handover;
pub mod messages;
pub mod notification;
pub mod photos;
pub mod report;
pub mod schedule;
pub mod variant;
pub mod view;
pub mod worklog;
