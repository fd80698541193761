//! Attendance report kept current by the attendance feed.
//!
//! [`LiveReport`] subscribes to the attendance collection and re-runs the
//! aggregator on every delivered snapshot, optionally narrowed to one month.
//! The held report is always the aggregate of the latest snapshot.

use crate::db::attendance::AttendanceRecords;
use crate::libs::attendance::{AttendanceAggregator, AttendanceRecord, AttendanceReport};
use crate::libs::feed::Subscription;
use crate::libs::schedule::YearMonth;
use anyhow::Result;
use parking_lot::Mutex;
use std::sync::Arc;

struct ReportState {
    report: AttendanceReport,
    records: usize,
}

pub struct LiveReport {
    state: Arc<Mutex<ReportState>>,
    subscription: Option<Subscription>,
}

impl LiveReport {
    pub fn attach(records: &AttendanceRecords, aggregator: AttendanceAggregator, month: Option<YearMonth>) -> Result<Self> {
        let state = Arc::new(Mutex::new(ReportState {
            report: aggregator.aggregate(&[]),
            records: 0,
        }));

        let sink = state.clone();
        let subscription = records.subscribe(move |snapshot: &[AttendanceRecord]| {
            let selected: Vec<AttendanceRecord> = match month {
                Some(month) => snapshot.iter().filter(|r| month.contains_date_str(&r.date)).cloned().collect(),
                None => snapshot.to_vec(),
            };
            let mut state = sink.lock();
            state.report = aggregator.aggregate(&selected);
            state.records = selected.len();
        })?;

        Ok(Self {
            state,
            subscription: Some(subscription),
        })
    }

    pub fn report(&self) -> AttendanceReport {
        self.state.lock().report.clone()
    }

    /// How many records the current report covers.
    pub fn record_count(&self) -> usize {
        self.state.lock().records
    }

    pub fn detach(mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
        }
    }
}
