//! Daily log types emitted by the HOS simulator

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::services::clock;

/// Duty status for one log segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyStatus {
    Driving,
    OnDutyNotDriving,
    OffDuty,
}

impl DutyStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            DutyStatus::Driving => "driving",
            DutyStatus::OnDutyNotDriving => "on_duty_not_driving",
            DutyStatus::OffDuty => "off_duty",
        }
    }
}

/// One contiguous block of time within a single day.
///
/// `start` and `end` are fractional hours of the day (0.0..=24.0) and
/// serialize as "HH:MM" clock strings, with "24:00" as the end-of-day
/// sentinel. Within a day's ordered segment list, each segment's `end`
/// equals the next segment's `start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutySegment {
    pub status: DutyStatus,
    #[serde(with = "clock::serde_hhmm")]
    pub start: f64,
    #[serde(with = "clock::serde_hhmm")]
    pub end: f64,
    pub note: String,
}

impl DutySegment {
    pub fn duration_hours(&self) -> f64 {
        self.end - self.start
    }

    /// Segment start rendered as "HH:MM"
    pub fn start_clock(&self) -> String {
        clock::format_hours(self.start)
    }

    /// Segment end rendered as "HH:MM"
    pub fn end_clock(&self) -> String {
        clock::format_hours(self.end)
    }
}

/// All duty segments for one calendar day of the trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    pub date: NaiveDate,
    pub segments: Vec<DutySegment>,
}

impl DailyLog {
    /// Total driving hours recorded for this day
    pub fn driving_hours(&self) -> f64 {
        self.segments
            .iter()
            .filter(|s| s.status == DutyStatus::Driving)
            .map(DutySegment::duration_hours)
            .sum()
    }

    /// Total on-duty hours (driving plus on-duty-not-driving) for this day
    pub fn on_duty_hours(&self) -> f64 {
        self.segments
            .iter()
            .filter(|s| s.status != DutyStatus::OffDuty)
            .map(DutySegment::duration_hours)
            .sum()
    }
}
