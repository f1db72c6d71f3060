//! Hours-of-Service daily log simulation.
//!
//! Walks a trip day by day, allocating driving, on-duty and off-duty time
//! under the fixed property-carrying driver limits (11 h driving and a 14 h
//! on-duty window per day, a 30-minute break after 8 h of driving, 10 h off
//! duty to open each day, a 70 h rolling cycle) until the distance is
//! consumed or the cycle limit is reached.

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::defaults::{
    AVERAGE_SPEED_MPH, CYCLE_LIMIT_HOURS, MAX_DRIVING_HOURS_PER_DAY, MAX_ON_DUTY_HOURS_PER_DAY,
    PICKUP_DROPOFF_DURATION_HOURS, REQUIRED_OFF_DUTY_HOURS, REST_BREAK_AFTER_DRIVING_HOURS,
    REST_BREAK_DURATION_HOURS,
};
use crate::error::PlanError;
use crate::types::{DailyLog, DutySegment, DutyStatus};

/// Mutable accumulators for one simulated day.
///
/// `curr` is the hour-of-day cursor; driving and duty totals gate the
/// per-day limits, and `break_taken` makes the one-break-per-day rule an
/// explicit guard instead of an arithmetic inference.
struct DayState {
    curr: f64,
    drive_today: f64,
    duty_today: f64,
    break_taken: bool,
}

impl DayState {
    fn new() -> Self {
        Self {
            curr: 0.0,
            drive_today: 0.0,
            duty_today: 0.0,
            break_taken: false,
        }
    }

    /// Emit one segment from the cursor to `end` and advance the cursor.
    /// Duty/driving accounting stays at the call sites: paperwork fill time
    /// does not count toward the day's duty total.
    fn emit(&mut self, segments: &mut Vec<DutySegment>, status: DutyStatus, end: f64, note: &str) {
        segments.push(DutySegment {
            status,
            start: self.curr,
            end,
            note: note.to_string(),
        });
        self.curr = end;
    }
}

/// Simulate the HOS daily logs for a trip.
///
/// Produces one [`DailyLog`] per simulated day until the distance is
/// exhausted or the 70-hour cycle limit is reached, whichever comes first.
/// A `cycle_hours_used` of exactly 70 returns an empty sequence — no
/// further driving is legally possible in the current cycle.
pub fn generate_daily_logs(
    total_distance_miles: f64,
    start_date: NaiveDate,
    cycle_hours_used: f64,
) -> Result<Vec<DailyLog>, PlanError> {
    if !total_distance_miles.is_finite() || total_distance_miles <= 0.0 {
        return Err(PlanError::InvalidDistance(total_distance_miles));
    }
    if !cycle_hours_used.is_finite() || !(0.0..=CYCLE_LIMIT_HOURS).contains(&cycle_hours_used) {
        return Err(PlanError::InvalidCycleHours(cycle_hours_used));
    }

    let mut logs: Vec<DailyLog> = Vec::new();
    let mut miles_remaining = total_distance_miles;
    let mut cycle_hours = cycle_hours_used;
    let mut day: u64 = 0;

    while miles_remaining > 0.0 && cycle_hours < CYCLE_LIMIT_HOURS {
        day += 1;
        let date = start_date + Days::new(day - 1);
        let mut segments: Vec<DutySegment> = Vec::new();
        let mut state = DayState::new();

        // Mandatory 10 h off duty opens every day.
        state.emit(
            &mut segments,
            DutyStatus::OffDuty,
            REQUIRED_OFF_DUTY_HOURS,
            "overnight off-duty",
        );

        // 1 h on duty for pickup / pre-trip checks.
        let end = state.curr + PICKUP_DROPOFF_DURATION_HOURS;
        state.emit(
            &mut segments,
            DutyStatus::OnDutyNotDriving,
            end,
            "pickup/start checks",
        );
        state.duty_today += PICKUP_DROPOFF_DURATION_HOURS;

        // Driving blocks under the daily caps and the remaining distance.
        while state.drive_today < MAX_DRIVING_HOURS_PER_DAY
            && state.duty_today < MAX_ON_DUTY_HOURS_PER_DAY
            && miles_remaining > 0.0
        {
            let pre_break_cap = if state.break_taken {
                MAX_DRIVING_HOURS_PER_DAY - state.drive_today
            } else {
                REST_BREAK_AFTER_DRIVING_HOURS
            };
            let hours_for_remaining_miles = miles_remaining / AVERAGE_SPEED_MPH;
            let block = pre_break_cap
                .min(MAX_DRIVING_HOURS_PER_DAY - state.drive_today)
                .min(MAX_ON_DUTY_HOURS_PER_DAY - state.duty_today)
                .min(hours_for_remaining_miles);
            if block <= 0.0 {
                break;
            }

            let end = state.curr + block;
            state.emit(&mut segments, DutyStatus::Driving, end, "drive");
            state.drive_today += block;
            state.duty_today += block;
            // Zero out explicitly when the block covers everything left, so
            // float residue cannot leave a phantom sliver of distance.
            if block >= hours_for_remaining_miles {
                miles_remaining = 0.0;
            } else {
                miles_remaining -= block * AVERAGE_SPEED_MPH;
            }

            // 30-minute break the first time 8 driving hours are reached,
            // while the day still has driving allowance and miles left.
            if !state.break_taken
                && state.drive_today >= REST_BREAK_AFTER_DRIVING_HOURS
                && state.drive_today < MAX_DRIVING_HOURS_PER_DAY
                && miles_remaining > 0.0
            {
                let end = state.curr + REST_BREAK_DURATION_HOURS;
                state.emit(&mut segments, DutyStatus::OnDutyNotDriving, end, "rest break");
                state.duty_today += REST_BREAK_DURATION_HOURS;
                state.break_taken = true;
            }
        }

        // Delivery completed today: 1 h dropoff.
        if miles_remaining <= 0.0 {
            let end = state.curr + PICKUP_DROPOFF_DURATION_HOURS;
            state.emit(&mut segments, DutyStatus::OnDutyNotDriving, end, "dropoff");
            state.duty_today += PICKUP_DROPOFF_DURATION_HOURS;
        }

        // Fill the rest of the 14 h window with non-driving duty.
        if state.duty_today < MAX_ON_DUTY_HOURS_PER_DAY {
            let end = (state.curr + (MAX_ON_DUTY_HOURS_PER_DAY - state.duty_today)).min(24.0);
            if end > state.curr {
                state.emit(
                    &mut segments,
                    DutyStatus::OnDutyNotDriving,
                    end,
                    "paperwork/inspection",
                );
            }
        }

        // Off duty to midnight.
        if state.curr < 24.0 {
            state.emit(&mut segments, DutyStatus::OffDuty, 24.0, "overnight");
        }

        cycle_hours += state.duty_today;
        debug!(
            day,
            %date,
            drive_today = state.drive_today,
            duty_today = state.duty_today,
            miles_remaining,
            cycle_hours,
            "simulated day"
        );
        logs.push(DailyLog { date, segments });
    }

    debug!(days = logs.len(), total_distance_miles, "generated daily logs");
    Ok(logs)
}
