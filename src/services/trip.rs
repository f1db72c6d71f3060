//! Whole-trip planning: stops plus daily logs.

use tracing::info;

use crate::error::PlanError;
use crate::services::{hos, stop_planner};
use crate::types::{Coordinates, TripContext, TripPlan};

/// Plan a full trip from its route geometry and context.
///
/// Combines [`stop_planner::plan_stops`] and [`hos::generate_daily_logs`]
/// into the summary record the orchestrator persists. The two computations
/// are independent; neither consumes the other's output.
pub fn plan_trip(path: &[Coordinates], ctx: &TripContext) -> Result<TripPlan, PlanError> {
    let stops = stop_planner::plan_stops(path, ctx.total_distance_miles)?;
    let logs = hos::generate_daily_logs(
        ctx.total_distance_miles,
        ctx.start_date,
        ctx.cycle_hours_used,
    )?;
    info!(
        distance_miles = ctx.total_distance_miles,
        stops = stops.len(),
        estimated_days = logs.len(),
        "trip planned"
    );
    Ok(TripPlan {
        distance_miles: ctx.total_distance_miles,
        estimated_days: logs.len() as u32,
        stops,
        logs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn two_point_path() -> Vec<Coordinates> {
        vec![
            Coordinates { lat: 32.7767, lng: -96.7970 },
            Coordinates { lat: 41.8781, lng: -87.6298 },
        ]
    }

    #[test]
    fn test_plan_combines_stops_and_logs() {
        let ctx = TripContext {
            total_distance_miles: 1100.0,
            start_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            cycle_hours_used: 0.0,
        };
        let plan = plan_trip(&two_point_path(), &ctx).unwrap();
        assert_eq!(plan.distance_miles, 1100.0);
        assert_eq!(plan.estimated_days, plan.logs.len() as u32);
        assert_eq!(plan.estimated_days, 2);
        // 1100 miles crosses the 1000-mile threshold once
        assert_eq!(plan.stops.len(), 4);
    }

    #[test]
    fn test_exhausted_cycle_still_plans_stops() {
        let ctx = TripContext {
            total_distance_miles: 500.0,
            start_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            cycle_hours_used: 70.0,
        };
        let plan = plan_trip(&two_point_path(), &ctx).unwrap();
        assert_eq!(plan.estimated_days, 0);
        assert!(plan.logs.is_empty());
        assert_eq!(plan.stops.len(), 3);
    }

    #[test]
    fn test_invalid_distance_propagates() {
        let ctx = TripContext {
            total_distance_miles: -1.0,
            start_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            cycle_hours_used: 0.0,
        };
        assert!(matches!(
            plan_trip(&two_point_path(), &ctx).unwrap_err(),
            PlanError::InvalidDistance(_)
        ));
    }
}
