//! Schedule summary metrics.
//!
//! Computes display-oriented figures from a week schedule: hours placed
//! per day, week utilization, and the busiest day. Consumed by the
//! calendar header and reporting collaborators.

use crate::models::{WeekSchedule, Weekday, WorkingHours, DAYS_PER_WEEK};

/// Aggregate figures for one week schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleSummary {
    /// Hours placed on each day, Monday-first.
    pub hours_per_day: [u32; DAYS_PER_WEEK],
    /// Total hours placed across the week.
    pub total_hours: u32,
    /// Total placeable hours (`7 * daily capacity`).
    pub week_capacity: u32,
    /// `total_hours / week_capacity`, or 0.0 for an empty window.
    pub utilization: f64,
    /// Day with the most placed hours. `None` for an empty schedule;
    /// earliest day wins ties.
    pub busiest_day: Option<Weekday>,
}

impl ScheduleSummary {
    /// Computes summary figures from a schedule and its window.
    pub fn calculate(schedule: &WeekSchedule, hours: &WorkingHours) -> Self {
        let mut hours_per_day = [0u32; DAYS_PER_WEEK];
        for p in &schedule.placements {
            hours_per_day[p.day.index()] += u32::from(p.duration_hours());
        }

        let total_hours: u32 = hours_per_day.iter().sum();
        let week_capacity = hours.week_capacity();
        let utilization = if week_capacity == 0 {
            0.0
        } else {
            f64::from(total_hours) / f64::from(week_capacity)
        };

        let busiest_day = if total_hours == 0 {
            None
        } else {
            hours_per_day
                .iter()
                .enumerate()
                .max_by(|(ia, a), (ib, b)| a.cmp(b).then(ib.cmp(ia)))
                .and_then(|(i, _)| Weekday::from_index(i))
        };

        Self {
            hours_per_day,
            total_hours,
            week_capacity,
            utilization,
            busiest_day,
        }
    }

    /// Hours still placeable on a day.
    pub fn free_hours_on(&self, day: Weekday, hours: &WorkingHours) -> u32 {
        u32::from(hours.daily_capacity()).saturating_sub(self.hours_per_day[day.index()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Placement;

    fn schedule() -> WeekSchedule {
        let mut s = WeekSchedule::new();
        s.add(Placement::new("T1", Weekday::Monday, 9, 13));
        s.add(Placement::new("T2", Weekday::Monday, 13, 18));
        s.add(Placement::new("T3", Weekday::Tuesday, 9, 12));
        s
    }

    #[test]
    fn test_summary_figures() {
        let hours = WorkingHours::new(9, 18);
        let summary = ScheduleSummary::calculate(&schedule(), &hours);

        assert_eq!(summary.hours_per_day[0], 9); // Monday full
        assert_eq!(summary.hours_per_day[1], 3);
        assert_eq!(summary.total_hours, 12);
        assert_eq!(summary.week_capacity, 63);
        assert!((summary.utilization - 12.0 / 63.0).abs() < 1e-10);
        assert_eq!(summary.busiest_day, Some(Weekday::Monday));
    }

    #[test]
    fn test_busiest_day_tie_prefers_earliest() {
        let mut s = WeekSchedule::new();
        s.add(Placement::new("T1", Weekday::Wednesday, 9, 12));
        s.add(Placement::new("T2", Weekday::Friday, 9, 12));

        let summary = ScheduleSummary::calculate(&s, &WorkingHours::new(9, 18));
        assert_eq!(summary.busiest_day, Some(Weekday::Wednesday));
    }

    #[test]
    fn test_free_hours() {
        let hours = WorkingHours::new(9, 18);
        let summary = ScheduleSummary::calculate(&schedule(), &hours);

        assert_eq!(summary.free_hours_on(Weekday::Monday, &hours), 0);
        assert_eq!(summary.free_hours_on(Weekday::Tuesday, &hours), 6);
        assert_eq!(summary.free_hours_on(Weekday::Sunday, &hours), 9);
    }

    #[test]
    fn test_empty_schedule() {
        let summary = ScheduleSummary::calculate(&WeekSchedule::new(), &WorkingHours::new(9, 18));
        assert_eq!(summary.total_hours, 0);
        assert!((summary.utilization - 0.0).abs() < 1e-10);
        assert_eq!(summary.busiest_day, None);
    }
}
