/// The daily period catalog and the weekly assignment table
///
/// Key concepts:
/// - Period: a named time block ("P1", "Break") with HH:MM boundaries
/// - Assignment: one (day, period, group, room) binding from the weekly plan
/// - Current-period lookup: half-open [start, end) interval containment
use chrono::Weekday;

/// Whether a period is instructional or a pause between classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodKind {
    Class,
    Break,
}

/// A named time block in the daily schedule
///
/// The catalog is loaded once at startup, sorted ascending by start time,
/// non-overlapping, and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    pub name: String,
    /// Start of the block, "HH:MM"
    pub start: String,
    /// End of the block, "HH:MM" (exclusive)
    pub end: String,
    pub kind: PeriodKind,
}

impl Period {
    pub fn new(name: &str, start: &str, end: &str, kind: PeriodKind) -> Self {
        Period {
            name: name.to_string(),
            start: start.to_string(),
            end: end.to_string(),
            kind,
        }
    }

    /// Start boundary as minutes since midnight, None if the string is malformed
    pub fn start_minute(&self) -> Option<u32> {
        time_to_minutes(&self.start)
    }

    /// End boundary as minutes since midnight, None if the string is malformed
    pub fn end_minute(&self) -> Option<u32> {
        time_to_minutes(&self.end)
    }
}

/// How a scheduled session is categorised in the weekly plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentKind {
    Technical,
    ProfessionalDevelopment,
}

/// One scheduled (group, room, instructors, topic) binding for a (day, period)
///
/// Room codes use the schedule naming scheme ("2.01", "WS-0.13"), not the
/// schematic naming used by the floor plan. The table is static for the
/// session: for a fixed (day, period) each group and each classroom is
/// expected to appear at most once. That invariant is a property of the
/// authored data, not something the engine enforces, so fixture tests assert
/// it instead.
#[derive(Debug, Clone)]
pub struct Assignment {
    pub id: u32,
    /// Weekday name, e.g. "Sunday"
    pub day: String,
    /// Period name, matching an entry in the period catalog
    pub period: String,
    pub group: String,
    /// Room code in schedule naming
    pub classroom: String,
    /// Never empty in valid data
    pub instructors: Vec<String>,
    pub topic: String,
    pub kind: AssignmentKind,
}

/// Parse "HH:MM" into minutes since midnight
///
/// Returns None on anything malformed. A period with an unparsable boundary
/// can never become the current period, which is the degraded-but-valid
/// behavior the engine relies on.
pub fn time_to_minutes(hhmm: &str) -> Option<u32> {
    let (h, m) = hhmm.split_once(':')?;
    let h: u32 = h.parse().ok()?;
    let m: u32 = m.parse().ok()?;
    if h > 23 || m > 59 {
        return None;
    }
    Some(h * 60 + m)
}

/// Find the active period for a minute-of-day
///
/// The active period is the first one whose half-open [start, end) interval
/// contains the minute. At exactly `end` the period is no longer current.
pub fn current_period(periods: &[Period], minute: u32) -> Option<&Period> {
    periods.iter().find(|p| match (p.start_minute(), p.end_minute()) {
        (Some(start), Some(end)) => start <= minute && minute < end,
        _ => false,
    })
}

/// First parsable start boundary of the day
pub fn first_start(periods: &[Period]) -> Option<u32> {
    periods.iter().filter_map(|p| p.start_minute()).min()
}

/// Last parsable end boundary of the day
pub fn last_end(periods: &[Period]) -> Option<u32> {
    periods.iter().filter_map(|p| p.end_minute()).max()
}

/// Fixed English weekday names, matching the `day` field of assignments
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Period> {
        vec![
            Period::new("P1", "08:00", "09:30", PeriodKind::Class),
            Period::new("Break", "09:30", "09:45", PeriodKind::Break),
            Period::new("P2", "09:45", "11:15", PeriodKind::Class),
        ]
    }

    #[test]
    fn parses_valid_times() {
        assert_eq!(time_to_minutes("08:00"), Some(480));
        assert_eq!(time_to_minutes("00:00"), Some(0));
        assert_eq!(time_to_minutes("23:59"), Some(1439));
    }

    #[test]
    fn rejects_malformed_times() {
        assert_eq!(time_to_minutes(""), None);
        assert_eq!(time_to_minutes("8"), None);
        assert_eq!(time_to_minutes("ab:cd"), None);
        assert_eq!(time_to_minutes("24:00"), None);
        assert_eq!(time_to_minutes("12:60"), None);
    }

    #[test]
    fn half_open_interval_contains_start_not_end() {
        let periods = catalog();

        // Exactly at start: current
        assert_eq!(current_period(&periods, 480).unwrap().name, "P1");
        // Mid-period
        assert_eq!(current_period(&periods, 525).unwrap().name, "P1");
        // Exactly at end: the NEXT period is current, never this one
        assert_eq!(current_period(&periods, 570).unwrap().name, "Break");
        assert_eq!(current_period(&periods, 585).unwrap().name, "P2");
    }

    #[test]
    fn no_period_outside_day_bounds() {
        let periods = catalog();
        assert!(current_period(&periods, 479).is_none());
        // Exactly at the last end
        assert!(current_period(&periods, 675).is_none());
        assert!(current_period(&periods, 700).is_none());
    }

    #[test]
    fn malformed_boundary_never_matches() {
        let periods = vec![Period::new("P1", "8am", "09:30", PeriodKind::Class)];
        assert!(current_period(&periods, 500).is_none());
    }

    #[test]
    fn day_bounds_from_catalog() {
        let periods = catalog();
        assert_eq!(first_start(&periods), Some(480));
        assert_eq!(last_end(&periods), Some(675));
        assert_eq!(first_start(&[]), None);
        assert_eq!(last_end(&[]), None);
    }

    #[test]
    fn weekday_names_are_stable() {
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
        assert_eq!(weekday_name(Weekday::Thu), "Thursday");
    }
}
