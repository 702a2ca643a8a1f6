/// The live status engine
///
/// One pure derivation turns (period catalog, assignment table, roster,
/// group tracks, now) into everything the dashboard displays: the active
/// period, per-room occupancy, per-student status and location, the live
/// class list, and the overall academy status. The clock is the only impure
/// input and it arrives as a plain value, so the same inputs always produce
/// the same snapshot and tests can pin "now" wherever they like.
///
/// The engine never panics and never returns an error: a lookup miss
/// degrades to a documented fallback ("Unscheduled", empty occupancy, empty
/// class list) instead of raising.
use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

use super::rooms::room_location_label;
use super::schedule::{
    current_period, first_start, last_end, weekday_name, Assignment, AssignmentKind, Period,
    PeriodKind,
};
use super::students::{GroupTracks, Student};

/// Everything the engine needs apart from the clock. Built once at startup
/// and shared read-only by every tick.
pub struct AcademyData {
    pub periods: Vec<Period>,
    pub assignments: Vec<Assignment>,
    pub students: Vec<Student>,
    pub tracks: GroupTracks,
}

/// Live status of a single student
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentStatus {
    InClass,
    Break,
    Finished,
    Upcoming,
}

impl StudentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudentStatus::InClass => "In Class",
            StudentStatus::Break => "Break",
            StudentStatus::Finished => "Finished",
            StudentStatus::Upcoming => "Upcoming",
        }
    }
}

/// Which curriculum track a live class belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackType {
    Industrial,
    Service,
    Professional,
}

impl TrackType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackType::Industrial => "industrial",
            TrackType::Service => "service",
            TrackType::Professional => "professional",
        }
    }
}

/// Theory vs practical, inferred from where the class is held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionType {
    Theory,
    Practical,
}

impl SessionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::Theory => "theory",
            SessionType::Practical => "practical",
        }
    }
}

/// Per-student view, fully recomputed every tick and never stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveStudent {
    pub nava_id: String,
    pub full_name: String,
    pub tech_group: String,
    pub status: StudentStatus,
    pub location: String,
    /// Name of the active period, None outside any period
    pub current_period: Option<String>,
}

/// One currently-running class, one entry per active (group, period) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveClass {
    pub group: String,
    pub track_type: TrackType,
    /// Schedule-naming room code
    pub classroom: String,
    pub instructors: Vec<String>,
    pub session_type: SessionType,
    pub topic: String,
}

/// Who is in a room right now, keyed by schedule-naming room code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyEntry {
    pub group: String,
    pub track_type: TrackType,
    pub instructors: Vec<String>,
    pub session_type: SessionType,
    pub topic: String,
}

/// The view-model every display component consumes
#[derive(Debug, Clone)]
pub struct LiveSnapshot {
    pub now: DateTime<FixedOffset>,
    pub week_number: u32,
    pub day_name: &'static str,
    pub current_period: Option<Period>,
    /// Minutes until the active period ends, None outside any period
    pub minutes_remaining: Option<u32>,
    /// Progress through the active period in [0, 1], 0.0 outside any period
    pub period_progress: f64,
    pub occupancy: HashMap<String, OccupancyEntry>,
    pub live_classes: Vec<LiveClass>,
    pub live_students: Vec<LiveStudent>,
    pub overall_status: String,
    pub is_operational_hours: bool,
}

/// Derive the full live snapshot for one instant
///
/// `simulated` forces the operational-hours flag on so an operator driving
/// the date scrubber can preview any point of any day.
pub fn derive_snapshot(
    data: &AcademyData,
    now: DateTime<FixedOffset>,
    simulated: bool,
) -> LiveSnapshot {
    // Hour/minute/weekday are extracted from `now`, which the clock already
    // resolved into the academy's fixed zone.
    let minute = now.hour() * 60 + now.minute();
    let day_name = weekday_name(now.weekday());
    let week_number = now.iso_week().week();

    let day_start = first_start(&data.periods);
    let day_end = last_end(&data.periods);
    let day_has_schedule = data.assignments.iter().any(|a| a.day == day_name);

    let within_day = match (day_start, day_end) {
        (Some(start), Some(end)) => start <= minute && minute < end,
        _ => false,
    };
    let is_operational_hours = simulated || (day_has_schedule && within_day);

    let current = current_period(&data.periods, minute).cloned();
    let before_day = day_start.map_or(false, |start| minute < start);

    let overall_status = match &current {
        Some(period) if period.kind == PeriodKind::Class => "In Class".to_string(),
        // Break-type periods surface their own name ("Break", "Lunch")
        Some(period) => period.name.clone(),
        None if before_day => "Upcoming".to_string(),
        None => "Finished".to_string(),
    };

    // Assignments for (today, current period), indexed by group. First match
    // wins, which defensively enforces one-room-per-group if the data ever
    // violates its uniqueness invariant.
    let mut by_group: HashMap<&str, &Assignment> = HashMap::new();
    if let Some(period) = &current {
        if period.kind == PeriodKind::Class {
            for assignment in data
                .assignments
                .iter()
                .filter(|a| a.day == day_name && a.period == period.name)
            {
                by_group.entry(&assignment.group).or_insert(assignment);
            }
        }
    }

    let live_students = data
        .students
        .iter()
        .map(|student| live_student(student, &current, before_day, &by_group))
        .collect();

    let (live_classes, occupancy) = live_classes_and_occupancy(data, &current, day_name);

    let (minutes_remaining, period_progress) = countdown(&current, minute);

    LiveSnapshot {
        now,
        week_number,
        day_name,
        current_period: current,
        minutes_remaining,
        period_progress,
        occupancy,
        live_classes,
        live_students,
        overall_status,
        is_operational_hours,
    }
}

fn live_student(
    student: &Student,
    current: &Option<Period>,
    before_day: bool,
    by_group: &HashMap<&str, &Assignment>,
) -> LiveStudent {
    // Before the first period nothing can be scheduled yet, so every
    // student short-circuits to the same state.
    let (status, location) = if before_day {
        (StudentStatus::Upcoming, "Not started".to_string())
    } else {
        match current {
            None => (StudentStatus::Finished, "N/A".to_string()),
            Some(period) if period.kind == PeriodKind::Break => {
                (StudentStatus::Break, "On Break".to_string())
            }
            Some(_) => {
                // A group with no assignment this period is a legitimate gap
                // in its timetable, not an error.
                let location = by_group
                    .get(student.tech_group.as_str())
                    .map(|a| room_location_label(&a.classroom))
                    .unwrap_or_else(|| "Unscheduled".to_string());
                (StudentStatus::InClass, location)
            }
        }
    };

    LiveStudent {
        nava_id: student.nava_id.clone(),
        full_name: student.full_name(),
        tech_group: student.tech_group.clone(),
        status,
        location,
        current_period: current.as_ref().map(|p| p.name.clone()),
    }
}

fn live_classes_and_occupancy(
    data: &AcademyData,
    current: &Option<Period>,
    day_name: &str,
) -> (Vec<LiveClass>, HashMap<String, OccupancyEntry>) {
    let mut classes = Vec::new();
    let mut occupancy = HashMap::new();

    // Only an active class period puts anyone in a room; breaks and
    // out-of-hours leave both outputs empty.
    let period = match current {
        Some(p) if p.kind == PeriodKind::Class => p,
        _ => return (classes, occupancy),
    };

    let mut seen_groups: HashSet<&str> = HashSet::new();
    for assignment in data
        .assignments
        .iter()
        .filter(|a| a.day == day_name && a.period == period.name)
    {
        // First occurrence per group wins
        if !seen_groups.insert(&assignment.group) {
            continue;
        }

        let track_type = classify_track(assignment, &data.tracks);
        let session_type = classify_session(&assignment.classroom);

        occupancy.insert(
            assignment.classroom.clone(),
            OccupancyEntry {
                group: assignment.group.clone(),
                track_type,
                instructors: assignment.instructors.clone(),
                session_type,
                topic: assignment.topic.clone(),
            },
        );
        classes.push(LiveClass {
            group: assignment.group.clone(),
            track_type,
            classroom: assignment.classroom.clone(),
            instructors: assignment.instructors.clone(),
            session_type,
            topic: assignment.topic.clone(),
        });
    }

    // Deterministic display order
    classes.sort_by(|a, b| a.group.cmp(&b.group));
    (classes, occupancy)
}

/// Technical sessions take their track from the group metadata; anything
/// else, including a group missing from the metadata, is professional.
fn classify_track(assignment: &Assignment, tracks: &super::students::GroupTracks) -> TrackType {
    match assignment.kind {
        AssignmentKind::Technical => match tracks.get(&assignment.group).map(String::as_str) {
            Some("industrial") => TrackType::Industrial,
            Some("service") => TrackType::Service,
            _ => TrackType::Professional,
        },
        AssignmentKind::ProfessionalDevelopment => TrackType::Professional,
    }
}

/// Theory vs practical is inferred from the room-code prefix because the
/// schedule carries no explicit field for it. If the source data ever grows
/// one, that field should win and this becomes the fallback.
fn classify_session(classroom: &str) -> SessionType {
    if classroom.starts_with("2.") || classroom.starts_with("3.") {
        SessionType::Theory
    } else {
        SessionType::Practical
    }
}

fn countdown(current: &Option<Period>, minute: u32) -> (Option<u32>, f64) {
    if let Some(period) = current {
        if let (Some(start), Some(end)) = (period.start_minute(), period.end_minute()) {
            if end > start {
                let remaining = end - minute;
                let progress = f64::from(minute - start) / f64::from(end - start);
                return (Some(remaining), progress);
            }
        }
    }
    (None, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::clock::academy_offset;
    use crate::model::sample_day::sample_academy;
    use chrono::TimeZone;

    /// 2025-03-02 is a Sunday, a scheduled day in the sample data.
    fn sunday_at(hour: u32, min: u32) -> DateTime<FixedOffset> {
        academy_offset()
            .with_ymd_and_hms(2025, 3, 2, hour, min, 0)
            .unwrap()
    }

    /// 2025-03-01 is a Saturday with no assignments.
    fn saturday_at(hour: u32, min: u32) -> DateTime<FixedOffset> {
        academy_offset()
            .with_ymd_and_hms(2025, 3, 1, hour, min, 0)
            .unwrap()
    }

    fn statuses(snapshot: &LiveSnapshot) -> Vec<StudentStatus> {
        snapshot.live_students.iter().map(|s| s.status).collect()
    }

    #[test]
    fn fixture_satisfies_uniqueness_invariant() {
        // For a fixed (day, period) each group and each classroom appears at
        // most once. The engine tolerates violations (first group wins, last
        // room wins) but the authored data must not contain any.
        let data = sample_academy();
        let mut seen: HashSet<(String, String, String)> = HashSet::new();
        for a in &data.assignments {
            assert!(
                seen.insert((a.day.clone(), a.period.clone(), a.group.clone())),
                "group {} doubled in ({}, {})",
                a.group,
                a.day,
                a.period
            );
        }
        let mut rooms: HashSet<(String, String, String)> = HashSet::new();
        for a in &data.assignments {
            assert!(
                rooms.insert((a.day.clone(), a.period.clone(), a.classroom.clone())),
                "room {} doubled in ({}, {})",
                a.classroom,
                a.day,
                a.period
            );
        }
    }

    #[test]
    fn fixture_periods_are_sorted_and_parsable() {
        let data = sample_academy();
        let mut last_end_minute = 0;
        for period in &data.periods {
            let start = period.start_minute().expect("parsable start");
            let end = period.end_minute().expect("parsable end");
            assert!(start < end, "{} is empty or inverted", period.name);
            assert!(start >= last_end_minute, "{} overlaps its predecessor", period.name);
            last_end_minute = end;
        }
    }

    #[test]
    fn before_day_starts_everyone_is_upcoming() {
        let data = sample_academy();
        let snapshot = derive_snapshot(&data, sunday_at(7, 30), false);

        assert_eq!(snapshot.overall_status, "Upcoming");
        assert!(snapshot.current_period.is_none());
        assert!(snapshot.occupancy.is_empty());
        assert!(snapshot.live_classes.is_empty());
        assert!(!snapshot.is_operational_hours);
        for student in &snapshot.live_students {
            assert_eq!(student.status, StudentStatus::Upcoming);
            assert_eq!(student.location, "Not started");
            assert_eq!(student.current_period, None);
        }
    }

    #[test]
    fn mid_class_resolves_occupancy_and_locations() {
        let data = sample_academy();
        let snapshot = derive_snapshot(&data, sunday_at(8, 45), false);

        let period = snapshot.current_period.as_ref().unwrap();
        assert_eq!(period.name, "P1");
        assert_eq!(snapshot.overall_status, "In Class");
        assert!(snapshot.is_operational_hours);

        let entry = &snapshot.occupancy["2.01"];
        assert_eq!(entry.group, "DPIT-01");
        assert_eq!(entry.track_type, TrackType::Industrial);
        assert_eq!(entry.session_type, SessionType::Theory);

        let student = snapshot
            .live_students
            .iter()
            .find(|s| s.tech_group == "DPIT-01")
            .unwrap();
        assert_eq!(student.status, StudentStatus::InClass);
        assert_eq!(student.location, "Classroom: C-201");
        assert_eq!(student.current_period.as_deref(), Some("P1"));
    }

    #[test]
    fn break_period_surfaces_its_name() {
        let data = sample_academy();
        let snapshot = derive_snapshot(&data, sunday_at(9, 40), false);

        assert_eq!(snapshot.overall_status, "Break");
        assert!(snapshot.occupancy.is_empty());
        assert!(snapshot.live_classes.is_empty());
        for student in &snapshot.live_students {
            assert_eq!(student.status, StudentStatus::Break);
            assert_eq!(student.location, "On Break");
        }
    }

    #[test]
    fn after_day_ends_everyone_is_finished() {
        let data = sample_academy();
        let snapshot = derive_snapshot(&data, sunday_at(16, 0), false);

        assert_eq!(snapshot.overall_status, "Finished");
        assert!(snapshot.current_period.is_none());
        assert!(snapshot.occupancy.is_empty());
        assert!(!snapshot.is_operational_hours);
        for student in &snapshot.live_students {
            assert_eq!(student.status, StudentStatus::Finished);
            assert_eq!(student.location, "N/A");
        }
    }

    #[test]
    fn exactly_at_period_end_the_next_period_is_current() {
        let data = sample_academy();

        // 09:30 is the end of P1 and the start of Break: the break wins.
        let snapshot = derive_snapshot(&data, sunday_at(9, 30), false);
        assert_eq!(snapshot.current_period.as_ref().unwrap().name, "Break");

        // Last second of P1 still belongs to P1.
        let snapshot = derive_snapshot(&data, sunday_at(9, 29), false);
        assert_eq!(snapshot.current_period.as_ref().unwrap().name, "P1");
    }

    #[test]
    fn derivation_is_idempotent() {
        let data = sample_academy();
        let now = sunday_at(10, 15);
        let first = derive_snapshot(&data, now, false);
        let second = derive_snapshot(&data, now, false);

        assert_eq!(first.overall_status, second.overall_status);
        assert_eq!(first.current_period, second.current_period);
        assert_eq!(first.occupancy, second.occupancy);
        assert_eq!(first.live_classes, second.live_classes);
        assert_eq!(first.live_students, second.live_students);
        assert_eq!(first.minutes_remaining, second.minutes_remaining);
        assert_eq!(first.is_operational_hours, second.is_operational_hours);
    }

    #[test]
    fn status_partition_is_exactly_one_of_the_known_states() {
        let data = sample_academy();
        for minute in (0..24 * 60).step_by(7) {
            let now = sunday_at(minute / 60, minute % 60);
            let snapshot = derive_snapshot(&data, now, false);
            match snapshot.current_period {
                Some(ref p) if p.kind == PeriodKind::Class => {
                    assert_eq!(snapshot.overall_status, "In Class")
                }
                Some(ref p) => assert_eq!(snapshot.overall_status, p.name),
                None => assert!(
                    snapshot.overall_status == "Upcoming" || snapshot.overall_status == "Finished"
                ),
            }
        }
    }

    #[test]
    fn occupancy_is_subset_of_active_assignments() {
        let data = sample_academy();
        for minute in (0..24 * 60).step_by(5) {
            let now = sunday_at(minute / 60, minute % 60);
            let snapshot = derive_snapshot(&data, now, false);

            match &snapshot.current_period {
                Some(p) if p.kind == PeriodKind::Class => {
                    for (room, entry) in &snapshot.occupancy {
                        let matching: Vec<_> = data
                            .assignments
                            .iter()
                            .filter(|a| {
                                a.day == "Sunday"
                                    && a.period == p.name
                                    && a.classroom == *room
                                    && a.group == entry.group
                            })
                            .collect();
                        assert_eq!(matching.len(), 1, "room {} has no unique source row", room);
                    }
                }
                _ => assert!(snapshot.occupancy.is_empty()),
            }
        }
    }

    #[test]
    fn unscheduled_group_is_in_class_without_a_room() {
        let data = sample_academy();
        // DPFND-04 has no P1 assignment on Sunday in the sample data.
        let snapshot = derive_snapshot(&data, sunday_at(8, 45), false);

        let gap = snapshot
            .live_students
            .iter()
            .find(|s| s.tech_group == "DPFND-04")
            .unwrap();
        assert_eq!(gap.status, StudentStatus::InClass);
        assert_eq!(gap.location, "Unscheduled");

        // Every student is "In Class" during a class period; only the
        // location distinguishes assigned from unscheduled groups.
        assert!(statuses(&snapshot)
            .iter()
            .all(|s| *s == StudentStatus::InClass));
    }

    #[test]
    fn live_classes_sorted_by_group() {
        let data = sample_academy();
        let snapshot = derive_snapshot(&data, sunday_at(8, 45), false);
        let groups: Vec<&str> = snapshot.live_classes.iter().map(|c| c.group.as_str()).collect();
        let mut sorted = groups.clone();
        sorted.sort();
        assert_eq!(groups, sorted);
        assert!(!groups.is_empty());
    }

    #[test]
    fn duplicate_group_rows_keep_first_occurrence() {
        let mut data = sample_academy();
        // Violate the invariant on purpose: DPIT-01 appears a second time in
        // another room during Sunday P1.
        data.assignments.push(Assignment {
            id: 9001,
            day: "Sunday".to_string(),
            period: "P1".to_string(),
            group: "DPIT-01".to_string(),
            classroom: "2.02".to_string(),
            instructors: vec!["Ghost".to_string()],
            topic: "Duplicate".to_string(),
            kind: AssignmentKind::Technical,
        });

        let snapshot = derive_snapshot(&data, sunday_at(8, 45), false);
        let dpit: Vec<_> = snapshot
            .live_classes
            .iter()
            .filter(|c| c.group == "DPIT-01")
            .collect();
        assert_eq!(dpit.len(), 1);
        assert_eq!(dpit[0].classroom, "2.01");
        assert!(!snapshot.occupancy.contains_key("2.02"));
    }

    #[test]
    fn track_classification_and_defaults() {
        let data = sample_academy();
        let snapshot = derive_snapshot(&data, sunday_at(8, 45), false);

        let by_group: HashMap<&str, &LiveClass> = snapshot
            .live_classes
            .iter()
            .map(|c| (c.group.as_str(), c))
            .collect();
        assert_eq!(by_group["DPIT-01"].track_type, TrackType::Industrial);
        assert_eq!(by_group["DPHOSP-03"].track_type, TrackType::Service);
        // Professional Development rows are professional regardless of track
        let snapshot_p3 = derive_snapshot(&data, sunday_at(12, 30), false);
        let pd = snapshot_p3
            .live_classes
            .iter()
            .find(|c| c.group == "DPIT-01")
            .unwrap();
        assert_eq!(pd.track_type, TrackType::Professional);
    }

    #[test]
    fn missing_track_metadata_defaults_to_professional() {
        let mut data = sample_academy();
        data.tracks.remove("DPIT-01");
        let snapshot = derive_snapshot(&data, sunday_at(8, 45), false);
        let dpit = snapshot
            .live_classes
            .iter()
            .find(|c| c.group == "DPIT-01")
            .unwrap();
        assert_eq!(dpit.track_type, TrackType::Professional);
    }

    #[test]
    fn session_type_follows_room_prefix() {
        let data = sample_academy();
        let snapshot = derive_snapshot(&data, sunday_at(8, 45), false);

        // "2." and "3." rooms are theory, labs and workshops are practical
        assert_eq!(snapshot.occupancy["2.01"].session_type, SessionType::Theory);
        assert_eq!(snapshot.occupancy["1.05"].session_type, SessionType::Practical);
        assert_eq!(snapshot.occupancy["WS-0.13"].session_type, SessionType::Practical);
    }

    #[test]
    fn simulation_forces_operational_hours() {
        let data = sample_academy();
        // 07:30 on Sunday is outside operational hours in live mode
        assert!(!derive_snapshot(&data, sunday_at(7, 30), false).is_operational_hours);
        assert!(derive_snapshot(&data, sunday_at(7, 30), true).is_operational_hours);
    }

    #[test]
    fn unscheduled_weekday_is_never_operational() {
        let data = sample_academy();
        // Saturday has periods on the clock but no assignments
        let snapshot = derive_snapshot(&data, saturday_at(8, 45), false);
        assert!(!snapshot.is_operational_hours);
    }

    #[test]
    fn countdown_tracks_the_active_period() {
        let data = sample_academy();
        // P1 runs 08:00-09:30; at 08:45 half of it is gone
        let snapshot = derive_snapshot(&data, sunday_at(8, 45), false);
        assert_eq!(snapshot.minutes_remaining, Some(45));
        assert!((snapshot.period_progress - 0.5).abs() < 1e-9);

        let idle = derive_snapshot(&data, sunday_at(7, 0), false);
        assert_eq!(idle.minutes_remaining, None);
        assert_eq!(idle.period_progress, 0.0);
    }

    #[test]
    fn week_number_comes_from_the_resolved_date() {
        let data = sample_academy();
        let snapshot = derive_snapshot(&data, sunday_at(8, 45), false);
        assert_eq!(snapshot.week_number, 9); // ISO week of 2025-03-02
        assert_eq!(snapshot.day_name, "Sunday");
    }
}
