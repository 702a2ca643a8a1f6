/// Built-in demo dataset: one week of the academy's schedule, a small
/// roster, and the group-track metadata. Used by the console walkthrough
/// when no config file is given, and as the fixture for the engine tests.
use super::schedule::{Assignment, AssignmentKind, Period, PeriodKind};
use super::status::AcademyData;
use super::students::{GroupTracks, Student};

fn period_catalog() -> Vec<Period> {
    vec![
        Period::new("P1", "08:00", "09:30", PeriodKind::Class),
        Period::new("Break", "09:30", "09:45", PeriodKind::Break),
        Period::new("P2", "09:45", "11:15", PeriodKind::Class),
        Period::new("Lunch", "11:15", "12:00", PeriodKind::Break),
        Period::new("P3", "12:00", "13:30", PeriodKind::Class),
        Period::new("P4", "13:30", "15:00", PeriodKind::Class),
    ]
}

fn assignment(
    id: u32,
    day: &str,
    period: &str,
    group: &str,
    classroom: &str,
    instructor: &str,
    topic: &str,
    kind: AssignmentKind,
) -> Assignment {
    Assignment {
        id,
        day: day.to_string(),
        period: period.to_string(),
        group: group.to_string(),
        classroom: classroom.to_string(),
        instructors: vec![instructor.to_string()],
        topic: topic.to_string(),
        kind,
    }
}

fn assignment_table() -> Vec<Assignment> {
    use AssignmentKind::{ProfessionalDevelopment, Technical};

    vec![
        // Sunday P1: DPFND-04 deliberately has a timetable gap here
        assignment(1, "Sunday", "P1", "DPIT-01", "2.01", "Hesham", "U20 Networking Basics", Technical),
        assignment(2, "Sunday", "P1", "DPWELD-02", "WS-0.13", "Khalid", "MIG Welding Practice", Technical),
        assignment(3, "Sunday", "P1", "DPHOSP-03", "1.05", "Sara", "Food Safety Lab", Technical),
        // Sunday P2
        assignment(4, "Sunday", "P2", "DPIT-01", "1.02", "Hesham", "Router Configuration Lab", Technical),
        assignment(5, "Sunday", "P2", "DPWELD-02", "2.02", "Khalid", "Weld Metallurgy Theory", Technical),
        assignment(6, "Sunday", "P2", "DPHOSP-03", "2.03", "Sara", "Menu Planning", Technical),
        assignment(7, "Sunday", "P2", "DPFND-04", "2.04", "Lena", "Applied Mathematics", Technical),
        // Sunday P3: whole-cohort professional development block
        assignment(8, "Sunday", "P3", "DPIT-01", "3.02", "Mariam", "Workplace Communication", ProfessionalDevelopment),
        assignment(9, "Sunday", "P3", "DPWELD-02", "3.03", "Mariam", "Workplace Communication", ProfessionalDevelopment),
        assignment(10, "Sunday", "P3", "DPHOSP-03", "2.05", "Faisal", "CV Writing", ProfessionalDevelopment),
        assignment(11, "Sunday", "P3", "DPFND-04", "2.06", "Faisal", "Study Skills", ProfessionalDevelopment),
        // Sunday P4
        assignment(12, "Sunday", "P4", "DPIT-01", "2.01", "Hesham", "Network Troubleshooting", Technical),
        assignment(13, "Sunday", "P4", "DPWELD-02", "WS-0.13", "Khalid", "Joint Inspection", Technical),
        assignment(14, "Sunday", "P4", "DPFND-04", "1.03", "Lena", "IT Fundamentals Lab", Technical),
        // Monday P1
        assignment(15, "Monday", "P1", "DPIT-01", "1.02", "Hesham", "Switching Lab", Technical),
        assignment(16, "Monday", "P1", "DPWELD-02", "2.02", "Khalid", "Safety Standards", Technical),
        assignment(17, "Monday", "P1", "DPHOSP-03", "1.05", "Sara", "Kitchen Operations", Technical),
        assignment(18, "Monday", "P1", "DPFND-04", "2.04", "Lena", "English for Work", Technical),
        // Monday P2
        assignment(19, "Monday", "P2", "DPIT-01", "2.01", "Hesham", "Subnetting", Technical),
        assignment(20, "Monday", "P2", "DPWELD-02", "WS-0.13", "Khalid", "TIG Welding Practice", Technical),
    ]
}

fn roster() -> Vec<Student> {
    let make = |nava_id: &str, name: &str, surname: &str, company: &str, group: &str| Student {
        nava_id: nava_id.to_string(),
        name: name.to_string(),
        surname: surname.to_string(),
        company: company.to_string(),
        tech_group: group.to_string(),
    };

    vec![
        make("N1001", "Omar", "Alharbi", "Nava", "DPIT-01"),
        make("N1002", "Yousef", "Alqahtani", "Nava", "DPIT-01"),
        make("N1003", "Fahad", "Alotaibi", "Delta", "DPWELD-02"),
        make("N1004", "Salem", "Alghamdi", "Delta", "DPWELD-02"),
        make("N1005", "Noura", "Alshehri", "Crest", "DPHOSP-03"),
        make("N1006", "Reem", "Almutairi", "Crest", "DPHOSP-03"),
        make("N1007", "Hassan", "Alzahrani", "Nava", "DPFND-04"),
        make("N1008", "Majed", "Aldossari", "Delta", "DPFND-04"),
    ]
}

fn group_tracks() -> GroupTracks {
    let mut tracks = GroupTracks::new();
    tracks.insert("DPIT-01".to_string(), "industrial".to_string());
    tracks.insert("DPWELD-02".to_string(), "industrial".to_string());
    tracks.insert("DPHOSP-03".to_string(), "service".to_string());
    tracks.insert("DPFND-04".to_string(), "service".to_string());
    tracks
}

/// The full demo academy
pub fn sample_academy() -> AcademyData {
    AcademyData {
        periods: period_catalog(),
        assignments: assignment_table(),
        students: roster(),
        tracks: group_tracks(),
    }
}
