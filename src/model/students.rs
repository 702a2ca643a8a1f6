use std::collections::HashMap;

/// A student as seen by the dashboard: base identity plus the technical
/// group they currently belong to. The group is resolved upstream from the
/// academic history when the roster is analyzed, so the engine treats it as
/// a plain field.
#[derive(Debug, Clone)]
pub struct Student {
    pub nava_id: String,
    pub name: String,
    pub surname: String,
    pub company: String,
    /// Current technical group code, e.g. "DPIT-01"
    pub tech_group: String,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

/// Group code -> track name ("industrial" / "service"). Groups missing from
/// the map are treated as unclassified by the status engine.
pub type GroupTracks = HashMap<String, String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_name_and_surname() {
        let student = Student {
            nava_id: "N1001".to_string(),
            name: "Omar".to_string(),
            surname: "Alharbi".to_string(),
            company: "Nava".to_string(),
            tech_group: "DPIT-01".to_string(),
        };
        assert_eq!(student.full_name(), "Omar Alharbi");
    }
}
