/// The model module contains the schedule data and all live derivation logic
pub mod clock;
pub mod overrides;
pub mod rooms;
pub mod sample_day;
pub mod schedule;
pub mod status;
pub mod students;
