use std::collections::HashMap;

/// Operator-authored availability flag for a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomStatus {
    Available,
    OutOfService { reason: String },
}

/// What a floor-plan cell should show once manual overrides are merged with
/// the engine's derived occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveRoomState<'a> {
    OutOfService(&'a str),
    Occupied,
    Free,
}

/// Manual out-of-service flags, keyed by room display name
///
/// This is the only mutable, user-authored state near the status engine.
/// The engine itself never sees it; the presentation layer merges it with
/// derived occupancy, and a manual flag always wins over the paper
/// schedule (a physically unavailable room stays "Out of Service" even
/// while a class is scheduled there).
///
/// Validation of the reason text happens at the UI boundary, not here.
#[derive(Debug, Default)]
pub struct RoomOverrides {
    out_of_service: HashMap<String, String>,
}

impl RoomOverrides {
    pub fn new() -> Self {
        RoomOverrides::default()
    }

    pub fn set_out_of_service(&mut self, room: &str, reason: &str) {
        self.out_of_service
            .insert(room.to_string(), reason.to_string());
    }

    pub fn set_available(&mut self, room: &str) {
        self.out_of_service.remove(room);
    }

    pub fn status(&self, room: &str) -> RoomStatus {
        match self.out_of_service.get(room) {
            Some(reason) => RoomStatus::OutOfService {
                reason: reason.clone(),
            },
            None => RoomStatus::Available,
        }
    }

    /// Merge rule used by the presentation layer: the manual flag takes
    /// precedence over derived occupancy.
    pub fn effective_state(&self, room: &str, occupied: bool) -> EffectiveRoomState<'_> {
        match self.out_of_service.get(room) {
            Some(reason) => EffectiveRoomState::OutOfService(reason),
            None if occupied => EffectiveRoomState::Occupied,
            None => EffectiveRoomState::Free,
        }
    }
}
