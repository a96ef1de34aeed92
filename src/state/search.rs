use crate::models::Room;
use crate::models::types::RoomNumber;
use crate::state::registry::Registry;

impl Registry {
    /// First room carrying `number`, if any.
    pub fn find_room_by_number(&self, number: RoomNumber) -> Option<&Room> {
        let found = self.rooms.iter().find(|r| r.number() == number);
        tracing::debug!(room = %number, found = found.is_some(), "search by number");
        found
    }

    /// All rooms whose type matches `room_type`, ignoring case. An empty
    /// result means nothing matched.
    pub fn find_rooms_by_type(&self, room_type: &str) -> Vec<&Room> {
        let found: Vec<&Room> = self.rooms.iter().filter(|r| r.room_type().matches(room_type)).collect();
        tracing::debug!(room_type, hits = found.len(), "search by type");
        found
    }
}
