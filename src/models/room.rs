use crate::models::types::{RoomNumber, RoomType};

/// A numbered unit of inventory. Number, type and nightly rate are fixed at
/// creation; only the occupancy changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Room {
    number: RoomNumber,
    room_type: RoomType,
    price_per_night: f64,
    /// `Some` exactly while the room is occupied.
    guest: Option<String>,
}

impl Room {
    pub fn new(number: RoomNumber, room_type: impl Into<RoomType>, price_per_night: f64) -> Self {
        Self {
            number,
            room_type: room_type.into(),
            price_per_night,
            guest: None,
        }
    }

    #[inline]
    pub fn number(&self) -> RoomNumber {
        self.number
    }

    #[inline]
    pub fn room_type(&self) -> &RoomType {
        &self.room_type
    }

    #[inline]
    pub fn price_per_night(&self) -> f64 {
        self.price_per_night
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.guest.is_some()
    }

    /// Name of the current guest, empty when the room is available.
    pub fn guest_name(&self) -> &str {
        self.guest.as_deref().unwrap_or("")
    }

    pub(crate) fn occupy(&mut self, guest_name: String) {
        self.guest = Some(guest_name);
    }

    pub(crate) fn vacate(&mut self) {
        self.guest = None;
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Room {} ({}) - ${:.2}/night - ",
            self.number, self.room_type, self.price_per_night
        )?;
        match &self.guest {
            Some(name) => write!(f, "Occupied by {name}"),
            None => f.write_str("Available"),
        }
    }
}
