use crate::error::{AppResult, DomainError};
use crate::models::types::{BookingId, RoomNumber, RoomType};
use crate::models::{Booking, Room};

/// Single owner of all room and booking state for the lifetime of the process.
#[derive(Debug)]
pub struct Registry {
    /// Rooms in insertion order
    pub(super) rooms: Vec<Room>,
    /// Active bookings in insertion order
    bookings: Vec<Booking>,
    /// Next id to hand out; never reused, even after check-out
    next_booking_id: BookingId,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// An empty registry, without any rooms.
    pub fn new() -> Self {
        Self {
            rooms: Vec::new(),
            bookings: Vec::new(),
            next_booking_id: BookingId::FIRST,
        }
    }

    /// A registry holding the default five-room inventory.
    pub fn initialized() -> Self {
        let mut registry = Self::new();
        registry.initialize();
        registry
    }

    /// A registry holding the given rooms, in the given order.
    pub fn with_rooms(rooms: Vec<Room>) -> Self {
        Self { rooms, ..Self::new() }
    }

    /// Populates the fixed starting inventory: rooms 101-105.
    pub fn initialize(&mut self) {
        self.rooms.extend([
            Room::new(RoomNumber(101), RoomType::SINGLE, 50.0),
            Room::new(RoomNumber(102), RoomType::SINGLE, 50.0),
            Room::new(RoomNumber(103), RoomType::DOUBLE, 80.0),
            Room::new(RoomNumber(104), RoomType::DOUBLE, 80.0),
            Room::new(RoomNumber(105), RoomType::SUITE, 120.0),
        ]);
        tracing::debug!(rooms = self.rooms.len(), "inventory initialized");
    }

    pub fn list_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    pub fn list_available_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|r| !r.is_occupied())
    }

    pub fn list_bookings(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.iter()
    }

    /// Marks the room occupied and records a new booking for it.
    ///
    /// Guest name and day count are taken as given; the registry does not
    /// validate them.
    pub fn check_in(&mut self, number: RoomNumber, guest_name: impl Into<String>, days: i32) -> AppResult<&Booking> {
        let guest_name = guest_name.into();
        let room = self
            .rooms
            .iter_mut()
            .find(|r| r.number() == number)
            .ok_or(DomainError::RoomNotFound(number))?;

        if room.is_occupied() {
            return Err(DomainError::RoomAlreadyOccupied(number));
        }

        let id = self.next_booking_id;
        self.next_booking_id = id.next();

        let booking = Booking::new(id, guest_name.clone(), number, days, room.price_per_night());
        room.occupy(guest_name);

        tracing::info!(booking = %booking.id, room = %number, guest = %booking.guest_name, days, total = booking.total_amount, "checked in");
        self.bookings.push(booking);

        Ok(&self.bookings[self.bookings.len() - 1])
    }

    /// Clears the room and removes the first booking recorded for it.
    ///
    /// A missing booking is not an error: the room is cleared regardless and
    /// `Ok(None)` is returned.
    pub fn check_out(&mut self, number: RoomNumber) -> AppResult<Option<Booking>> {
        let room = self
            .rooms
            .iter_mut()
            .find(|r| r.number() == number)
            .ok_or(DomainError::RoomNotFound(number))?;

        if !room.is_occupied() {
            return Err(DomainError::RoomNotOccupied(number));
        }
        room.vacate();

        let removed = self
            .bookings
            .iter()
            .position(|b| b.room_number == number)
            .map(|ix| self.bookings.remove(ix));

        match &removed {
            Some(b) => tracing::info!(booking = %b.id, room = %number, "checked out"),
            None => tracing::warn!(room = %number, "checked out without a matching booking"),
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invariant_holds(reg: &Registry) -> bool {
        reg.list_rooms().all(|r| r.is_occupied() == !r.guest_name().is_empty())
    }

    #[test]
    fn initialize_builds_default_inventory() {
        let reg = Registry::initialized();
        let rooms: Vec<_> = reg.list_rooms().map(|r| (r.number().get(), r.room_type().as_str(), r.price_per_night())).collect();
        assert_eq!(
            rooms,
            vec![
                (101, "Single", 50.0),
                (102, "Single", 50.0),
                (103, "Double", 80.0),
                (104, "Double", 80.0),
                (105, "Suite", 120.0),
            ]
        );
        assert_eq!(reg.list_bookings().count(), 0);
        assert!(invariant_holds(&reg));
    }

    #[test]
    fn check_in_occupies_room_and_records_booking() {
        let mut reg = Registry::initialized();
        let booking = reg.check_in(RoomNumber(101), "Alice", 3).unwrap();
        assert_eq!(booking.id, BookingId(1000));
        assert_eq!(booking.total_amount, 150.0);

        let room = reg.list_rooms().next().unwrap();
        assert!(room.is_occupied());
        assert_eq!(room.guest_name(), "Alice");
        assert!(invariant_holds(&reg));
    }

    #[test]
    fn available_rooms_skip_occupied() {
        let mut reg = Registry::initialized();
        reg.check_in(RoomNumber(103), "Eve", 2).unwrap();
        let available: Vec<u32> = reg.list_available_rooms().map(|r| r.number().get()).collect();
        assert_eq!(available, vec![101, 102, 104, 105]);
    }

    #[test]
    fn check_out_removes_first_matching_booking_only() {
        let mut reg = Registry::initialized();
        reg.check_in(RoomNumber(101), "Alice", 1).unwrap();
        reg.check_in(RoomNumber(102), "Bob", 2).unwrap();

        let removed = reg.check_out(RoomNumber(101)).unwrap().unwrap();
        assert_eq!(removed.guest_name, "Alice");

        let left: Vec<_> = reg.list_bookings().map(|b| b.room_number).collect();
        assert_eq!(left, vec![RoomNumber(102)]);
    }

    #[test]
    fn check_out_without_booking_still_clears_room() {
        let mut reg = Registry::initialized();
        reg.rooms[4].occupy("Ghost".to_string());

        assert_eq!(reg.check_out(RoomNumber(105)), Ok(None));
        assert!(!reg.rooms[4].is_occupied());
        assert!(invariant_holds(&reg));
    }

    #[test]
    fn check_in_accepts_unvalidated_days() {
        let mut reg = Registry::initialized();
        let booking = reg.check_in(RoomNumber(104), "Zed", 0).unwrap();
        assert_eq!(booking.total_amount, 0.0);
    }

    #[test]
    fn empty_registry_reports_room_not_found() {
        let mut reg = Registry::new();
        assert_eq!(reg.check_in(RoomNumber(101), "Alice", 1).unwrap_err(), DomainError::RoomNotFound(RoomNumber(101)));
        assert_eq!(reg.check_out(RoomNumber(101)).unwrap_err(), DomainError::RoomNotFound(RoomNumber(101)));
    }
}
