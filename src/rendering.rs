use crate::ansi;
use crate::models::{Booking, Room};

/// One line describing a room, with the occupancy status highlighted.
pub fn room_line(room: &Room, color: bool) -> String {
    let status = if room.is_occupied() {
        ansi::paint(color, ansi::FG_YELLOW, &format!("Occupied by {}", room.guest_name()))
    } else {
        ansi::paint(color, ansi::FG_GREEN, "Available")
    };
    format!(
        "Room {} ({}) - ${:.2}/night - {}",
        room.number(),
        room.room_type(),
        room.price_per_night(),
        status
    )
}

pub fn booking_line(booking: &Booking, color: bool) -> String {
    let total = ansi::paint(color, ansi::BOLD, &format!("${:.2}", booking.total_amount));
    format!(
        "Booking #{}: {} - Room {} - {} days - Total: {}",
        booking.id, booking.guest_name, booking.room_number, booking.days, total
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::{BookingId, RoomNumber};

    #[test]
    fn plain_lines_match_display() {
        let mut room = Room::new(RoomNumber(101), "Single", 50.0);
        assert_eq!(room_line(&room, false), "Room 101 (Single) - $50.00/night - Available");
        assert_eq!(room_line(&room, false), room.to_string());

        room.occupy("Alice".to_string());
        assert_eq!(room_line(&room, false), "Room 101 (Single) - $50.00/night - Occupied by Alice");

        let booking = Booking::new(BookingId(1000), "Alice", RoomNumber(101), 3, 50.0);
        assert_eq!(booking_line(&booking, false), "Booking #1000: Alice - Room 101 - 3 days - Total: $150.00");
        assert_eq!(booking_line(&booking, false), booking.to_string());
    }

    #[test]
    fn coloured_status() {
        let room = Room::new(RoomNumber(105), "Suite", 120.0);
        assert!(room_line(&room, true).ends_with("\x1b[32mAvailable\x1b[0m"));
    }
}
