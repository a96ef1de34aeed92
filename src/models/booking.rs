use crate::models::types::{BookingId, RoomNumber};
use chrono::{DateTime, Utc};

/// One guest's stay in one room. The total is computed once at check-in and
/// never recalculated.
#[derive(Clone, Debug, PartialEq)]
pub struct Booking {
    pub id: BookingId,
    pub guest_name: String,
    /// Back-reference by value; the room itself is owned by the registry.
    pub room_number: RoomNumber,
    pub days: i32,
    pub total_amount: f64,
    pub checked_in_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(id: BookingId, guest_name: impl Into<String>, room_number: RoomNumber, days: i32, price_per_night: f64) -> Self {
        Self {
            id,
            guest_name: guest_name.into(),
            room_number,
            days,
            total_amount: f64::from(days) * price_per_night,
            checked_in_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for Booking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Booking #{}: {} - Room {} - {} days - Total: ${:.2}",
            self.id, self.guest_name, self.room_number, self.days, self.total_amount
        )
    }
}
