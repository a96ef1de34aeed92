pub mod booking;
pub mod room;
pub mod types;

pub use booking::Booking;
pub use room::Room;
