pub mod ansi;
pub mod banner;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod rendering;
pub mod shell;
pub mod state;

// Convenient re-exports (so call sites can do `frontdesk::Registry`, etc.)
pub use error::{AppResult, DomainError};
pub use models::types::{BookingId, RoomNumber, RoomType};
pub use models::{Booking, Room};
pub use shell::{Shell, ShellOptions};
pub use state::registry::Registry;
