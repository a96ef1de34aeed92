//! Parser for operator input at the front desk console.
//!
//! Examples:
//!   "1" or "rooms"        -> MenuChoice::ViewRooms
//!   "2" or "checkin"      -> MenuChoice::CheckIn
//!   "6" or "quit"         -> MenuChoice::Exit
//!   "2" (search sub-menu) -> SearchChoice::ByType
//!
//! Numbers are trimmed before parsing; anything else yields `None` and the
//! caller decides how to report it.

use crate::models::types::RoomNumber;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewRooms,
    CheckIn,
    CheckOut,
    ViewBookings,
    Search,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::ViewRooms,
        MenuChoice::CheckIn,
        MenuChoice::CheckOut,
        MenuChoice::ViewBookings,
        MenuChoice::Search,
        MenuChoice::Exit,
    ];

    /// Number shown next to the entry in the menu.
    pub fn number(&self) -> u8 {
        match self {
            MenuChoice::ViewRooms => 1,
            MenuChoice::CheckIn => 2,
            MenuChoice::CheckOut => 3,
            MenuChoice::ViewBookings => 4,
            MenuChoice::Search => 5,
            MenuChoice::Exit => 6,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MenuChoice::ViewRooms => "View All Rooms",
            MenuChoice::CheckIn => "Check In",
            MenuChoice::CheckOut => "Check Out",
            MenuChoice::ViewBookings => "View All Bookings",
            MenuChoice::Search => "Search Room",
            MenuChoice::Exit => "Exit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchChoice {
    ByNumber,
    ByType,
}

impl SearchChoice {
    pub fn as_str(&self) -> &str {
        match self {
            SearchChoice::ByNumber => "Room Number",
            SearchChoice::ByType => "Room Type",
        }
    }
}

pub fn parse_menu_choice(raw: &str) -> Option<MenuChoice> {
    let s = raw.trim().to_ascii_lowercase();
    let choice = match s.as_str() {
        "1" | "rooms" | "view" => MenuChoice::ViewRooms,
        "2" | "checkin" | "check-in" | "in" => MenuChoice::CheckIn,
        "3" | "checkout" | "check-out" | "out" => MenuChoice::CheckOut,
        "4" | "bookings" => MenuChoice::ViewBookings,
        "5" | "search" | "find" => MenuChoice::Search,
        "6" | "exit" | "quit" | "q" => MenuChoice::Exit,
        _ => return None,
    };
    Some(choice)
}

pub fn parse_search_choice(raw: &str) -> Option<SearchChoice> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "number" => Some(SearchChoice::ByNumber),
        "2" | "type" => Some(SearchChoice::ByType),
        _ => None,
    }
}

pub fn parse_room_number(raw: &str) -> Option<RoomNumber> {
    raw.parse().ok()
}

/// Day counts are plain integers; zero and negative values parse too.
pub fn parse_days(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}
