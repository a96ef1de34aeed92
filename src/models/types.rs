use serde::{Deserialize, Serialize};

#[macro_export]
macro_rules! define_id {
    ($name:ident, $inner:ty) => {
        #[derive(
            Copy,
            Clone,
            Debug,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[repr(transparent)]
        #[serde(transparent)] // TOML/JSON = plain integer
        pub struct $name(pub $inner);

        impl $name {
            #[inline]
            pub const fn new(v: $inner) -> Self {
                Self(v)
            }
            #[inline]
            pub const fn get(&self) -> $inner {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl core::str::FromStr for $name {
            type Err = core::num::ParseIntError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<$inner>().map(Self)
            }
        }

        impl From<$inner> for $name {
            fn from(v: $inner) -> Self {
                Self(v)
            }
        }
        impl From<$name> for $inner {
            fn from(v: $name) -> $inner {
                v.0
            }
        }
    };
}

define_id!(RoomNumber, u32);
define_id!(BookingId, u64);

impl BookingId {
    /// First id handed out by a fresh registry.
    pub const FIRST: BookingId = BookingId(1000);

    /// Returns the id that follows this one.
    #[inline]
    pub const fn next(self) -> BookingId {
        BookingId(self.0 + 1)
    }
}

/// Category label of a room. The set is open; these are the labels of the
/// default inventory.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomType(String);

impl RoomType {
    pub const SINGLE: &'static str = "Single";
    pub const DOUBLE: &'static str = "Double";
    pub const SUITE: &'static str = "Suite";

    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against an operator supplied label.
    pub fn matches(&self, label: &str) -> bool {
        self.0.to_lowercase() == label.to_lowercase()
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomType {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
