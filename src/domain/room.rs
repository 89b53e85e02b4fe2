use std::fmt;

use crate::error::{Error, Result};

/// A single bookable room.
///
/// The room number is fixed at construction. Availability flips only through
/// [`Room::book`] and [`Room::cancel_booking`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    room_number: i64,
    available: bool,
}

impl Room {
    pub fn new(room_number: i64) -> Self {
        Self { room_number, available: true }
    }

    pub fn room_number(&self) -> i64 {
        self.room_number
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Marks the room as booked.
    ///
    /// # Errors
    /// Returns `Error::InvalidState` if the room is already booked.
    pub fn book(&mut self) -> Result<()> {
        if !self.available {
            log::warn!("Attempt to book room {} which is already booked.", self.room_number);
            return Err(Error::InvalidState(format!("Room {} is already booked.", self.room_number)));
        }
        self.available = false;
        Ok(())
    }

    /// Releases the booking on the room.
    ///
    /// # Errors
    /// Returns `Error::InvalidState` if the room is not booked.
    pub fn cancel_booking(&mut self) -> Result<()> {
        if self.available {
            log::warn!("Attempt to cancel room {} which is not booked.", self.room_number);
            return Err(Error::InvalidState(format!("Room {} is not booked.", self.room_number)));
        }
        self.available = true;
        Ok(())
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.available { "available" } else { "booked" };
        write!(f, "Room {} ({})", self.room_number, state)
    }
}
