use std::sync::{Arc, RwLock};

use crate::domain::hotel::Hotel;
use crate::domain::room::Room;
use crate::error::{Error, Result};

/// Thread-safe handle to a [`Hotel`].
///
/// A single lock guards the whole hotel, so the lookup and the state flip of
/// `book_room` / `cancel_booking` happen atomically. Clones share the hotel.
#[derive(Debug, Clone, Default)]
pub struct SharedHotel {
    inner: Arc<RwLock<Hotel>>,
}

impl SharedHotel {
    pub fn new(hotel: Hotel) -> Self {
        Self { inner: Arc::new(RwLock::new(hotel)) }
    }

    pub fn add_room(&self, room: Room) -> Result<()> {
        let mut guard = self.inner.write().map_err(|_| Error::LockPoisoned)?;
        guard.add_room(room);
        Ok(())
    }

    pub fn book_room(&self, room_number: i64) -> Result<bool> {
        let mut guard = self.inner.write().map_err(|_| Error::LockPoisoned)?;
        guard.book_room(room_number)
    }

    pub fn cancel_booking(&self, room_number: i64) -> Result<bool> {
        let mut guard = self.inner.write().map_err(|_| Error::LockPoisoned)?;
        guard.cancel_booking(room_number)
    }

    /// # Returns
    /// `Some(availability)` of the first room with that number, `None` if there is none.
    pub fn is_available(&self, room_number: i64) -> Result<Option<bool>> {
        let guard = self.inner.read().map_err(|_| Error::LockPoisoned)?;
        Ok(guard.find_room(room_number)?.map(Room::is_available))
    }

    /// Copy of the current hotel state.
    pub fn snapshot(&self) -> Result<Hotel> {
        let guard = self.inner.read().map_err(|_| Error::LockPoisoned)?;
        Ok(guard.clone())
    }
}
