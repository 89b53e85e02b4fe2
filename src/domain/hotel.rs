use crate::api::hotel_dto::HotelDto;
use crate::domain::room::Room;
use crate::error::{Error, Result};

/// Owns an ordered collection of rooms and exposes the booking operations.
///
/// Rooms keep their insertion order. Duplicate room numbers are accepted by
/// [`Hotel::add_room`], but lookups always resolve to the first match.
#[derive(Debug, Clone, Default)]
pub struct Hotel {
    rooms: Vec<Room>,
}

impl Hotel {
    pub fn new() -> Self {
        Self { rooms: Vec::new() }
    }

    /// Builds a hotel from a parsed inventory, adding rooms in file order.
    pub fn from_dto(dto: HotelDto) -> Self {
        let mut hotel = Hotel::new();
        for room_dto in dto.rooms {
            hotel.add_room(Room::new(room_dto.room_number));
        }

        match dto.name {
            Some(name) => log::info!("Hotel '{}' constructed with {} rooms.", name, hotel.len()),
            None => log::info!("Hotel constructed with {} rooms.", hotel.len()),
        }

        hotel
    }

    pub fn add_room(&mut self, room: Room) {
        log::debug!("Adding room {}.", room.room_number());
        self.rooms.push(room);
    }

    /// Books the room with the given number.
    ///
    /// # Returns
    /// `Ok(true)` if the room was found and available, `Ok(false)` if it is
    /// missing or already booked.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if `room_number <= 0`.
    pub fn book_room(&mut self, room_number: i64) -> Result<bool> {
        match self.find_room_mut(room_number)? {
            Some(room) if room.is_available() => {
                room.book()?;
                log::info!("Room {} booked.", room_number);
                Ok(true)
            }
            Some(_) => {
                log::debug!("Room {} is already booked.", room_number);
                Ok(false)
            }
            None => {
                log::debug!("Room {} not found.", room_number);
                Ok(false)
            }
        }
    }

    /// Cancels the booking on the room with the given number.
    ///
    /// # Returns
    /// `Ok(true)` if the room was found and booked, `Ok(false)` if it is
    /// missing or not booked.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if `room_number <= 0`.
    pub fn cancel_booking(&mut self, room_number: i64) -> Result<bool> {
        match self.find_room_mut(room_number)? {
            Some(room) if !room.is_available() => {
                room.cancel_booking()?;
                log::info!("Booking for room {} canceled.", room_number);
                Ok(true)
            }
            Some(_) => {
                log::debug!("Room {} is not booked.", room_number);
                Ok(false)
            }
            None => {
                log::debug!("Room {} not found.", room_number);
                Ok(false)
            }
        }
    }

    /// Returns the first room with the given number, in insertion order.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if `room_number <= 0`.
    pub fn find_room(&self, room_number: i64) -> Result<Option<&Room>> {
        validate_room_number(room_number)?;
        Ok(self.rooms.iter().find(|room| room.room_number() == room_number))
    }

    fn find_room_mut(&mut self, room_number: i64) -> Result<Option<&mut Room>> {
        validate_room_number(room_number)?;
        Ok(self.rooms.iter_mut().find(|room| room.room_number() == room_number))
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn available_count(&self) -> usize {
        self.rooms.iter().filter(|room| room.is_available()).count()
    }

    pub fn log_summary(&self) {
        log::info!("--- Hotel Summary: {} rooms, {} available ---", self.len(), self.available_count());
        for room in &self.rooms {
            log::info!("  {}", room);
        }
    }
}

fn validate_room_number(room_number: i64) -> Result<()> {
    if room_number <= 0 {
        log::warn!("Rejected lookup for room number {}.", room_number);
        return Err(Error::InvalidArgument(format!("{} (room numbers must be positive)", room_number)));
    }
    Ok(())
}
