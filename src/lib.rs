use crate::api::hotel_dto::HotelDto;
use crate::domain::hotel::Hotel;
use crate::domain::room::Room;
use crate::error::Result;
use crate::loader::parser::parse_json_file;

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Room numbers of the demo hotel used when no inventory file is given.
pub const DEFAULT_ROOMS: [i64; 3] = [101, 102, 103];

/// Builds the hotel for the demo, either from an inventory file or from [`DEFAULT_ROOMS`].
pub fn generate_hotel(file_path: Option<&str>) -> Result<Hotel> {
    let Some(file_path) = file_path else {
        let mut hotel = Hotel::new();
        for room_number in DEFAULT_ROOMS {
            hotel.add_room(Room::new(room_number));
        }
        log::info!("Default hotel constructed with {} rooms.", hotel.len());
        return Ok(hotel);
    };

    log::info!("Loading hotel inventory from path: '{}'...", file_path);
    let dto: HotelDto = parse_json_file::<HotelDto>(file_path)?;
    log::info!("JSON file parsed successfully.");

    Ok(Hotel::from_dto(dto))
}
