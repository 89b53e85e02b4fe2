use serde::Deserialize;

/// On-disk hotel inventory.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelDto {
    pub name: Option<String>,
    pub rooms: Vec<RoomDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub room_number: i64,
}
