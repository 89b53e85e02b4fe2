pub mod hotel;
pub mod room;
pub mod shared_hotel;
