use clap::Parser;

use hotel_booking::{generate_hotel, logger};

/// Books a room and cancels the booking again.
#[derive(Debug, Parser)]
#[command(name = "hotel_booking", version, about, allow_negative_numbers = true)]
struct Args {
    /// JSON inventory file; the demo rooms 101, 102 and 103 are used if omitted.
    #[arg(long)]
    rooms: Option<String>,

    /// Room number to book and cancel.
    #[arg(long, default_value_t = 102)]
    room: i64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init();

    let mut hotel = generate_hotel(args.rooms.as_deref())?;
    let room_number = args.room;

    if hotel.book_room(room_number)? {
        println!("Room {} is booked.", room_number);
    } else {
        println!("Room {} is not available.", room_number);
    }

    if hotel.cancel_booking(room_number)? {
        println!("Booking for room {} is canceled.", room_number);
    } else {
        println!("Room {} is not booked.", room_number);
    }

    hotel.log_summary();

    Ok(())
}
