use hotel_booking::{
    domain::hotel::Hotel,
    domain::room::Room,
    error::Error,
    generate_hotel,
};

fn hotel_with(numbers: &[i64]) -> Hotel {
    let mut hotel = Hotel::new();
    for &n in numbers {
        hotel.add_room(Room::new(n));
    }
    hotel
}

#[test]
fn test_find_room_for_many_numbers() {
    let numbers: Vec<i64> = vec![1, 2, 17, 101, 999, i64::MAX];
    let hotel = hotel_with(&numbers);

    for n in numbers {
        let room = hotel.find_room(n).unwrap().expect("room should be present");
        assert_eq!(room.room_number(), n);
    }
}

#[test]
fn test_non_positive_numbers_are_invalid_argument() {
    let mut hotel = hotel_with(&[101]);

    for n in [0, -1, -101, i64::MIN] {
        assert!(matches!(hotel.find_room(n), Err(Error::InvalidArgument(_))));
        assert!(matches!(hotel.book_room(n), Err(Error::InvalidArgument(_))));
        assert!(matches!(hotel.cancel_booking(n), Err(Error::InvalidArgument(_))));
    }
    assert_eq!(hotel.available_count(), 1);
}

#[test]
fn test_fresh_room_is_bookable() {
    let mut hotel = Hotel::new();
    hotel.add_room(Room::new(42));
    assert!(hotel.book_room(42).unwrap());
}

#[test]
fn test_double_booking_returns_false() {
    let mut hotel = hotel_with(&[42]);
    assert!(hotel.book_room(42).unwrap());
    assert!(!hotel.book_room(42).unwrap());
}

#[test]
fn test_cancel_never_booked_returns_false() {
    let mut hotel = hotel_with(&[42]);
    assert!(!hotel.cancel_booking(42).unwrap());
    assert!(hotel.find_room(42).unwrap().unwrap().is_available());
}

#[test]
fn test_round_trip_room_is_bookable_again() {
    let mut hotel = Hotel::new();
    hotel.add_room(Room::new(5));

    assert!(hotel.book_room(5).unwrap());
    assert!(hotel.cancel_booking(5).unwrap());
    assert!(hotel.book_room(5).unwrap());
}

#[test]
fn test_missing_room_returns_false() {
    let mut hotel = Hotel::new();
    assert!(!hotel.book_room(999).unwrap());
    assert!(!hotel.cancel_booking(999).unwrap());
}

#[test]
fn test_direct_room_misuse_is_invalid_state() {
    let mut room = Room::new(3);
    assert!(matches!(room.cancel_booking(), Err(Error::InvalidState(_))));
    room.book().unwrap();
    assert!(matches!(room.book(), Err(Error::InvalidState(_))));
}

#[test]
fn test_demo_scenario() {
    let mut hotel = generate_hotel(None).unwrap();

    let numbers: Vec<i64> = hotel.rooms().iter().map(Room::room_number).collect();
    assert_eq!(numbers, vec![101, 102, 103]);

    assert!(hotel.book_room(102).unwrap());
    assert_eq!(hotel.available_count(), 2);
    assert!(hotel.cancel_booking(102).unwrap());
    assert_eq!(hotel.available_count(), 3);
}
