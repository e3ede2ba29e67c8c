pub mod booking;
pub mod room;
pub mod room_type;
