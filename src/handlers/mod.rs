pub mod bookings;
pub mod pages;
pub mod rooms;
pub mod search;
