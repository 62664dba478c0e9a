pub mod booking;
pub mod location;
pub mod login;
