pub mod availability;
pub mod booking;
pub mod contact;
pub mod session;
pub mod time_slot;
