pub mod availability;
pub mod booking;
pub mod contact;
pub mod health;
pub mod session;
