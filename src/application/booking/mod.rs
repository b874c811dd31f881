mod booking_processor;
mod errors;

pub use booking_processor::{ServiceDependencies, book_desk, list_bookings};
pub use errors::{BookingApplicationError, Result};
