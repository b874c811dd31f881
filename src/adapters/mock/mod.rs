pub mod booking_store;
pub mod desk_directory;

pub use booking_store::BookingStore;
pub use desk_directory::DeskDirectory;
