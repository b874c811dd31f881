pub mod booking_store;
pub mod desk_directory;

// パブリックに型を再エクスポート
pub use booking_store::BookingStore as PostgresBookingStore;
pub use desk_directory::DeskDirectory as PostgresDeskDirectory;
