pub mod booking_ledger;
pub mod booking_store;
pub mod desk_directory;

pub use booking_ledger::*;
pub use booking_store::*;
pub use desk_directory::*;
