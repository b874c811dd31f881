use crate::domain::{Desk, DeskId};
use crate::ports::desk_directory::{DeskDirectory as DeskDirectoryTrait, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex};

use super::booking_store::{BookingStore, SharedBookings};

/// Mock implementation of DeskDirectory
///
/// Keeps registered desks ordered by id. A desk is taken on a date when it was
/// marked with `mark_booked` or when a booking for it sits in the shared
/// booking table.
#[derive(Debug)]
pub struct DeskDirectory {
    desks: Mutex<BTreeMap<DeskId, Desk>>,
    booked: Mutex<HashSet<(NaiveDate, DeskId)>>,
    bookings: SharedBookings,
}

impl DeskDirectory {
    pub fn new() -> Self {
        Self::with_bookings(Arc::new(Mutex::new(Vec::new())))
    }

    /// Directory that sees every booking saved through `store`
    pub fn for_store(store: &BookingStore) -> Self {
        Self::with_bookings(store.shared_bookings())
    }

    fn with_bookings(bookings: SharedBookings) -> Self {
        Self {
            desks: Mutex::new(BTreeMap::new()),
            booked: Mutex::new(HashSet::new()),
            bookings,
        }
    }

    /// Register a desk for testing purposes
    pub fn add_desk(&self, desk: Desk) {
        self.desks.lock().unwrap().insert(desk.id, desk);
    }

    /// Mark a desk as taken on the given date
    pub fn mark_booked(&self, date: NaiveDate, desk_id: DeskId) {
        self.booked.lock().unwrap().insert((date, desk_id));
    }
}

impl Default for DeskDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeskDirectoryTrait for DeskDirectory {
    /// Registered desks with no booking on `date`, in id order
    async fn get_available_desks(&self, date: NaiveDate) -> Result<Vec<Desk>> {
        let mut taken: HashSet<DeskId> = self
            .booked
            .lock()
            .unwrap()
            .iter()
            .filter(|(booked_date, _)| *booked_date == date)
            .map(|(_, desk_id)| *desk_id)
            .collect();
        taken.extend(
            self.bookings
                .lock()
                .unwrap()
                .iter()
                .filter(|saved| saved.date == date)
                .map(|saved| saved.desk_id),
        );

        Ok(self
            .desks
            .lock()
            .unwrap()
            .values()
            .filter(|desk| !taken.contains(&desk.id))
            .cloned()
            .collect())
    }
}
