//! 约会仓库装配

use month_calendar_core::{
    AppointmentStore, CalendarResult, InMemoryAppointmentStore, JsonFileAppointmentStore,
};

use super::StoreLocation;

/// 按存储位置打开约会仓库
pub fn open_store(location: &StoreLocation) -> CalendarResult<Box<dyn AppointmentStore>> {
    match location {
        StoreLocation::File(path) => {
            let store = JsonFileAppointmentStore::open(path)?;
            log::info!(
                "Opened appointment file {} ({} entries)",
                store.path().display(),
                store.len()
            );
            Ok(Box::new(store))
        }
        StoreLocation::Memory => {
            log::info!("Using in-memory appointment store");
            Ok(Box::new(InMemoryAppointmentStore::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use month_calendar_core::DateId;

    #[test]
    fn memory_location_opens_empty_store() {
        let store = open_store(&StoreLocation::Memory).unwrap();
        assert!(store.get(&DateId::from_millis(0)).unwrap().is_none());
    }

    #[test]
    fn file_location_writes_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appointments.json");
        let mut store = open_store(&StoreLocation::File(path.clone())).unwrap();
        store.set(&DateId::from_millis(0), "x").unwrap();
        assert!(path.exists());
    }
}
