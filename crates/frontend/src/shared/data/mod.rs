pub mod store;

pub use store::{Collection, RecordStore};

use crate::shared::config::Config;
use once_cell::sync::OnceCell;
use std::sync::Arc;

static STORE: OnceCell<Arc<RecordStore>> = OnceCell::new();

/// Loads the bundled record store once; later calls return the same store
pub fn init_data_layer(config: &Config) -> anyhow::Result<Arc<RecordStore>> {
    let store = STORE.get_or_try_init(|| -> anyhow::Result<Arc<RecordStore>> {
        let store = RecordStore::sample()?;
        log::info!(
            "Record store loaded: {} bookings, {} drivers, {} customers, {} vehicles, {} payments",
            store.bookings().len(),
            store.drivers().len(),
            store.customers().len(),
            store.vehicles().len(),
            store.payments().len()
        );
        if config.integrity.check_references {
            store.report_dangling_references();
        }
        Ok(Arc::new(store))
    })?;
    Ok(Arc::clone(store))
}

/// Store loaded by [`init_data_layer`], for pages created after start-up
pub fn record_store() -> Option<Arc<RecordStore>> {
    STORE.get().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::load_config;

    #[test]
    fn test_init_once_and_shared() {
        let config = load_config(None).unwrap();
        let first = init_data_layer(&config).unwrap();
        let second = init_data_layer(&config).unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        let shared = record_store().unwrap();
        assert!(Arc::ptr_eq(&first, &shared));
        assert_eq!(shared.bookings().len(), 3);
    }
}
