//! Persisted order of the bottom navigation bar.
//!
//! The order is the only durable state of the dashboard core. It is kept
//! under a single key as a JSON array of page identifiers and re-read when
//! another instance changes it.

mod error;
mod storage;

pub use error::StoreError;
pub use storage::{FileStorage, MemoryStorage, Storage};

use crate::input::Timer;
use crate::state::{PageId, PRIMARY_DESTINATIONS};
use log::*;
use std::time::Instant;

pub const ORDER_KEY: &str = "bottomNavOrder";
pub const SYNC_POLL_MS: u64 = 1000;

/// A permutation of the primary destinations.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavOrder(Vec<PageId>);

impl Default for NavOrder {
    fn default() -> Self {
        NavOrder(PRIMARY_DESTINATIONS.to_vec())
    }
}

impl NavOrder {
    /// Validate a list of pages: every primary destination exactly once.
    ///
    pub fn new(pages: Vec<PageId>) -> Result<NavOrder, StoreError> {
        if pages.len() != PRIMARY_DESTINATIONS.len() {
            return Err(StoreError::InvalidOrder(format!(
                "expected {} entries, found {}",
                PRIMARY_DESTINATIONS.len(),
                pages.len()
            )));
        }
        for (index, page) in pages.iter().enumerate() {
            if !page.is_primary() {
                return Err(StoreError::InvalidOrder(format!(
                    "'{}' is not a primary destination",
                    page
                )));
            }
            if pages[..index].contains(page) {
                return Err(StoreError::InvalidOrder(format!("duplicate '{}'", page)));
            }
        }
        Ok(NavOrder(pages))
    }

    /// Decode the persisted JSON form.
    ///
    pub fn from_json(json: &str) -> Result<NavOrder, StoreError> {
        let ids: Vec<String> = serde_json::from_str(json)?;
        let pages = ids
            .iter()
            .map(|id| {
                PageId::from_id(id)
                    .ok_or_else(|| StoreError::InvalidOrder(format!("unknown page '{}'", id)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        NavOrder::new(pages)
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        let ids: Vec<&str> = self.0.iter().map(|page| page.id()).collect();
        Ok(serde_json::to_string(&ids)?)
    }

    pub fn pages(&self) -> &[PageId] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<PageId> {
        self.0.get(index).copied()
    }

    /// Move the item at `from` so it ends up at `to`, shifting the items in
    /// between. Returns false when nothing moved.
    ///
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        if from == to || from >= self.0.len() || to >= self.0.len() {
            return false;
        }
        let page = self.0.remove(from);
        self.0.insert(to, page);
        true
    }
}

/// Owns the in-memory order and its persisted copy.
///
pub struct OrderStore {
    storage: Box<dyn Storage>,
    order: NavOrder,
    last_raw: Option<String>,
    poll: Timer,
}

impl OrderStore {
    /// Read the order once. Missing or malformed data falls back to the
    /// default order.
    ///
    pub fn load(storage: Box<dyn Storage>, poll_ms: u64) -> Self {
        let raw = match storage.get(ORDER_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to read navigation order, using default: {}", e);
                None
            }
        };
        let order = match raw.as_deref().map(NavOrder::from_json) {
            Some(Ok(order)) => {
                debug!("Loaded navigation order {:?}", order.pages());
                order
            }
            Some(Err(e)) => {
                warn!("Discarding stored navigation order: {}", e);
                NavOrder::default()
            }
            None => NavOrder::default(),
        };
        OrderStore {
            storage,
            order,
            last_raw: raw,
            poll: Timer::from_millis(poll_ms),
        }
    }

    pub fn order(&self) -> &NavOrder {
        &self.order
    }

    /// Replace the order and persist it. The in-memory order is updated even
    /// if the write fails.
    ///
    pub fn commit(&mut self, order: NavOrder) -> Result<(), StoreError> {
        self.order = order;
        let raw = self.order.to_json()?;
        self.storage.set(ORDER_KEY, &raw)?;
        self.last_raw = Some(raw);
        info!("Saved navigation order {:?}", self.order.pages());
        Ok(())
    }

    /// Apply a drag move and persist it. Returns false if nothing moved.
    ///
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<bool, StoreError> {
        let mut order = self.order.clone();
        if !order.move_item(from, to) {
            return Ok(false);
        }
        self.commit(order)?;
        Ok(true)
    }

    /// Re-read the persisted value. Returns true if the in-memory order
    /// changed. An invalid external value is ignored.
    ///
    pub fn refresh(&mut self) -> bool {
        let raw = match self.storage.get(ORDER_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to re-read navigation order: {}", e);
                return false;
            }
        };
        if raw == self.last_raw {
            return false;
        }
        self.last_raw = raw.clone();

        let Some(raw) = raw else {
            return false;
        };
        match NavOrder::from_json(&raw) {
            Ok(order) if order != self.order => {
                info!("Navigation order changed externally: {:?}", order.pages());
                self.order = order;
                true
            }
            Ok(_) => false,
            Err(e) => {
                warn!("Ignoring external navigation order: {}", e);
                false
            }
        }
    }

    /// Storage change notification for `key`.
    ///
    pub fn on_storage_event(&mut self, key: &str) -> bool {
        key == ORDER_KEY && self.refresh()
    }

    /// Polling fallback, called every tick. Re-reads once per interval.
    ///
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.poll.is_pending() {
            self.poll.arm(now);
            return false;
        }
        if self.poll.fire(now) {
            self.poll.arm(now);
            return self.refresh();
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::state::PageId::{Channels, Dashboard, Platforms, Rss, Tmdb, VideoStudio};

    fn store_with(raw: Option<&str>) -> (OrderStore, MemoryStorage) {
        let mut storage = MemoryStorage::new();
        if let Some(raw) = raw {
            storage.set(ORDER_KEY, raw).unwrap();
        }
        (OrderStore::load(Box::new(storage.clone()), SYNC_POLL_MS), storage)
    }

    #[test]
    fn test_missing_key_uses_default() {
        let (store, _) = store_with(None);
        assert_eq!(
            store.order().pages(),
            &[Dashboard, Channels, Platforms, Rss, Tmdb, VideoStudio]
        );
    }

    #[test]
    fn test_valid_order_is_loaded() {
        let raw = r#"["rss","dashboard","channels","platforms","tmdb","video-studio"]"#;
        let (store, _) = store_with(Some(raw));
        assert_eq!(store.order().get(0), Some(Rss));
        assert_eq!(store.order().get(1), Some(Dashboard));
    }

    #[test]
    fn test_malformed_order_falls_back_to_default() {
        for raw in [
            "not json",
            r#"{"order": []}"#,
            r#"["dashboard","channels"]"#,
            r#"["dashboard","dashboard","platforms","rss","tmdb","video-studio"]"#,
            r#"["dashboard","logs","platforms","rss","tmdb","video-studio"]"#,
            r#"["dashboard","bogus","platforms","rss","tmdb","video-studio"]"#,
        ] {
            let (store, _) = store_with(Some(raw));
            assert_eq!(*store.order(), NavOrder::default(), "input {}", raw);
        }
    }

    #[test]
    fn test_move_is_a_splice_not_a_swap() {
        let mut order = NavOrder::default();
        assert!(order.move_item(3, 0));
        assert_eq!(order.pages(), &[Rss, Dashboard, Channels, Platforms, Tmdb, VideoStudio]);
        assert!(order.move_item(0, 5));
        assert_eq!(order.pages(), &[Dashboard, Channels, Platforms, Tmdb, VideoStudio, Rss]);
        assert!(!order.move_item(2, 2));
        assert!(!order.move_item(9, 0));
    }

    #[test]
    fn test_reorder_persists() {
        let (mut store, storage) = store_with(None);
        assert!(store.reorder(1, 4).unwrap());
        let raw = storage.get(ORDER_KEY).unwrap().unwrap();
        assert_eq!(
            raw,
            r#"["dashboard","platforms","rss","tmdb","channels","video-studio"]"#
        );
        assert!(!store.reorder(2, 2).unwrap());
    }

    #[test]
    fn test_storage_event_picks_up_external_change() {
        let (mut store, mut other) = store_with(None);
        other
            .set(
                ORDER_KEY,
                r#"["video-studio","dashboard","channels","platforms","rss","tmdb"]"#,
            )
            .unwrap();
        assert!(!store.on_storage_event("theme"));
        assert!(store.on_storage_event(ORDER_KEY));
        assert_eq!(store.order().get(0), Some(VideoStudio));
        assert!(!store.on_storage_event(ORDER_KEY));
    }

    #[test]
    fn test_external_malformed_value_keeps_current_order() {
        let (mut store, mut other) = store_with(None);
        store.reorder(0, 1).unwrap();
        let before = store.order().clone();
        other.set(ORDER_KEY, "[").unwrap();
        assert!(!store.refresh());
        assert_eq!(*store.order(), before);
    }

    #[test]
    fn test_poll_rereads_once_per_interval() {
        let start = Instant::now();
        let (mut store, mut other) = store_with(None);
        assert!(!store.poll(start));
        other
            .set(
                ORDER_KEY,
                r#"["tmdb","dashboard","channels","platforms","rss","video-studio"]"#,
            )
            .unwrap();
        assert!(!store.poll(start + Duration::from_millis(500)));
        assert!(store.poll(start + Duration::from_millis(1000)));
        assert_eq!(store.order().get(0), Some(Tmdb));
        assert!(!store.poll(start + Duration::from_millis(2000)));
    }
}
