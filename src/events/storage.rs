use super::terminal::Event;
use crate::error::AppResult;
use crate::store::FileStorage;
use log::*;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::sync::mpsc::Sender;

/// Storage keys written by a watcher event.
///
pub fn changed_keys(event: &notify::Event) -> Vec<String> {
    match event.kind {
        EventKind::Create(_) | EventKind::Modify(_) => event
            .paths
            .iter()
            .filter_map(|path| FileStorage::key_for(path))
            .collect(),
        _ => vec![],
    }
}

/// Watch the storage directory and forward changed keys as
/// `Event::Storage`. Dropping the watcher stops it.
///
pub fn watch(storage: &FileStorage, tx: Sender<Event>) -> AppResult<RecommendedWatcher> {
    storage.create_dir()?;
    let mut watcher =
        notify::recommended_watcher(move |result: notify::Result<notify::Event>| match result {
            Ok(event) => {
                for key in changed_keys(&event) {
                    trace!("Storage key '{}' changed on disk", key);
                    if tx.send(Event::Storage(key)).is_err() {
                        break;
                    }
                }
            }
            Err(e) => warn!("Storage watcher error: {}", e),
        })?;
    watcher.watch(storage.dir(), RecursiveMode::NonRecursive)?;
    debug!("Watching {} for storage changes", storage.dir().display());
    Ok(watcher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Storage, ORDER_KEY};
    use notify::event::{CreateKind, ModifyKind, RemoveKind, RenameMode};
    use std::path::PathBuf;
    use std::sync::mpsc;
    use std::time::Duration;

    fn order_path() -> PathBuf {
        PathBuf::from("/data").join(format!("{}.json", ORDER_KEY))
    }

    #[test]
    fn test_changed_keys_from_rename_into_place() {
        let event = notify::Event::new(EventKind::Modify(ModifyKind::Name(RenameMode::To)))
            .add_path(order_path());
        assert_eq!(changed_keys(&event), vec![ORDER_KEY.to_string()]);

        let staging = notify::Event::new(EventKind::Create(CreateKind::File))
            .add_path(PathBuf::from("/data/.bottomNavOrder.json.tmp"));
        assert!(changed_keys(&staging).is_empty());
    }

    #[test]
    fn test_removal_is_not_a_change() {
        let event = notify::Event::new(EventKind::Remove(RemoveKind::File)).add_path(order_path());
        assert!(changed_keys(&event).is_empty());
    }

    #[test]
    fn test_watch_reports_written_key() {
        let dir = std::env::temp_dir().join(format!("dashnav-watch-{}", uuid::Uuid::new_v4()));
        let mut storage = FileStorage::new(&dir);
        let (tx, rx) = mpsc::channel();
        let _watcher = watch(&storage, tx).unwrap();

        storage.set(ORDER_KEY, "[]").unwrap();
        let received = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(matches!(received, Event::Storage(key) if key == ORDER_KEY));
        std::fs::remove_dir_all(dir).unwrap();
    }
}
