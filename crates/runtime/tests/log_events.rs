use std::sync::Arc;
use std::time::Duration;

use runtime::{ExportFormat, InMemoryStorage, LogKind, LogManager, LogOptions, Storage};
use serde_json::json;

#[tokio::test]
async fn subscribers_see_entries_in_order() {
    let log = LogManager::new(LogOptions::default());
    let mut events = log.subscribe();

    let producer = log.clone();
    tokio::spawn(async move {
        producer.log_system_event("Switched to scene: menu");
        producer.log_inventory("Added", "medkit", 1);
    });

    let first = tokio::time::timeout(Duration::from_secs(1), events.recv())
        .await
        .expect("first entry in time")
        .expect("channel open");
    let second = tokio::time::timeout(Duration::from_secs(1), events.recv())
        .await
        .expect("second entry in time")
        .expect("channel open");

    assert_eq!(first.kind, LogKind::System);
    assert_eq!(second.message, "Added: medkit (x1)");
    assert_eq!(second.data, json!({ "item": "medkit", "quantity": 1 }));
}

#[tokio::test]
async fn persisted_log_survives_restart_and_exports() {
    let storage: Arc<dyn Storage> = Arc::new(InMemoryStorage::new());
    let options = LogOptions {
        persist_logs: true,
        ..LogOptions::default()
    };

    let log = LogManager::with_storage(options.clone(), storage.clone());
    log.log_interaction("Choice Selected", json!({ "choice": "Take the keycard" }));
    log.log_profile_update("path", "mystic");

    let restored = LogManager::with_storage(options, storage);
    assert_eq!(restored.len(), 2);
    assert_eq!(restored.recent(1)[0].message, "Updated path");

    let csv = restored.export(ExportFormat::Csv).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("id,timestamp,type,message"));
    assert!(lines.any(|line| line.ends_with(r#""interaction","Choice Selected""#)));
}
