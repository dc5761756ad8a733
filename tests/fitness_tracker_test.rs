//! Integration tests for the fitness tracker.
//!
//! The monitor's storage and display seams take recording doubles, so the
//! tests observe exactly what was stored and who was notified, in order,
//! without any real sinks.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use solid_recipe::tracker::{
    Activity, ActivityDisplay, ActivityKind, ActivityMonitor, ActivityStore, TrackerError, User,
};

/// Store double that remembers every write.
struct RecordingStore {
    stored: Arc<Mutex<Vec<Activity>>>,
}

#[async_trait]
impl ActivityStore for RecordingStore {
    async fn store_activity(&self, activity: &Activity) -> Result<(), TrackerError> {
        self.stored.lock().unwrap().push(activity.clone());
        Ok(())
    }
}

/// Store double that rejects every write.
struct FailingStore;

#[async_trait]
impl ActivityStore for FailingStore {
    async fn store_activity(&self, _activity: &Activity) -> Result<(), TrackerError> {
        Err(TrackerError::Storage("database offline".to_string()))
    }
}

/// Display double that remembers the ids it was shown.
struct RecordingDisplay {
    seen: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl ActivityDisplay for RecordingDisplay {
    async fn update(&self, activity: &Activity) {
        self.seen.lock().unwrap().push(activity.id.clone());
    }
}

#[tokio::test]
async fn monitor_stores_then_notifies_every_display() {
    let stored = Arc::new(Mutex::new(Vec::new()));
    let first_seen = Arc::new(Mutex::new(Vec::new()));
    let second_seen = Arc::new(Mutex::new(Vec::new()));

    let monitor = ActivityMonitor::new(
        Box::new(RecordingStore {
            stored: stored.clone(),
        }),
        vec![
            Box::new(RecordingDisplay {
                seen: first_seen.clone(),
            }),
            Box::new(RecordingDisplay {
                seen: second_seen.clone(),
            }),
        ],
    );
    let user = User::new("Logan");

    monitor
        .record_activity(&user, ActivityKind::Steps, 1000.0)
        .await
        .expect("Failed to record steps");
    monitor
        .record_activity(&user, ActivityKind::Distance, 5.5)
        .await
        .expect("Failed to record distance");

    // Both activities reached the store, ids assigned in order.
    let stored = stored.lock().unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].id, "activity_1");
    assert_eq!(stored[0].kind, ActivityKind::Steps);
    assert_eq!(stored[0].value, 1000.0);
    assert_eq!(stored[1].id, "activity_2");
    assert_eq!(stored[1].kind, ActivityKind::Distance);

    // Every display saw every activity, in recording order.
    let expected = vec!["activity_1".to_string(), "activity_2".to_string()];
    assert_eq!(*first_seen.lock().unwrap(), expected);
    assert_eq!(*second_seen.lock().unwrap(), expected);
}

#[tokio::test]
async fn monitor_works_with_zero_displays() {
    let stored = Arc::new(Mutex::new(Vec::new()));
    let monitor = ActivityMonitor::new(
        Box::new(RecordingStore {
            stored: stored.clone(),
        }),
        vec![],
    );

    let activity = monitor
        .record_activity(&User::new("Logan"), ActivityKind::Swimming, 30.0)
        .await
        .expect("Failed to record swimming");

    assert_eq!(activity.user.name, "Logan");
    assert_eq!(stored.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn storage_failure_suppresses_notification() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let monitor = ActivityMonitor::new(
        Box::new(FailingStore),
        vec![Box::new(RecordingDisplay { seen: seen.clone() })],
    );

    let result = monitor
        .record_activity(&User::new("Logan"), ActivityKind::Calories, 200.0)
        .await;

    assert_eq!(
        result,
        Err(TrackerError::Storage("database offline".to_string()))
    );
    assert!(
        seen.lock().unwrap().is_empty(),
        "Displays must not hear about activities that failed to store"
    );
}
