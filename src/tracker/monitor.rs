//! The monitor that wires storage and displays together.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::tracker::{Activity, ActivityDisplay, ActivityKind, ActivityStore, TrackerError, User};

/// Collects activity samples, persists them, and fans them out to displays.
///
/// # Architecture Note
/// Both collaborators arrive through the constructor as trait objects. The
/// monitor has one job (turn a measurement into a stored, announced
/// [`Activity`]) and zero knowledge of where the data lands or who watches
/// it. That keeps the Observer fan-out open for extension: registering
/// another display is a change at the construction site, not here.
pub struct ActivityMonitor {
    storage: Box<dyn ActivityStore>,
    displays: Vec<Box<dyn ActivityDisplay>>,
    next_id: AtomicU64,
}

impl ActivityMonitor {
    /// Creates a monitor with its storage and display sinks injected.
    ///
    /// An empty display list is valid; activities are then stored silently.
    pub fn new(storage: Box<dyn ActivityStore>, displays: Vec<Box<dyn ActivityDisplay>>) -> Self {
        Self {
            storage,
            displays,
            next_id: AtomicU64::new(1),
        }
    }

    /// Records one measurement.
    ///
    /// Builds the [`Activity`] (assigning `activity_N` ids in order), stores
    /// it first, then notifies every display. A storage failure propagates
    /// and no display hears about the activity.
    #[instrument(skip(self, user), fields(user = %user.name))]
    pub async fn record_activity(
        &self,
        user: &User,
        kind: ActivityKind,
        value: f64,
    ) -> Result<Activity, TrackerError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let activity = Activity {
            id: format!("activity_{}", id),
            user: user.clone(),
            kind,
            value,
            recorded_at: Utc::now(),
        };
        debug!(?activity, "Recording");

        self.storage.store_activity(&activity).await?;
        self.notify_displays(&activity).await;

        info!(activity_id = %activity.id, kind = %kind, value, "Activity recorded");
        Ok(activity)
    }

    async fn notify_displays(&self, activity: &Activity) {
        for display in &self.displays {
            display.update(activity).await;
        }
    }
}
