//! The persistence seam for recorded activities.

use async_trait::async_trait;
use tracing::info;

use crate::tracker::{Activity, TrackerError};

/// Where recorded activities go.
///
/// The monitor holds this as a trait object, so the backing store can change
/// without the monitor noticing. Tests inject an in-memory recording store
/// through the same seam.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn store_activity(&self, activity: &Activity) -> Result<(), TrackerError>;
}

/// Default store: logs each write as it would be sent to the database.
pub struct DatabaseStore;

#[async_trait]
impl ActivityStore for DatabaseStore {
    async fn store_activity(&self, activity: &Activity) -> Result<(), TrackerError> {
        info!(activity = %activity, "Storing activity in database");
        Ok(())
    }
}
