//! The notification seam: observers of new activity.

use async_trait::async_trait;
use tracing::info;

use crate::tracker::Activity;

/// An observer that wants to hear about every new activity.
///
/// The monitor fans each stored activity out to all registered displays in
/// registration order. Displays cannot fail the recording; a sink that has
/// somewhere unreliable to write should handle that internally.
#[async_trait]
pub trait ActivityDisplay: Send + Sync {
    async fn update(&self, activity: &Activity);
}

/// Default display: writes every new activity to the console log.
pub struct ConsoleDisplay;

#[async_trait]
impl ActivityDisplay for ConsoleDisplay {
    async fn update(&self, activity: &Activity) {
        info!(activity = %activity, "New activity recorded");
    }
}
