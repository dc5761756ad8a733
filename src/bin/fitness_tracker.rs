//! Fitness tracker walkthrough: all five principles plus Observer.
//!
//! An [`ActivityMonitor`] is wired with a database-backed store and a console
//! display, then records four activities for one user. Every recording is
//! stored first and fanned out to the display second. One unsupported
//! activity name shows the tracker's single failure mode.

use solid_recipe::lifecycle::setup_tracing;
use solid_recipe::tracker::{
    ActivityKind, ActivityMonitor, ConsoleDisplay, DatabaseStore, TrackerError, User,
};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), TrackerError> {
    setup_tracing();

    info!("Starting fitness tracker demo");

    // Dependencies are injected here, at the construction site. Swapping the
    // store or adding a second display never touches the monitor.
    let monitor = ActivityMonitor::new(Box::new(DatabaseStore), vec![Box::new(ConsoleDisplay)]);
    let user = User::new("Logan");

    let span = tracing::info_span!("activity_recording");
    async {
        monitor
            .record_activity(&user, ActivityKind::Steps, 1000.0)
            .await?;
        monitor
            .record_activity(&user, ActivityKind::Distance, 5.5)
            .await?;
        monitor
            .record_activity(&user, ActivityKind::Calories, 200.0)
            .await?;
        monitor
            .record_activity(&user, ActivityKind::Swimming, 30.0)
            .await?;
        Ok::<(), TrackerError>(())
    }
    .instrument(span)
    .await?;

    // Activity names arriving as strings go through FromStr; unknown names
    // are the tracker's one user-facing error.
    match "yoga".parse::<ActivityKind>() {
        Ok(kind) => {
            monitor.record_activity(&user, kind, 45.0).await?;
        }
        Err(e) => warn!(error = %e, "Skipping sample"),
    }

    info!("Fitness tracker demo completed");
    Ok(())
}
