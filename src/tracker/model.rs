//! Pure data structures for the fitness tracker.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tracker::TrackerError;

/// A person whose activities are being tracked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The kinds of activity the monitor understands.
///
/// Adding a kind means adding a variant here; the monitor, stores, and
/// displays are untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Steps,
    Distance,
    Calories,
    Swimming,
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActivityKind::Steps => "steps",
            ActivityKind::Distance => "distance",
            ActivityKind::Calories => "calories",
            ActivityKind::Swimming => "swimming",
        };
        f.write_str(name)
    }
}

impl FromStr for ActivityKind {
    type Err = TrackerError;

    /// Parses the lowercase activity name. Anything else is an unsupported
    /// activity, which is the tracker's one user-facing failure mode.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "steps" => Ok(ActivityKind::Steps),
            "distance" => Ok(ActivityKind::Distance),
            "calories" => Ok(ActivityKind::Calories),
            "swimming" => Ok(ActivityKind::Swimming),
            other => Err(TrackerError::UnsupportedActivity(other.to_string())),
        }
    }
}

/// One recorded measurement.
///
/// Built by the [`ActivityMonitor`](crate::tracker::ActivityMonitor), which
/// assigns the id (`activity_1`, `activity_2`, ...) and the timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub user: User,
    pub kind: ActivityKind,
    pub value: f64,
    pub recorded_at: DateTime<Utc>,
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} performed {} of {} at {}",
            self.user.name, self.kind, self.value, self.recorded_at
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_from_lowercase_names() {
        assert_eq!("steps".parse::<ActivityKind>(), Ok(ActivityKind::Steps));
        assert_eq!(
            "swimming".parse::<ActivityKind>(),
            Ok(ActivityKind::Swimming)
        );
    }

    #[test]
    fn unknown_kind_is_unsupported() {
        assert_eq!(
            "yoga".parse::<ActivityKind>(),
            Err(TrackerError::UnsupportedActivity("yoga".to_string()))
        );
    }

    #[test]
    fn kind_round_trips_through_display() {
        for kind in [
            ActivityKind::Steps,
            ActivityKind::Distance,
            ActivityKind::Calories,
            ActivityKind::Swimming,
        ] {
            assert_eq!(kind.to_string().parse::<ActivityKind>(), Ok(kind));
        }
    }

    #[test]
    fn activity_displays_user_and_kind() {
        let activity = Activity {
            id: "activity_1".to_string(),
            user: User::new("Logan"),
            kind: ActivityKind::Steps,
            value: 1000.0,
            recorded_at: Utc::now(),
        };
        assert!(activity.to_string().starts_with("Logan performed steps of 1000"));
    }
}
