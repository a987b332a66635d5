//! In-memory activity registry.
//!
//! Each operation holds the registry lock for its whole check-then-mutate
//! sequence, so concurrent signups for the same activity cannot both pass the
//! duplicate check.

use std::fmt;

use parking_lot::RwLock;
use tracing::debug;

use crate::{
    activity::{Activity, ActivityRoster},
    error::{RegistryError, Result},
    seed,
};

/// Process-local store of activities and their rosters.
pub struct ActivityRegistry {
    activities: RwLock<ActivityRoster>,
}

impl fmt::Debug for ActivityRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivityRegistry")
            .field("activities", &self.activities.read().len())
            .finish()
    }
}

impl Default for ActivityRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ActivityRegistry {
    /// Registry populated with the nine seed activities.
    pub fn seeded() -> Self {
        Self {
            activities: RwLock::new(seed::seed_roster()),
        }
    }

    /// Registry populated from an arbitrary roster.
    ///
    /// A name that appears more than once keeps its last record.
    pub fn from_activities<I, S>(activities: I) -> Self
    where
        I: IntoIterator<Item = (S, Activity)>,
        S: Into<String>,
    {
        Self {
            activities: RwLock::new(
                activities
                    .into_iter()
                    .map(|(name, activity)| (name.into(), activity))
                    .collect(),
            ),
        }
    }

    /// Snapshot of every activity with its current roster.
    pub fn list(&self) -> ActivityRoster {
        self.activities.read().clone()
    }

    /// Snapshot of a single activity.
    pub fn get(&self, name: &str) -> Option<Activity> {
        self.activities.read().get(name).cloned()
    }

    /// Number of activities on offer.
    pub fn len(&self) -> usize {
        self.activities.read().len()
    }

    /// Whether the registry holds no activities.
    pub fn is_empty(&self) -> bool {
        self.activities.read().is_empty()
    }

    /// Total enrolments across all activities.
    pub fn total_participants(&self) -> usize {
        self.activities
            .read()
            .values()
            .map(Activity::enrolled_count)
            .sum()
    }

    /// Enrol `email` in `activity`.
    ///
    /// The email is not validated; any string, including the empty one, is
    /// accepted. Capacity is not checked.
    pub fn signup(&self, activity: &str, email: &str) -> Result<String> {
        let mut activities = self.activities.write();
        let record = activities.get_mut(activity).ok_or_else(|| {
            RegistryError::NotFound {
                activity: activity.to_string(),
            }
        })?;

        if record.is_enrolled(email) {
            return Err(RegistryError::AlreadyEnrolled {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }

        record.participants.push(email.to_string());
        debug!(
            activity,
            email,
            enrolled = record.participants.len(),
            "participant signed up"
        );

        Ok(format!("Signed up {email} for {activity}"))
    }

    /// Remove one occurrence of `email` from `activity`.
    pub fn unregister(&self, activity: &str, email: &str) -> Result<String> {
        let mut activities = self.activities.write();
        let record = activities.get_mut(activity).ok_or_else(|| {
            RegistryError::NotFound {
                activity: activity.to_string(),
            }
        })?;

        let position = record
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| RegistryError::NotEnrolled {
                activity: activity.to_string(),
                email: email.to_string(),
            })?;

        record.participants.remove(position);
        debug!(
            activity,
            email,
            enrolled = record.participants.len(),
            "participant unregistered"
        );

        Ok(format!("Unregistered {email} from {activity}"))
    }

    /// Discard every change and restore the seed roster.
    pub fn reset(&self) {
        *self.activities.write() = seed::seed_roster();
        debug!("activity registry reset to seed roster");
    }
}
