use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Snapshot of every activity keyed by its unique name.
pub type ActivityRoster = BTreeMap<String, Activity>;

/// A club, class, or team students can sign up for.
///
/// The activity name is not stored here; it is the key the record is filed
/// under in the [`ActivityRoster`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Free-text summary shown to students.
    pub description: String,
    /// Free-text meeting times.
    pub schedule: String,
    /// Advertised capacity. Signups are not limited by it.
    pub max_participants: u32,
    /// Enrolled email addresses in signup order.
    pub participants: Vec<String>,
}

impl Activity {
    /// Build an activity from its descriptive fields and initial roster.
    pub fn new<I, S>(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: participants.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `email` is currently on the roster.
    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Number of enrolled participants.
    pub fn enrolled_count(&self) -> usize {
        self.participants.len()
    }

    /// Seats left before the advertised capacity is reached.
    ///
    /// Informational only; an activity past capacity reports zero.
    pub fn spots_left(&self) -> u32 {
        let enrolled = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(enrolled)
    }
}
