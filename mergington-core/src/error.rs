use thiserror::Error;

/// Reasons a registry operation is rejected.
///
/// Every variant leaves the registry untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No activity is filed under the requested name.
    #[error("Activity not found")]
    NotFound {
        /// Requested activity name.
        activity: String,
    },

    /// The participant is already on the roster.
    #[error("Student is already signed up for {activity}")]
    AlreadyEnrolled {
        /// Activity the signup targeted.
        activity: String,
        /// Email that was already enrolled.
        email: String,
    },

    /// The participant is not on the roster.
    #[error("Student is not signed up for {activity}")]
    NotEnrolled {
        /// Activity the unregister targeted.
        activity: String,
        /// Email that was not found.
        email: String,
    },
}

impl RegistryError {
    /// Name of the activity the rejected operation targeted.
    pub fn activity(&self) -> &str {
        match self {
            RegistryError::NotFound { activity }
            | RegistryError::AlreadyEnrolled { activity, .. }
            | RegistryError::NotEnrolled { activity, .. } => activity,
        }
    }
}

/// Result of a registry operation.
pub type Result<T> = std::result::Result<T, RegistryError>;
