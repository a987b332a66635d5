/// Landing page the root path redirects to.
pub const LANDING_PAGE: &str = "/static/index.html";

/// Mount point for the static frontend.
pub const STATIC_ROOT: &str = "/static";

/// Root path; redirects to [`LANDING_PAGE`].
pub const ROOT: &str = "/";

/// Liveness probe.
pub const PING: &str = "/ping";

/// Readiness probe with registry counters.
pub const HEALTH: &str = "/health";

/// Activity endpoints.
pub mod activities {
    /// List every activity.
    pub const COLLECTION: &str = "/activities";
    /// Sign a participant up; `email` travels as a query parameter.
    pub const SIGNUP: &str = "/activities/{activity_name}/signup";
    /// Remove a participant; `email` travels as a query parameter.
    pub const UNREGISTER: &str = "/activities/{activity_name}/unregister";

    /// Concrete signup path for `activity_name`, percent-encoded.
    pub fn signup_path(activity_name: &str) -> String {
        SIGNUP.replace("{activity_name}", &urlencoding::encode(activity_name))
    }

    /// Concrete unregister path for `activity_name`, percent-encoded.
    pub fn unregister_path(activity_name: &str) -> String {
        UNREGISTER
            .replace("{activity_name}", &urlencoding::encode(activity_name))
    }
}

#[cfg(test)]
mod tests {
    use super::activities;

    #[test]
    fn activity_paths_encode_spaces() {
        assert_eq!(
            activities::signup_path("Chess Club"),
            "/activities/Chess%20Club/signup"
        );
        assert_eq!(
            activities::unregister_path("Art Studio"),
            "/activities/Art%20Studio/unregister"
        );
    }

    #[test]
    fn activity_paths_encode_reserved_characters() {
        assert_eq!(
            activities::signup_path("R&D/Lab"),
            "/activities/R%26D%2FLab/signup"
        );
    }
}
