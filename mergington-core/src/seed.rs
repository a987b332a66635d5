//! Roster the registry is populated with at startup.

use crate::activity::{Activity, ActivityRoster};

/// Number of activities in the seed roster.
pub const SEED_ACTIVITY_COUNT: usize = 9;

/// The nine activities offered at the start of every process.
pub fn seed_activities() -> Vec<(String, Activity)> {
    vec![
        seeded(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        seeded(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        seeded(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        seeded(
            "Basketball Team",
            "Competitive basketball practice and games",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            15,
            &["james@mergington.edu"],
        ),
        seeded(
            "Tennis Club",
            "Learn tennis skills and participate in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
            16,
            &["alex@mergington.edu", "jordan@mergington.edu"],
        ),
        seeded(
            "Drama Club",
            "Perform in school plays and develop acting skills",
            "Wednesdays, 3:30 PM - 5:00 PM",
            25,
            &["isabella@mergington.edu"],
        ),
        seeded(
            "Art Studio",
            "Explore painting, drawing, and sculpture techniques",
            "Mondays and Fridays, 3:30 PM - 4:30 PM",
            18,
            &["mia@mergington.edu", "lucas@mergington.edu"],
        ),
        seeded(
            "Debate Team",
            "Compete in debate competitions and develop argumentation skills",
            "Thursdays, 3:30 PM - 5:00 PM",
            12,
            &["noah@mergington.edu"],
        ),
        seeded(
            "Science Club",
            "Conduct experiments and explore STEM topics",
            "Wednesdays, 4:00 PM - 5:00 PM",
            20,
            &["ava@mergington.edu", "ethan@mergington.edu"],
        ),
    ]
}

/// Seed activities collected into a roster.
pub fn seed_roster() -> ActivityRoster {
    seed_activities().into_iter().collect()
}

fn seeded(
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> (String, Activity) {
    (
        name.to_string(),
        Activity::new(
            description,
            schedule,
            max_participants,
            participants.iter().copied(),
        ),
    )
}
