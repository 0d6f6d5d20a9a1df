//! Levels and badges derived from accumulated points.

use serde::Serialize;

/// Points required to advance one level.
pub const POINTS_PER_LEVEL: i64 = 200;

/// Level for a points total; level 1 starts at zero points.
pub fn level_for(points: i64) -> i64 {
    points.div_euclid(POINTS_PER_LEVEL) + 1
}

/// Points still needed to reach the next level.
pub fn points_to_next_level(points: i64) -> i64 {
    POINTS_PER_LEVEL - points.rem_euclid(POINTS_PER_LEVEL)
}

/// Progress through the current level, 0.0 to 100.0.
pub fn level_progress_percent(points: i64) -> f64 {
    points.rem_euclid(POINTS_PER_LEVEL) as f64 * 100.0 / POINTS_PER_LEVEL as f64
}

/// What it takes to earn a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeRequirement {
    /// Accumulated points threshold.
    Points(i64),
    /// Consecutive-day activity streak.
    StreakDays(u32),
}

/// A badge in the fixed catalog.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub requirement: BadgeRequirement,
}

/// The badge catalog. Immutable; evaluation never mutates it.
pub static BADGES: [Badge; 4] = [
    Badge {
        id: "eco-saver",
        name: "Eco Saver",
        description: "Save 100 points",
        requirement: BadgeRequirement::Points(100),
    },
    Badge {
        id: "green-hero",
        name: "Green Hero",
        description: "Save 500 points",
        requirement: BadgeRequirement::Points(500),
    },
    Badge {
        id: "streak-master",
        name: "Streak Master",
        description: "7-day streak",
        requirement: BadgeRequirement::StreakDays(7),
    },
    Badge {
        id: "carbon-crusher",
        name: "Carbon Crusher",
        description: "1000 points saved",
        requirement: BadgeRequirement::Points(1000),
    },
];

/// Badges earned for a points total and activity streak.
pub fn earned_badges(points: i64, streak_days: u32) -> Vec<&'static Badge> {
    BADGES
        .iter()
        .filter(|badge| match badge.requirement {
            BadgeRequirement::Points(threshold) => points >= threshold,
            BadgeRequirement::StreakDays(days) => streak_days >= days,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_curve() {
        assert_eq!(level_for(0), 1);
        assert_eq!(level_for(199), 1);
        assert_eq!(level_for(200), 2);
        assert_eq!(level_for(2450), 13);
    }

    #[test]
    fn level_handles_negative_points() {
        // A heavy consumer under the unclamped policy can go negative.
        assert_eq!(level_for(-1), 0);
        assert_eq!(points_to_next_level(-1), 1);
    }

    #[test]
    fn progress_within_level() {
        assert_eq!(level_progress_percent(0), 0.0);
        assert_eq!(level_progress_percent(50), 25.0);
        assert_eq!(points_to_next_level(150), 50);
    }

    #[test]
    fn badges_by_threshold() {
        let ids: Vec<_> = earned_badges(500, 0).iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["eco-saver", "green-hero"]);

        assert!(earned_badges(99, 0).is_empty());

        let ids: Vec<_> = earned_badges(1000, 7).iter().map(|b| b.id).collect();
        assert_eq!(
            ids,
            vec!["eco-saver", "green-hero", "streak-master", "carbon-crusher"]
        );
    }
}
