//! Reward points: award policies and gamification scoring.

mod policy;
mod rewards;

pub use policy::{
    CONSUMPTION_BASE, CONSUMPTION_PENALTY_PER_KWH, EMISSIONS_BASE, EMISSIONS_MIN_POINTS,
    EMISSIONS_PENALTY_PER_KG, PointsPolicy,
};
pub use rewards::{
    Badge, BadgeRequirement, BADGES, POINTS_PER_LEVEL, earned_badges, level_for,
    level_progress_percent, points_to_next_level,
};
