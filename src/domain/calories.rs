//! Daily calorie targets keyed by goal.

use super::entities::Goal;

pub fn daily_calories(goal: Goal) -> u32 {
    match goal {
        Goal::WeightLoss => 1800,
        Goal::Maintain => 2200,
        Goal::MuscleGain => 2600,
    }
}

pub fn weekly_calories(goal: Goal) -> u32 {
    daily_calories(goal) * 7
}
