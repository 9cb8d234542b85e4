//! Illustrative weight projection for the progress chart. Not a forecast model.

use super::bmi::round2;
use super::entities::ProgressPoint;

pub const PROJECTION_WEEKS: usize = 4;
pub const WEEKLY_LOSS_KG: f64 = 0.5;

/// Four points starting at `weight_kg`, minus 0.5 kg per following week.
///
/// Values are unclamped unless `floor_kg` is given.
pub fn project_progress(weight_kg: f64, floor_kg: Option<f64>) -> Vec<ProgressPoint> {
    (0..PROJECTION_WEEKS)
        .map(|i| {
            let projected = round2(weight_kg - WEEKLY_LOSS_KG * i as f64);
            ProgressPoint {
                label: format!("Week {}", i + 1),
                weight_kg: floor_kg.map_or(projected, |f| projected.max(f)),
            }
        })
        .collect()
}
