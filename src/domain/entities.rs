//! Domain entities. Pure value records for a single planning session.
//!
//! No UI/IO types here; adapters map prompt answers and files into these.

use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use super::errors::DomainError;

/// Accepted input bounds. The TUI enforces them at the prompt; `UserProfile::validate`
/// re-checks them for any other caller.
pub const AGE_RANGE: (u8, u8) = (10, 80);
pub const HEIGHT_RANGE_CM: (f64, f64) = (120.0, 220.0);
pub const WEIGHT_RANGE_KG: (f64, f64) = (30.0, 150.0);

/// Shown in place of the user's name when none was entered.
pub const DEFAULT_PLANNER_NAME: &str = "AI Fitness Planner";

/// Biometric inputs collected by the form.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub name: Option<String>,
    pub age: u8,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub goal: Goal,
    pub diet_type: DietType,
    pub budget: Budget,
    pub equipment: BTreeSet<Equipment>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: None,
            age: 21,
            gender: Gender::Male,
            height_cm: 170.0,
            weight_kg: 65.0,
            goal: Goal::WeightLoss,
            diet_type: DietType::Vegetarian,
            budget: Budget::Low,
            equipment: BTreeSet::new(),
        }
    }
}

impl UserProfile {
    /// Display name, falling back to `DEFAULT_PLANNER_NAME` when empty.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref().map(str::trim) {
            Some(n) if !n.is_empty() => n,
            _ => DEFAULT_PLANNER_NAME,
        }
    }

    /// Comma-separated equipment labels, or "bodyweight exercises only" when none selected.
    pub fn equipment_text(&self) -> String {
        if self.equipment.is_empty() {
            return "bodyweight exercises only".to_string();
        }
        self.equipment
            .iter()
            .map(|e| e.label())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Check the input bounds. Height must be positive for BMI.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.age < AGE_RANGE.0 || self.age > AGE_RANGE.1 {
            return Err(DomainError::InvalidProfile(format!(
                "age {} outside {}-{}",
                self.age, AGE_RANGE.0, AGE_RANGE.1
            )));
        }
        if !(HEIGHT_RANGE_CM.0..=HEIGHT_RANGE_CM.1).contains(&self.height_cm) {
            return Err(DomainError::InvalidProfile(format!(
                "height {} cm outside {}-{}",
                self.height_cm, HEIGHT_RANGE_CM.0, HEIGHT_RANGE_CM.1
            )));
        }
        if !(WEIGHT_RANGE_KG.0..=WEIGHT_RANGE_KG.1).contains(&self.weight_kg) {
            return Err(DomainError::InvalidProfile(format!(
                "weight {} kg outside {}-{}",
                self.weight_kg, WEIGHT_RANGE_KG.0, WEIGHT_RANGE_KG.1
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// Fitness goal. Drives the calorie target and the template phrase tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Maintain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::WeightLoss, Goal::MuscleGain, Goal::Maintain];

    pub fn label(self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight Loss",
            Goal::MuscleGain => "Muscle Gain",
            Goal::Maintain => "Maintain Fitness",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietType {
    Vegetarian,
    NonVegetarian,
}

impl DietType {
    pub const ALL: [DietType; 2] = [DietType::Vegetarian, DietType::NonVegetarian];

    pub fn label(self) -> &'static str {
        match self {
            DietType::Vegetarian => "Vegetarian",
            DietType::NonVegetarian => "Non-Vegetarian",
        }
    }
}

/// Monthly food budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    Low,
    Medium,
    High,
}

impl Budget {
    pub const ALL: [Budget; 3] = [Budget::Low, Budget::Medium, Budget::High];

    pub fn label(self) -> &'static str {
        match self {
            Budget::Low => "Low",
            Budget::Medium => "Medium",
            Budget::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Equipment {
    Bodyweight,
    Dumbbells,
    ResistanceBands,
    GymAccess,
}

impl Equipment {
    pub const ALL: [Equipment; 4] = [
        Equipment::Bodyweight,
        Equipment::Dumbbells,
        Equipment::ResistanceBands,
        Equipment::GymAccess,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Equipment::Bodyweight => "Bodyweight",
            Equipment::Dumbbells => "Dumbbells",
            Equipment::ResistanceBands => "Resistance Bands",
            Equipment::GymAccess => "Gym Access",
        }
    }
}

macro_rules! display_via_label {
    ($($t:ty),*) => {
        $(impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(Gender, Goal, DietType, Budget, Equipment, BmiCategory);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Derived from the profile on every change. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    /// Rounded to 2 decimal places.
    pub value: f64,
    pub category: BmiCategory,
}

impl BmiResult {
    /// The value as shown to the user, always with 2 decimal places.
    pub fn value_text(&self) -> String {
        format!("{:.2}", self.value)
    }
}

/// Where the plan text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanSource {
    Template,
    AssistedRewrite,
    /// Assisted rewrite was requested but unavailable; the template text was used instead.
    TemplateFallback { reason: String },
}

/// Rendered plan. Unstructured text with embedded section headers.
#[derive(Debug, Clone)]
pub struct PlanDocument {
    pub text: String,
    pub source: PlanSource,
    pub generated_at: DateTime<Utc>,
}

impl PlanDocument {
    pub fn new(text: String, source: PlanSource) -> Self {
        Self {
            text,
            source,
            generated_at: Utc::now(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, PlanSource::TemplateFallback { .. })
    }

    /// Generation time in UTC, minute precision.
    pub fn generated_label(&self) -> String {
        self.generated_at.format("%Y-%m-%d %H:%M UTC").to_string()
    }
}

/// One point of the illustrative weight projection.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressPoint {
    pub label: String,
    pub weight_kg: f64,
}

/// A canonical exercise and its demonstration asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseDemo {
    pub name: String,
    pub asset: DemoAsset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoAsset {
    Image(PathBuf),
    /// Shown when the image file is missing.
    Placeholder(String),
}
