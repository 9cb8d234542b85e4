//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the BMI/calorie/projection rules and the plan template live here.

pub mod bmi;
pub mod calories;
pub mod entities;
pub mod errors;
pub mod plan_template;
pub mod progress;

pub use entities::{
    BmiCategory, BmiResult, Budget, DemoAsset, DietType, Equipment, ExerciseDemo, Gender, Goal,
    PlanDocument, PlanSource, ProgressPoint, UserProfile,
};
pub use errors::DomainError;
