//! Planner session. Transient state for one run of the form.
//!
//! Holds the current profile and everything derived from it; the last generated plan
//! lives here until it is overwritten or the process exits. Nothing is persisted.

use crate::domain::bmi;
use crate::domain::calories::{daily_calories, weekly_calories};
use crate::domain::progress::project_progress;
use crate::domain::{BmiResult, DomainError, PlanDocument, ProgressPoint, UserProfile};
use crate::ports::{DocumentExporterPort, DocumentSinkPort};
use crate::usecases::PlanService;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Values recomputed on every profile change.
#[derive(Debug, Clone, PartialEq)]
pub struct Derived {
    pub bmi: BmiResult,
    pub daily_calories: u32,
    pub weekly_calories: u32,
    pub progress: Vec<ProgressPoint>,
}

impl Derived {
    fn compute(profile: &UserProfile, floor_kg: Option<f64>) -> Self {
        Self {
            bmi: bmi::analyze(profile.weight_kg, profile.height_cm),
            daily_calories: daily_calories(profile.goal),
            weekly_calories: weekly_calories(profile.goal),
            progress: project_progress(profile.weight_kg, floor_kg),
        }
    }
}

pub struct PlannerSession {
    plan_service: Arc<PlanService>,
    exporter: Arc<dyn DocumentExporterPort>,
    sink: Arc<dyn DocumentSinkPort>,
    progress_floor_kg: Option<f64>,
    profile: UserProfile,
    derived: Derived,
    plan: Option<PlanDocument>,
}

impl PlannerSession {
    /// Start a session with the default profile.
    pub fn new(
        plan_service: Arc<PlanService>,
        exporter: Arc<dyn DocumentExporterPort>,
        sink: Arc<dyn DocumentSinkPort>,
        progress_floor_kg: Option<f64>,
    ) -> Self {
        let profile = UserProfile::default();
        let derived = Derived::compute(&profile, progress_floor_kg);
        Self {
            plan_service,
            exporter,
            sink,
            progress_floor_kg,
            profile,
            derived,
            plan: None,
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn derived(&self) -> &Derived {
        &self.derived
    }

    pub fn plan(&self) -> Option<&PlanDocument> {
        self.plan.as_ref()
    }

    /// Replace the profile after validating it, and recompute derived values.
    /// The previous plan is kept until the next generate.
    pub fn update_profile(&mut self, profile: UserProfile) -> Result<&Derived, DomainError> {
        profile.validate()?;
        self.derived = Derived::compute(&profile, self.progress_floor_kg);
        self.profile = profile;
        info!(
            bmi = self.derived.bmi.value,
            category = %self.derived.bmi.category,
            kcal = self.derived.daily_calories,
            "profile updated"
        );
        Ok(&self.derived)
    }

    /// Generate a plan for the current profile, replacing any previous one.
    pub async fn generate_plan(&mut self) -> Result<&PlanDocument, DomainError> {
        let doc = self.plan_service.generate(&self.profile).await?;
        info!(source = ?doc.source, chars = doc.text.len(), "plan generated");
        let plan = self.plan.insert(doc);
        Ok(&*plan)
    }

    /// Export the current plan and hand it to the sink. Requires a generated plan.
    pub async fn export_plan(&self) -> Result<PathBuf, DomainError> {
        let plan = self.plan.as_ref().ok_or(DomainError::NoPlan)?;
        let bytes = self.exporter.export(&plan.text)?;
        let path = self.sink.save(self.exporter.file_name(), &bytes).await?;
        info!(
            path = %path.display(),
            mime = self.exporter.mime_type(),
            "plan exported"
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::export::PdfExporter;
    use crate::adapters::persistence::FsDocumentSink;
    use crate::domain::{BmiCategory, Goal};

    fn session(dir: &std::path::Path, floor: Option<f64>) -> PlannerSession {
        PlannerSession::new(
            Arc::new(PlanService::template()),
            Arc::new(PdfExporter::default()),
            Arc::new(FsDocumentSink::new(dir)),
            floor,
        )
    }

    #[test]
    fn test_initial_derived_values() {
        let dir = tempfile::tempdir().unwrap();
        let s = session(dir.path(), None);
        assert_eq!(s.derived().bmi.value, 22.49);
        assert_eq!(s.derived().bmi.category, BmiCategory::Normal);
        assert_eq!(s.derived().daily_calories, 1800);
        assert_eq!(s.derived().weekly_calories, 12_600);
        assert_eq!(s.derived().progress.len(), 4);
        assert!(s.plan().is_none());
    }

    #[test]
    fn test_update_profile_recomputes() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session(dir.path(), None);
        let profile = UserProfile {
            weight_kg: 100.0,
            height_cm: 180.0,
            goal: Goal::MuscleGain,
            ..UserProfile::default()
        };
        let derived = s.update_profile(profile).unwrap().clone();
        assert_eq!(derived.bmi.value, 30.86);
        assert_eq!(derived.bmi.category, BmiCategory::Obese);
        assert_eq!(derived.daily_calories, 2600);
        assert_eq!(derived.progress[3].weight_kg, 98.5);
    }

    #[test]
    fn test_progress_floor_applied() {
        let dir = tempfile::tempdir().unwrap();
        let s = session(dir.path(), Some(64.0));
        let weights: Vec<f64> = s.derived().progress.iter().map(|p| p.weight_kg).collect();
        assert_eq!(weights, vec![65.0, 64.5, 64.0, 64.0]);
    }

    #[test]
    fn test_invalid_update_keeps_previous_profile() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session(dir.path(), None);
        let bad = UserProfile {
            age: 5,
            ..UserProfile::default()
        };
        assert!(s.update_profile(bad).is_err());
        assert_eq!(s.profile().age, 21);
    }

    #[tokio::test]
    async fn test_export_before_generate_is_no_plan() {
        let dir = tempfile::tempdir().unwrap();
        let s = session(dir.path(), None);
        assert!(matches!(s.export_plan().await, Err(DomainError::NoPlan)));
    }

    #[tokio::test]
    async fn test_generate_then_export() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session(dir.path(), None);
        s.generate_plan().await.unwrap();
        let path = s.export_plan().await.unwrap();
        assert_eq!(path, dir.path().join("Workout_Diet_Plan.pdf"));
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
