//! End-to-end planning flow through the public API: profile -> plan -> PDF on disk.

use fit_planner::adapters::ai::{MockAiAdapter, MockReply};
use fit_planner::adapters::assets::FsExerciseAssets;
use fit_planner::adapters::export::PdfExporter;
use fit_planner::adapters::persistence::FsDocumentSink;
use fit_planner::domain::plan_template::SECTION_HEADERS;
use fit_planner::domain::{
    BmiCategory, Budget, DemoAsset, DietType, Equipment, Gender, Goal, PlanSource, UserProfile,
};
use fit_planner::ports::{DocumentExporterPort, ExerciseAssetPort};
use fit_planner::usecases::{PlanService, PlannerSession, RewritePolicy};
use std::sync::Arc;
use std::time::Duration;

fn policy() -> RewritePolicy {
    RewritePolicy {
        timeout: Duration::from_millis(500),
        retry_backoff: Duration::from_millis(1),
        max_tokens: 100,
    }
}

fn session_with(service: PlanService, dir: &std::path::Path) -> PlannerSession {
    PlannerSession::new(
        Arc::new(service),
        Arc::new(PdfExporter::default()),
        Arc::new(FsDocumentSink::new(dir)),
        None,
    )
}

#[tokio::test]
async fn template_plan_for_every_goal_and_diet() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_with(PlanService::template(), dir.path());

    for goal in Goal::ALL {
        for diet_type in DietType::ALL {
            let profile = UserProfile {
                name: Some("Meera".to_string()),
                age: 24,
                gender: Gender::Female,
                height_cm: 160.0,
                weight_kg: 48.0,
                goal,
                diet_type,
                budget: Budget::Medium,
                equipment: [Equipment::Dumbbells].into_iter().collect(),
            };
            let derived = session.update_profile(profile).unwrap().clone();
            assert_eq!(derived.bmi.value, 18.75);
            assert_eq!(derived.bmi.category, BmiCategory::Normal);

            let plan = session.generate_plan().await.unwrap();
            assert_eq!(plan.source, PlanSource::Template);
            for header in SECTION_HEADERS {
                assert!(plan.text.contains(header));
            }
            assert!(plan.text.contains("Name: Meera"));
            assert!(plan.text.contains("medium budget"));
            assert!(plan.text.contains(&format!("{} kcal", derived.daily_calories)));

            let lower = plan.text.to_lowercase();
            match diet_type {
                DietType::Vegetarian => {
                    assert!(!lower.contains("egg"));
                    assert!(!lower.contains("chicken"));
                }
                DietType::NonVegetarian => {
                    assert!(lower.contains("boiled eggs"));
                    assert!(lower.contains("grilled chicken"));
                }
            }
        }
    }
}

#[tokio::test]
async fn assisted_plan_falls_back_and_still_exports() {
    let dir = tempfile::tempdir().unwrap();
    let mock = Arc::new(MockAiAdapter::scripted([
        MockReply::Fail("connection refused".to_string()),
        MockReply::Hang(Duration::from_secs(10)),
    ]));
    let mut session = session_with(PlanService::assisted(mock.clone(), policy()), dir.path());

    let plan = session.generate_plan().await.unwrap();
    assert!(plan.is_fallback());
    assert!(plan.text.contains("PROFILE OVERVIEW"));
    assert_eq!(mock.calls(), 2);

    let path = session.export_plan().await.unwrap();
    assert!(path.ends_with("Workout_Diet_Plan.pdf"));
    assert!(std::fs::read(path).unwrap().starts_with(b"%PDF"));
}

#[tokio::test]
async fn assisted_plan_replaces_previous_plan() {
    let dir = tempfile::tempdir().unwrap();
    let mock = Arc::new(MockAiAdapter::scripted([
        MockReply::Text("FIRST".to_string()),
        MockReply::Text("SECOND".to_string()),
    ]));
    let mut session = session_with(PlanService::assisted(mock, policy()), dir.path());

    session.generate_plan().await.unwrap();
    assert_eq!(session.plan().unwrap().text, "FIRST");
    session.generate_plan().await.unwrap();
    assert_eq!(session.plan().unwrap().text, "SECOND");
    assert_eq!(session.plan().unwrap().source, PlanSource::AssistedRewrite);
}

#[test]
fn exporter_accepts_arbitrary_text() {
    let exporter = PdfExporter::default();
    for text in ["", "\n\n\n\n", "<b>not markup</b>", "ünïcödé – ×"] {
        let bytes = exporter.export(text).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}

#[tokio::test]
async fn missing_images_degrade_to_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    let assets = FsExerciseAssets::new(dir.path().join("Images"));
    let demos = assets.demos().await;
    assert_eq!(demos.len(), 4);
    assert!(
        demos
            .iter()
            .all(|d| matches!(d.asset, DemoAsset::Placeholder(_)))
    );
}
