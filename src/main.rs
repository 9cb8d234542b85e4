//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use fit_planner::adapters::ai::OpenAiAdapter;
use fit_planner::adapters::assets::FsExerciseAssets;
use fit_planner::adapters::export::PdfExporter;
use fit_planner::adapters::persistence::FsDocumentSink;
use fit_planner::adapters::ui::tui::TuiInputPort;
use fit_planner::ports::{
    DocumentExporterPort, DocumentSinkPort, ExerciseAssetPort, InputPort, TextGenerationPort,
};
use fit_planner::shared::config::{AppConfig, PlanStrategy};
use fit_planner::usecases::{PlanService, PlannerSession, RewritePolicy};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    fit_planner::adapters::ui::init_ui();

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "invalid configuration, using defaults");
        AppConfig::default()
    });

    // --- Plan strategy (text generator built once, shared for the whole run) ---
    let strategy = cfg.strategy_or_default();
    let generator: Option<Arc<dyn TextGenerationPort>> = match strategy {
        PlanStrategy::Assisted if cfg.is_ai_configured() => {
            info!(
                model = %cfg.ai_model_or_default(),
                url = %cfg.ai_api_url_or_default(),
                timeout_secs = cfg.ai_timeout_secs_or_default(),
                "assisted plan rewrite enabled with OpenAI adapter"
            );
            let adapter: Arc<dyn TextGenerationPort> = Arc::new(OpenAiAdapter::new(
                cfg.ai_api_url_or_default(),
                cfg.ai_api_key().unwrap_or_default(),
                cfg.ai_model_or_default(),
            ));
            Some(adapter)
        }
        PlanStrategy::Assisted => {
            warn!("FITPLAN_AI_API_KEY not set, assisted rewrite disabled");
            None
        }
        PlanStrategy::Template => None,
    };
    let plan_service = Arc::new(PlanService::new(
        strategy,
        generator,
        RewritePolicy::from_config(&cfg),
    ));
    info!(strategy = ?plan_service.strategy(), "plan service ready");

    // --- Export & output ---
    let output_dir = PathBuf::from(cfg.output_dir_or_default());
    let exporter: Arc<dyn DocumentExporterPort> = Arc::new(PdfExporter::default());
    let sink: Arc<dyn DocumentSinkPort> = Arc::new(FsDocumentSink::new(&output_dir));
    info!(path = %output_dir.display(), "PDF output directory");

    // --- Exercise demo images ---
    let assets: Arc<dyn ExerciseAssetPort> =
        Arc::new(FsExerciseAssets::new(cfg.images_dir_or_default()));
    info!(path = %assets.base_dir().display(), "exercise image directory");

    if let Some(floor) = cfg.progress_floor_kg {
        info!(floor_kg = floor, "progress projection clamped");
    }
    let session = PlannerSession::new(plan_service, exporter, sink, cfg.progress_floor_kg);

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(session, assets));

    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
