//! Application configuration. Plan strategy, AI credentials, paths.

use serde::Deserialize;

pub const DEFAULT_AI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_AI_MODEL: &str = "gpt-4o-mini";
/// Room for a ~500-word plan plus headers.
pub const DEFAULT_AI_MAX_TOKENS: u32 = 900;
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_AI_RETRY_BACKOFF_MS: u64 = 500;
pub const DEFAULT_OUTPUT_DIR: &str = "./output";
pub const DEFAULT_IMAGES_DIR: &str = "./Images";

/// How plan text is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanStrategy {
    /// Deterministic template interpolation.
    #[default]
    Template,
    /// Base template rewritten by a hosted text-generation model.
    Assisted,
}

impl std::str::FromStr for PlanStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "template" => Ok(PlanStrategy::Template),
            "assisted" | "ai" => Ok(PlanStrategy::Assisted),
            other => Err(format!("unknown plan strategy: {}", other)),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Plan strategy. Read from FITPLAN_STRATEGY ("template" or "assisted").
    #[serde(default)]
    pub strategy: Option<String>,

    /// Directory the PDF is written to. Read from FITPLAN_OUTPUT_DIR.
    #[serde(default)]
    pub output_dir: Option<String>,

    /// Directory holding exercise demo images. Read from FITPLAN_IMAGES_DIR.
    #[serde(default)]
    pub images_dir: Option<String>,

    /// Optional lower bound for the projected weight series. Unset = unclamped.
    /// Read from FITPLAN_PROGRESS_FLOOR_KG.
    #[serde(default)]
    pub progress_floor_kg: Option<f64>,

    // ─────────────────────────────────────────────────────────────────────────
    // Assisted rewrite (OpenAI-compatible API)
    // ─────────────────────────────────────────────────────────────────────────
    /// AI API key. Read from FITPLAN_AI_API_KEY.
    #[serde(default)]
    pub ai_api_key: Option<String>,

    /// AI API URL. Defaults to OpenAI. Read from FITPLAN_AI_API_URL.
    #[serde(default)]
    pub ai_api_url: Option<String>,

    /// AI model name. Defaults to "gpt-4o-mini". Read from FITPLAN_AI_MODEL.
    #[serde(default)]
    pub ai_model: Option<String>,

    /// Maximum output tokens per rewrite. Read from FITPLAN_AI_MAX_TOKENS.
    #[serde(default)]
    pub ai_max_tokens: Option<u32>,

    /// Per-attempt timeout in seconds. Read from FITPLAN_AI_TIMEOUT_SECS.
    #[serde(default)]
    pub ai_timeout_secs: Option<u64>,

    /// Pause before the single retry, in ms. Read from FITPLAN_AI_RETRY_BACKOFF_MS.
    #[serde(default)]
    pub ai_retry_backoff_ms: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("FITPLAN"));
        if let Ok(path) = std::env::var("FITPLAN_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the plan strategy. Unknown values fall back to the template.
    pub fn strategy_or_default(&self) -> PlanStrategy {
        self.strategy
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    pub fn output_dir_or_default(&self) -> String {
        self.output_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string())
    }

    pub fn images_dir_or_default(&self) -> String {
        self.images_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_IMAGES_DIR.to_string())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // AI Configuration Helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the AI API key if configured. Reads from config or FITPLAN_AI_API_KEY env.
    pub fn ai_api_key(&self) -> Option<String> {
        self.ai_api_key
            .clone()
            .or_else(|| std::env::var("FITPLAN_AI_API_KEY").ok())
            .filter(|k| !k.trim().is_empty())
    }

    /// Returns the AI API URL. Defaults to OpenAI chat completions endpoint.
    pub fn ai_api_url_or_default(&self) -> String {
        self.ai_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_AI_API_URL.to_string())
    }

    /// Returns the AI model name. Defaults to "gpt-4o-mini".
    pub fn ai_model_or_default(&self) -> String {
        self.ai_model
            .clone()
            .unwrap_or_else(|| DEFAULT_AI_MODEL.to_string())
    }

    pub fn ai_max_tokens_or_default(&self) -> u32 {
        self.ai_max_tokens.unwrap_or(DEFAULT_AI_MAX_TOKENS)
    }

    pub fn ai_timeout_secs_or_default(&self) -> u64 {
        self.ai_timeout_secs.unwrap_or(DEFAULT_AI_TIMEOUT_SECS)
    }

    pub fn ai_retry_backoff_ms_or_default(&self) -> u64 {
        self.ai_retry_backoff_ms.unwrap_or(DEFAULT_AI_RETRY_BACKOFF_MS)
    }

    /// Returns true if AI is configured (API key present).
    pub fn is_ai_configured(&self) -> bool {
        self.ai_api_key().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.strategy_or_default(), PlanStrategy::Template);
        assert_eq!(cfg.output_dir_or_default(), DEFAULT_OUTPUT_DIR);
        assert_eq!(cfg.images_dir_or_default(), DEFAULT_IMAGES_DIR);
        assert_eq!(cfg.ai_api_url_or_default(), DEFAULT_AI_API_URL);
        assert_eq!(cfg.ai_model_or_default(), "gpt-4o-mini");
        assert_eq!(cfg.ai_max_tokens_or_default(), 900);
        assert_eq!(cfg.ai_timeout_secs_or_default(), 60);
        assert_eq!(cfg.ai_retry_backoff_ms_or_default(), 500);
        assert!(cfg.progress_floor_kg.is_none());
    }

    #[test]
    fn test_explicit_values_win() {
        let cfg = AppConfig {
            strategy: Some("Assisted".to_string()),
            ai_api_key: Some("sk-test".to_string()),
            ai_model: Some("llama3.2".to_string()),
            ai_timeout_secs: Some(5),
            ..AppConfig::default()
        };
        assert_eq!(cfg.strategy_or_default(), PlanStrategy::Assisted);
        assert!(cfg.is_ai_configured());
        assert_eq!(cfg.ai_model_or_default(), "llama3.2");
        assert_eq!(cfg.ai_timeout_secs_or_default(), 5);
    }

    #[test]
    fn test_unknown_strategy_falls_back() {
        let cfg = AppConfig {
            strategy: Some("gpt".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(cfg.strategy_or_default(), PlanStrategy::Template);
    }

    #[test]
    fn test_blank_key_is_not_configured() {
        let cfg = AppConfig {
            ai_api_key: Some("  ".to_string()),
            ..AppConfig::default()
        };
        assert!(cfg.ai_api_key().is_none());
    }

    #[test]
    fn test_load_reads_env_and_config_file() {
        use std::io::Write;

        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "ai_model = \"llama3.2\"\nai_max_tokens = 400").unwrap();

        // SAFETY: these FITPLAN_* keys are set and read only by this test.
        unsafe {
            std::env::set_var("FITPLAN_STRATEGY", "assisted");
            std::env::set_var("FITPLAN_AI_TIMEOUT_SECS", "5");
            std::env::set_var("FITPLAN_PROGRESS_FLOOR_KG", "60.5");
            std::env::set_var("FITPLAN_CONFIG", file.path());
        }
        let loaded = AppConfig::load();
        unsafe {
            for key in [
                "FITPLAN_STRATEGY",
                "FITPLAN_AI_TIMEOUT_SECS",
                "FITPLAN_PROGRESS_FLOOR_KG",
                "FITPLAN_CONFIG",
            ] {
                std::env::remove_var(key);
            }
        }

        let cfg = loaded.unwrap();
        assert_eq!(cfg.strategy_or_default(), PlanStrategy::Assisted);
        assert_eq!(cfg.ai_timeout_secs, Some(5));
        assert_eq!(cfg.progress_floor_kg, Some(60.5));
        assert_eq!(cfg.ai_model_or_default(), "llama3.2");
        assert_eq!(cfg.ai_max_tokens_or_default(), 400);
        assert_eq!(cfg.ai_retry_backoff_ms_or_default(), DEFAULT_AI_RETRY_BACKOFF_MS);
        assert_eq!(cfg.output_dir_or_default(), DEFAULT_OUTPUT_DIR);
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("Template".parse::<PlanStrategy>(), Ok(PlanStrategy::Template));
        assert_eq!("AI".parse::<PlanStrategy>(), Ok(PlanStrategy::Assisted));
        assert_eq!(" assisted ".parse::<PlanStrategy>(), Ok(PlanStrategy::Assisted));
        assert!("llm".parse::<PlanStrategy>().is_err());
    }
}
