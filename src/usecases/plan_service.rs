//! Plan service. One renderer, two strategies.
//!
//! - Template: deterministic interpolation of the base plan.
//! - Assisted: the base plan and profile are sent to a `TextGenerationPort` for rewriting.
//!
//! Assisted calls are bounded by a per-attempt timeout and retried once after a fixed
//! backoff. If both attempts fail the template text is returned, tagged
//! `PlanSource::TemplateFallback` so the caller can tell the user.

use crate::domain::bmi;
use crate::domain::calories::daily_calories;
use crate::domain::plan_template::{render_plan, rewrite_prompt};
use crate::domain::{DomainError, PlanDocument, PlanSource, UserProfile};
use crate::ports::TextGenerationPort;
use crate::shared::config::{
    AppConfig, DEFAULT_AI_MAX_TOKENS, DEFAULT_AI_RETRY_BACKOFF_MS, DEFAULT_AI_TIMEOUT_SECS,
    PlanStrategy,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Bounds for one assisted rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewritePolicy {
    pub timeout: Duration,
    pub retry_backoff: Duration,
    pub max_tokens: u32,
}

impl Default for RewritePolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_AI_TIMEOUT_SECS),
            retry_backoff: Duration::from_millis(DEFAULT_AI_RETRY_BACKOFF_MS),
            max_tokens: DEFAULT_AI_MAX_TOKENS,
        }
    }
}

impl RewritePolicy {
    pub fn from_config(cfg: &AppConfig) -> Self {
        Self {
            timeout: Duration::from_secs(cfg.ai_timeout_secs_or_default()),
            retry_backoff: Duration::from_millis(cfg.ai_retry_backoff_ms_or_default()),
            max_tokens: cfg.ai_max_tokens_or_default(),
        }
    }
}

/// Total attempts for an assisted rewrite (first call + one retry).
const MAX_ATTEMPTS: u32 = 2;

pub struct PlanService {
    strategy: PlanStrategy,
    generator: Option<Arc<dyn TextGenerationPort>>,
    policy: RewritePolicy,
}

impl PlanService {
    /// Create a plan service.
    ///
    /// `Assisted` without a generator degrades to `Template` with a warning.
    pub fn new(
        strategy: PlanStrategy,
        generator: Option<Arc<dyn TextGenerationPort>>,
        policy: RewritePolicy,
    ) -> Self {
        let strategy = match (strategy, &generator) {
            (PlanStrategy::Assisted, None) => {
                warn!("assisted strategy requested without a text generator; using template");
                PlanStrategy::Template
            }
            (s, _) => s,
        };
        Self {
            strategy,
            generator,
            policy,
        }
    }

    /// Template-only service.
    pub fn template() -> Self {
        Self::new(PlanStrategy::Template, None, RewritePolicy::default())
    }

    /// Assisted-rewrite service backed by `generator`.
    pub fn assisted(generator: Arc<dyn TextGenerationPort>, policy: RewritePolicy) -> Self {
        Self::new(PlanStrategy::Assisted, Some(generator), policy)
    }

    pub fn strategy(&self) -> PlanStrategy {
        self.strategy
    }

    /// Produce plan text for `profile` using the configured strategy.
    ///
    /// Only an invalid profile is an error; generation failures fall back to the template.
    pub async fn generate(&self, profile: &UserProfile) -> Result<PlanDocument, DomainError> {
        profile.validate()?;
        let bmi = bmi::analyze(profile.weight_kg, profile.height_cm);
        let calories = daily_calories(profile.goal);
        let template_text = render_plan(profile, &bmi, calories);

        let generator = match (self.strategy, &self.generator) {
            (PlanStrategy::Assisted, Some(g)) => g,
            _ => {
                info!(goal = %profile.goal, diet = %profile.diet_type, "plan rendered from template");
                return Ok(PlanDocument::new(template_text, PlanSource::Template));
            }
        };

        let prompt = rewrite_prompt(profile, &bmi, calories);
        match self.rewrite_with_retry(generator.as_ref(), &prompt).await {
            Ok(text) => Ok(PlanDocument::new(text, PlanSource::AssistedRewrite)),
            Err(e) => {
                warn!(error = %e, "assisted rewrite unavailable; falling back to template");
                Ok(PlanDocument::new(
                    template_text,
                    PlanSource::TemplateFallback {
                        reason: e.to_string(),
                    },
                ))
            }
        }
    }

    async fn rewrite_with_retry(
        &self,
        generator: &dyn TextGenerationPort,
        prompt: &str,
    ) -> Result<String, DomainError> {
        let mut attempt = 1;
        loop {
            match self.attempt(generator, prompt).await {
                Ok(text) => {
                    info!(attempt, "assisted rewrite succeeded");
                    return Ok(text);
                }
                Err(e) if attempt < MAX_ATTEMPTS => {
                    warn!(
                        attempt,
                        error = %e,
                        backoff_ms = self.policy.retry_backoff.as_millis() as u64,
                        "assisted rewrite failed; retrying"
                    );
                    tokio::time::sleep(self.policy.retry_backoff).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn attempt(
        &self,
        generator: &dyn TextGenerationPort,
        prompt: &str,
    ) -> Result<String, DomainError> {
        let text = tokio::time::timeout(
            self.policy.timeout,
            generator.generate(prompt, self.policy.max_tokens),
        )
        .await
        .map_err(|_| {
            DomainError::GenerationUnavailable(format!(
                "timed out after {} s",
                self.policy.timeout.as_secs_f32()
            ))
        })??;
        if text.trim().is_empty() {
            return Err(DomainError::GenerationUnavailable("empty reply".to_string()));
        }
        Ok(text)
    }
}
