//! Implements InputPort. Inquire-based interactive form and main menu.

use crate::adapters::ui::chart;
use crate::domain::entities::{AGE_RANGE, HEIGHT_RANGE_CM, WEIGHT_RANGE_KG};
use crate::domain::{
    Budget, DemoAsset, DietType, DomainError, Equipment, Gender, Goal, PlanSource, UserProfile,
};
use crate::ports::{ExerciseAssetPort, InputPort};
use crate::usecases::{Derived, PlannerSession};
use async_trait::async_trait;
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use indicatif::{ProgressBar, ProgressStyle};
use inquire::error::InquireError;
use inquire::ui::{Color as PromptColor, RenderConfig, Styled};
use inquire::validator::Validation;
use inquire::{CustomType, MultiSelect, Select, Text};
use std::collections::BTreeSet;
use std::io::{Write, stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Prompt prefix/answer colours for every inquire prompt.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("›").with_fg(PromptColor::LightGreen))
        .with_answered_prompt_prefix(Styled::new("✔").with_fg(PromptColor::LightGreen))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(PromptColor::LightYellow));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    EditProfile,
    GeneratePlan,
    DownloadPdf,
    ExerciseDemos,
    ProgressChart,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 6] = [
        MenuAction::EditProfile,
        MenuAction::GeneratePlan,
        MenuAction::DownloadPdf,
        MenuAction::ExerciseDemos,
        MenuAction::ProgressChart,
        MenuAction::Quit,
    ];
}

impl std::fmt::Display for MenuAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            MenuAction::EditProfile => "Edit profile",
            MenuAction::GeneratePlan => "Generate workout & diet plan",
            MenuAction::DownloadPdf => "Download plan as PDF",
            MenuAction::ExerciseDemos => "Exercise demonstrations",
            MenuAction::ProgressChart => "Progress tracking chart",
            MenuAction::Quit => "Quit",
        })
    }
}

fn input_err(e: InquireError) -> DomainError {
    DomainError::Input(e.to_string())
}

fn is_cancel(e: &InquireError) -> bool {
    matches!(
        e,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

fn print_colored(color: Color, text: &str) {
    let mut out = stdout();
    let _ = out.execute(SetForegroundColor(color));
    let _ = out.execute(Print(text));
    let _ = out.execute(Print("\r\n"));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

fn select_index<T: PartialEq>(all: &[T], current: &T) -> usize {
    all.iter().position(|x| x == current).unwrap_or(0)
}

/// TUI adapter. Inquire prompts over a single planner session.
pub struct TuiInputPort {
    session: Mutex<PlannerSession>,
    assets: Arc<dyn ExerciseAssetPort>,
}

impl TuiInputPort {
    pub fn new(session: PlannerSession, assets: Arc<dyn ExerciseAssetPort>) -> Self {
        Self {
            session: Mutex::new(session),
            assets,
        }
    }

    /// Collect a full profile, pre-filled with `current`.
    fn prompt_profile(current: &UserProfile) -> Result<UserProfile, InquireError> {
        let name = Text::new("Name:")
            .with_placeholder("Enter Your Name")
            .with_default(current.name.as_deref().unwrap_or(""))
            .prompt()?;

        let age = CustomType::<u8>::new("Age:")
            .with_default(current.age)
            .with_error_message("Please type a whole number")
            .with_validator(|v: &u8| {
                if (AGE_RANGE.0..=AGE_RANGE.1).contains(v) {
                    Ok(Validation::Valid)
                } else {
                    Ok(Validation::Invalid(
                        format!("Age must be between {} and {}", AGE_RANGE.0, AGE_RANGE.1).into(),
                    ))
                }
            })
            .prompt()?;

        let gender = Select::new("Gender:", Gender::ALL.to_vec())
            .with_starting_cursor(select_index(&Gender::ALL, &current.gender))
            .prompt()?;

        let height_cm = CustomType::<f64>::new("Height (cm):")
            .with_default(current.height_cm)
            .with_error_message("Please type a number")
            .with_validator(|v: &f64| {
                if (HEIGHT_RANGE_CM.0..=HEIGHT_RANGE_CM.1).contains(v) {
                    Ok(Validation::Valid)
                } else {
                    Ok(Validation::Invalid(
                        format!(
                            "Height must be between {} and {} cm",
                            HEIGHT_RANGE_CM.0, HEIGHT_RANGE_CM.1
                        )
                        .into(),
                    ))
                }
            })
            .prompt()?;

        let weight_kg = CustomType::<f64>::new("Weight (kg):")
            .with_default(current.weight_kg)
            .with_error_message("Please type a number")
            .with_validator(|v: &f64| {
                if (WEIGHT_RANGE_KG.0..=WEIGHT_RANGE_KG.1).contains(v) {
                    Ok(Validation::Valid)
                } else {
                    Ok(Validation::Invalid(
                        format!(
                            "Weight must be between {} and {} kg",
                            WEIGHT_RANGE_KG.0, WEIGHT_RANGE_KG.1
                        )
                        .into(),
                    ))
                }
            })
            .prompt()?;

        let goal = Select::new("Fitness Goal:", Goal::ALL.to_vec())
            .with_starting_cursor(select_index(&Goal::ALL, &current.goal))
            .prompt()?;

        let diet_type = Select::new("Diet Preference:", DietType::ALL.to_vec())
            .with_starting_cursor(select_index(&DietType::ALL, &current.diet_type))
            .prompt()?;

        let budget = Select::new("Monthly Food Budget:", Budget::ALL.to_vec())
            .with_starting_cursor(select_index(&Budget::ALL, &current.budget))
            .prompt()?;

        let selected: Vec<usize> = Equipment::ALL
            .iter()
            .enumerate()
            .filter(|(_, e)| current.equipment.contains(e))
            .map(|(i, _)| i)
            .collect();
        let equipment = MultiSelect::new("Available Equipment:", Equipment::ALL.to_vec())
            .with_default(&selected)
            .prompt()?;

        let name = name.trim();
        Ok(UserProfile {
            name: (!name.is_empty()).then(|| name.to_string()),
            age,
            gender,
            height_cm,
            weight_kg,
            goal,
            diet_type,
            budget,
            equipment: equipment.into_iter().collect::<BTreeSet<_>>(),
        })
    }

    fn print_analysis(derived: &Derived) {
        print_colored(Color::Cyan, "BMI Analysis");
        println!("  BMI: {}", derived.bmi.value_text());
        println!("  BMI Category: {}", derived.bmi.category);
        print_colored(Color::Cyan, "Daily Calorie Recommendation");
        println!(
            "  {} kcal/day ({} kcal/week)",
            derived.daily_calories, derived.weekly_calories
        );
    }

    async fn edit_profile(&self) -> Result<(), DomainError> {
        let mut session = self.session.lock().await;
        let profile = match Self::prompt_profile(session.profile()) {
            Ok(p) => p,
            Err(e) if is_cancel(&e) => {
                info!("profile edit cancelled");
                return Ok(());
            }
            Err(e) => return Err(input_err(e)),
        };
        let derived = session.update_profile(profile)?;
        Self::print_analysis(derived);
        Ok(())
    }

    async fn generate_plan(&self) -> Result<(), DomainError> {
        let mut session = self.session.lock().await;

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("Generating your workout & diet plan...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        let result = session.generate_plan().await;
        spinner.finish_and_clear();

        let plan = result?;
        println!();
        println!("{}", plan.text);
        println!();
        match &plan.source {
            PlanSource::TemplateFallback { reason } => print_colored(
                Color::Yellow,
                &format!(
                    "Plan generation unavailable ({}); showing the standard plan instead.",
                    reason
                ),
            ),
            PlanSource::AssistedRewrite | PlanSource::Template => print_colored(
                Color::Green,
                &format!("Plan generated successfully! ({})", plan.generated_label()),
            ),
        }
        Ok(())
    }

    async fn download_pdf(&self) -> Result<(), DomainError> {
        let session = self.session.lock().await;
        match session.export_plan().await {
            Ok(path) => {
                print_colored(
                    Color::Green,
                    &format!("Plan saved as PDF: {}", path.display()),
                );
                Ok(())
            }
            Err(DomainError::NoPlan) => {
                print_colored(Color::Yellow, "Generate a plan first.");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    async fn show_demos(&self) {
        print_colored(Color::Cyan, "Exercise Demonstrations");
        for demo in self.assets.demos().await {
            match demo.asset {
                DemoAsset::Image(path) => println!("  {:<16} {}", demo.name, path.display()),
                DemoAsset::Placeholder(text) => println!("  {:<16} ({})", demo.name, text),
            }
        }
    }

    async fn show_progress(&self) {
        let session = self.session.lock().await;
        chart::print_chart(&session.derived().progress);
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        {
            let session = self.session.lock().await;
            Self::print_analysis(session.derived());
        }

        loop {
            let action = match Select::new("What next?", MenuAction::ALL.to_vec()).prompt() {
                Ok(a) => a,
                Err(e) if is_cancel(&e) => MenuAction::Quit,
                Err(e) => return Err(input_err(e)),
            };

            let result = match action {
                MenuAction::EditProfile => self.edit_profile().await,
                MenuAction::GeneratePlan => self.generate_plan().await,
                MenuAction::DownloadPdf => self.download_pdf().await,
                MenuAction::ExerciseDemos => {
                    self.show_demos().await;
                    Ok(())
                }
                MenuAction::ProgressChart => {
                    self.show_progress().await;
                    Ok(())
                }
                MenuAction::Quit => break,
            };

            if let Err(e) = result {
                warn!(error = %e, action = %action, "menu action failed");
                print_colored(Color::Red, &e.to_string());
            }
        }

        print_colored(
            Color::DarkGrey,
            "Perfect for Students | Budget Friendly | Simple & Effective",
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_index() {
        assert_eq!(select_index(&Goal::ALL, &Goal::Maintain), 2);
        assert_eq!(select_index(&DietType::ALL, &DietType::Vegetarian), 0);
    }

    #[test]
    fn test_menu_labels() {
        assert_eq!(MenuAction::DownloadPdf.to_string(), "Download plan as PDF");
        assert_eq!(MenuAction::ALL.len(), 6);
    }
}
