//! Plan template and its lookup tables.
//!
//! Goal- and diet-dependent wording lives in the tables below; the template itself is a
//! flat string with `{placeholder}` slots and no branching.

use super::entities::{BmiResult, DietType, Goal, UserProfile};

/// Fixed section headers, in template order.
pub const SECTION_HEADERS: [&str; 5] = [
    "PROFILE OVERVIEW",
    "WEEKLY WORKOUT PLAN",
    "DIET PLAN",
    "HYDRATION & LIFESTYLE",
    "FINAL ADVICE",
];

/// Base plan. Paragraphs are separated by a blank line.
pub const PLAN_TEMPLATE: &str = "\
PERSONALIZED WORKOUT AND DIET PLAN

Name: {name}

PROFILE OVERVIEW

This fitness plan is designed for a {age}-year-old {gender} student with a BMI of {bmi} ({category}).
The primary fitness goal is {goal}, focusing on {workout_focus}.
The program is suitable for individuals using {equipment} and following a {diet_type} diet within a {budget} budget.
The recommended daily calorie intake is around {calories} kcal for sustainable results.

WEEKLY WORKOUT PLAN
Monday – Full Body Strength:
Push-ups 3×12, Squats 3×15, Plank 3×30 seconds.
Tuesday – Cardio & Core:
Jogging or brisk walking for 30 minutes, Mountain climbers 3×15, Leg raises 3×12.
Wednesday – Upper Body:
Dumbbell curls 3×12, Shoulder press 3×10, Triceps dips 3×12.
Thursday – Active Recovery:
Yoga and stretching for 30 minutes with breathing exercises.
Friday – Lower Body:
Lunges 3×10 per leg, Squats 3×15, Calf raises 3×20.
Saturday – Cardio + Abs:
Skipping or cycling 25 minutes, Crunches 3×15, Plank 3×40 seconds.
Sunday – Rest or light walking.

DIET PLAN (INDIAN & BUDGET FRIENDLY)
Diet strategy: {diet_focus}.

Early Morning: Warm water with lemon and 5 soaked almonds.
Breakfast: Vegetable oats or idli with sambar and {breakfast_protein}.
Mid-Morning: One seasonal fruit such as apple or banana.
Lunch: Brown rice or chapatis, dal or {lunch_protein}, mixed vegetable sabzi, curd.
Evening Snack: Sprouts chaat or roasted peanuts.
Dinner: Chapatis with vegetable curry and {dinner_protein}.

HYDRATION & LIFESTYLE
Drink at least 2.5–3 liters of water daily.
Sleep 7–8 hours for recovery.
Avoid junk food and sugary drinks.
Maintain consistency and track progress weekly.

FINAL ADVICE
This plan is student-friendly, affordable, and safe.
Follow it consistently for 8–12 weeks to improve fitness, stamina, and overall health.";

pub fn workout_focus(goal: Goal) -> &'static str {
    match goal {
        Goal::WeightLoss => "fat burning, high repetitions, and cardiovascular exercises",
        Goal::MuscleGain => "progressive overload strength training with proper recovery",
        Goal::Maintain => "balanced strength, flexibility, and endurance training",
    }
}

pub fn diet_focus(goal: Goal) -> &'static str {
    match goal {
        Goal::WeightLoss => "controlled calories with high fiber and protein",
        Goal::MuscleGain => "protein-rich meals with complex carbohydrates",
        Goal::Maintain => "balanced nutrition with adequate vitamins and minerals",
    }
}

/// Protein source per meal for a diet type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DietSubstitutions {
    pub breakfast: &'static str,
    pub lunch: &'static str,
    pub dinner: &'static str,
}

pub fn diet_substitutions(diet: DietType) -> DietSubstitutions {
    match diet {
        DietType::Vegetarian => DietSubstitutions {
            breakfast: "paneer or tofu",
            lunch: "paneer curry",
            dinner: "paneer bhurji",
        },
        DietType::NonVegetarian => DietSubstitutions {
            breakfast: "boiled eggs",
            lunch: "grilled chicken",
            dinner: "egg curry",
        },
    }
}

/// Values for every `{placeholder}` in `PLAN_TEMPLATE`.
pub fn template_vars(
    profile: &UserProfile,
    bmi: &BmiResult,
    calories: u32,
) -> Vec<(&'static str, String)> {
    let subs = diet_substitutions(profile.diet_type);
    vec![
        ("name", profile.display_name().to_string()),
        ("age", profile.age.to_string()),
        ("gender", profile.gender.label().to_lowercase()),
        ("bmi", bmi.value_text()),
        ("category", bmi.category.to_string()),
        ("goal", profile.goal.label().to_lowercase()),
        ("workout_focus", workout_focus(profile.goal).to_string()),
        ("equipment", profile.equipment_text()),
        ("diet_type", profile.diet_type.label().to_lowercase()),
        ("budget", profile.budget.label().to_lowercase()),
        ("calories", calories.to_string()),
        ("diet_focus", diet_focus(profile.goal).to_string()),
        ("breakfast_protein", subs.breakfast.to_string()),
        ("lunch_protein", subs.lunch.to_string()),
        ("dinner_protein", subs.dinner.to_string()),
    ]
}

/// Single-pass `{key}` substitution. Unknown keys and unmatched braces are kept literally;
/// substituted values are never rescanned.
pub fn fill(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let key = &after[..close];
                match vars.iter().find(|(k, _)| *k == key) {
                    Some((_, v)) => out.push_str(v),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Deterministic plan text for a profile.
pub fn render_plan(profile: &UserProfile, bmi: &BmiResult, calories: u32) -> String {
    fill(PLAN_TEMPLATE, &template_vars(profile, bmi, calories))
        .trim()
        .to_string()
}

/// Approximate length asked of the rewrite model.
pub const REWRITE_TARGET_WORDS: usize = 500;

/// Instruction for the assisted rewrite: the base template, the profile, and the
/// derived values.
pub fn rewrite_prompt(profile: &UserProfile, bmi: &BmiResult, calories: u32) -> String {
    let equipment = profile.equipment_text();
    format!(
        "Rewrite the following base fitness and diet plan into a personalised plan of about \
{words} words for the user described below.\n\
Keep these section headers, in this order: {headers}.\n\
Fill every {{placeholder}} from the profile. Respect the diet preference strictly: \
a vegetarian plan must not contain eggs, meat or fish.\n\
Answer with the plan text only, using a blank line between paragraphs.\n\n\
USER PROFILE\n\
Name: {name}\n\
Age: {age}\n\
Gender: {gender}\n\
BMI: {bmi} ({category})\n\
Goal: {goal}\n\
Diet preference: {diet}\n\
Monthly food budget: {budget}\n\
Equipment: {equipment}\n\
Daily calories: {calories} kcal\n\n\
BASE PLAN\n{template}",
        words = REWRITE_TARGET_WORDS,
        headers = SECTION_HEADERS.join(", "),
        name = profile.display_name(),
        age = profile.age,
        gender = profile.gender,
        bmi = bmi.value_text(),
        category = bmi.category,
        goal = profile.goal,
        diet = profile.diet_type,
        budget = profile.budget,
        equipment = equipment,
        calories = calories,
        template = PLAN_TEMPLATE,
    )
}
