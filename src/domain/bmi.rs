//! BMI calculator. Pure functions over weight (kg) and height (cm).

use super::entities::{BmiCategory, BmiResult};

/// `weight / (height_m)^2`, rounded to 2 decimal places.
///
/// Height must be positive; input bounds are enforced before this is called.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let h = height_cm / 100.0;
    round2(weight_kg / (h * h))
}

/// Half-open buckets: <18.5, [18.5, 25), [25, 30), >=30.
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

pub fn analyze(weight_kg: f64, height_cm: f64) -> BmiResult {
    let value = calculate_bmi(weight_kg, height_cm);
    BmiResult {
        value,
        category: bmi_category(value),
    }
}

pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_bmi_reference() {
        // 65 / 1.7^2 = 22.4913...
        assert_eq!(calculate_bmi(65.0, 170.0), 22.49);
        assert_eq!(calculate_bmi(100.0, 200.0), 25.0);
        assert_eq!(calculate_bmi(30.0, 220.0), 6.2);
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(bmi_category(18.49), BmiCategory::Underweight);
        assert_eq!(bmi_category(18.5), BmiCategory::Normal);
        assert_eq!(bmi_category(24.99), BmiCategory::Normal);
        assert_eq!(bmi_category(25.0), BmiCategory::Overweight);
        assert_eq!(bmi_category(29.99), BmiCategory::Overweight);
        assert_eq!(bmi_category(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_monotonic_in_height_and_weight() {
        let mut prev = f64::MAX;
        for h in (120..=220).step_by(5) {
            let bmi = calculate_bmi(70.0, h as f64);
            assert!(bmi <= prev, "bmi should not increase with height");
            prev = bmi;
        }
        let mut prev = f64::MIN;
        for w in (30..=150).step_by(5) {
            let bmi = calculate_bmi(w as f64, 170.0);
            assert!(bmi >= prev, "bmi should not decrease with weight");
            prev = bmi;
        }
    }

    #[test]
    fn test_analyze() {
        let r = analyze(95.0, 170.0);
        assert_eq!(r.value, 32.87);
        assert_eq!(r.category, BmiCategory::Obese);
    }
}
