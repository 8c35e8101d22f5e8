use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::domain::recipe::entities::ChartData;

const NUMBER: &str = r"([0-9]+(?:\.[0-9]+)?)";

static CALORIES: LazyLock<Regex> = LazyLock::new(|| pattern(&format!(r"{NUMBER}\s*kcal")));

static PROTEIN: LazyLock<Regex> = LazyLock::new(|| {
    pattern(&format!(
        r"{NUMBER}\s*g\s*protein|protein:\s*{NUMBER}\s*g"
    ))
});

static FIBER: LazyLock<Regex> = LazyLock::new(|| {
    pattern(&format!(r"{NUMBER}\s*g\s*fiber|fiber:\s*{NUMBER}\s*g"))
});

static VITAMIN_A: LazyLock<Regex> = LazyLock::new(|| {
    pattern(&format!(
        r"{NUMBER}\s*mg\s*vitamin\s*A|vitamin\s*A:\s*{NUMBER}\s*mg"
    ))
});

fn pattern(source: &str) -> Regex {
    Regex::new(&format!("(?i){source}")).expect("nutrition patterns are valid")
}

/// Extract calories, protein, fiber and vitamin A from a nutrition line.
///
/// Each nutrient accepts "`<value> <unit> <label>`" or "`<label>: <value> <unit>`".
/// A nutrient that matches neither shape is reported as `0.0`.
pub fn extract_chart_data(nutrition: &str) -> ChartData {
    ChartData {
        calories: first_value(&CALORIES, nutrition),
        protein: first_value(&PROTEIN, nutrition),
        fiber: first_value(&FIBER, nutrition),
        vitamin_a: first_value(&VITAMIN_A, nutrition),
    }
}

fn first_value(regex: &Regex, text: &str) -> f64 {
    regex
        .captures(text)
        .and_then(|caps| captured_number(&caps))
        .unwrap_or(0.0)
}

fn captured_number(caps: &Captures<'_>) -> Option<f64> {
    caps.iter()
        .skip(1)
        .flatten()
        .next()
        .and_then(|m| m.as_str().parse::<f64>().ok())
}
