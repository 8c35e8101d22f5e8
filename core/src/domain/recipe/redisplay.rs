use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::domain::{
    history::entities::HistoryRecord,
    recipe::{
        entities::{DEFAULT_LANGUAGE, RecipeView},
        nutrition::extract_chart_data,
    },
};

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#+)([ \t]+)(.*)$").expect("heading pattern is valid"));

/// Remove one pair of surrounding double quotes, if the value has both.
///
/// A lone `"` counts as wrapped and becomes empty.
pub fn strip_wrapping_quotes(value: &str) -> &str {
    if !(value.starts_with('"') && value.ends_with('"')) {
        return value;
    }

    value
        .get(1..value.len() - 1)
        .unwrap_or_default()
}

/// Wrap the text of every markdown heading in `**`, keeping its level.
pub fn embolden_headings(markdown: &str) -> String {
    HEADING
        .replace_all(markdown, |caps: &Captures<'_>| {
            format!("{}{}**{}**", &caps[1], &caps[2], caps[3].trim())
        })
        .into_owned()
}

impl RecipeView {
    /// Rebuild the display payload of a saved record.
    ///
    /// Chart data is never stored, so it is extracted again from the
    /// nutrition text.
    pub fn from_history(record: &HistoryRecord) -> Self {
        let chart_data = extract_chart_data(&record.nutrition);
        let markdown = embolden_headings(strip_wrapping_quotes(&record.markdown));
        let nutrition = strip_wrapping_quotes(&record.nutrition).to_string();

        Self {
            ingredients: record.ingredients.clone(),
            markdown: markdown.trim().to_string(),
            nutrition,
            suggestion: String::new(),
            chart_data,
            language: DEFAULT_LANGUAGE.to_string(),
            error: None,
        }
    }
}
