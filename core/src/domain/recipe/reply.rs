use crate::domain::recipe::entities::ModelReply;

/// Separator the prompt asks the model to put between reply sections.
pub const SEGMENT_DELIMITER: &str = "---";

const NUTRITION_LABEL: &str = "Nutrition:";
const SUGGESTION_LABEL: &str = "Suggestion:";

/// Split a raw model reply into markdown, nutrition and suggestion.
///
/// Segments are trimmed and empty ones dropped. The first segment is always
/// the markdown; later segments are classified by a case-insensitive label
/// prefix, the last match of each label wins, and unlabeled ones are ignored.
///
/// Label removal is case-sensitive and removes every `Nutrition:` or
/// `Suggestion:` in the segment, so `nutrition: ...` keeps its label text.
pub fn split_model_reply(text: &str) -> ModelReply {
    let mut segments = text
        .split(SEGMENT_DELIMITER)
        .map(str::trim)
        .filter(|segment| !segment.is_empty());

    let mut reply = ModelReply {
        markdown: segments.next().unwrap_or_default().to_string(),
        ..Default::default()
    };

    for segment in segments {
        if has_label(segment, NUTRITION_LABEL) {
            reply.nutrition = segment.replace(NUTRITION_LABEL, "").trim().to_string();
        } else if has_label(segment, SUGGESTION_LABEL) {
            reply.suggestion = segment.replace(SUGGESTION_LABEL, "").trim().to_string();
        }
    }

    reply
}

fn has_label(segment: &str, label: &str) -> bool {
    segment
        .get(..label.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_three_segments() {
        let reply = split_model_reply(
            "Title\n---\nNutrition: Calories: 100 kcal\n---\nSuggestion: add beans",
        );
        assert_eq!(reply.markdown, "Title");
        assert_eq!(reply.nutrition, "Calories: 100 kcal");
        assert_eq!(reply.suggestion, "add beans");
    }

    #[test]
    fn test_reply_without_delimiter_is_all_markdown() {
        let reply = split_model_reply("  # Rice and beans\n\n1. Boil water  ");
        assert_eq!(reply.markdown, "# Rice and beans\n\n1. Boil water");
        assert!(reply.nutrition.is_empty());
        assert!(reply.suggestion.is_empty());
    }

    #[test]
    fn test_leading_and_trailing_delimiters_are_ignored() {
        let reply = split_model_reply(
            "---\n# Soup\n---\nNutrition: Calories: 90 kcal\n---\nSuggestion: **beans**\n---\n",
        );
        assert_eq!(reply.markdown, "# Soup");
        assert_eq!(reply.nutrition, "Calories: 90 kcal");
        assert_eq!(reply.suggestion, "**beans**");
    }

    #[test]
    fn test_labels_classify_case_insensitively_but_strip_exact_case() {
        let reply =
            split_model_reply("Dish\n---\nnutrition: Calories: 5 kcal\n---\nSUGGESTION: eggs");
        assert_eq!(reply.nutrition, "nutrition: Calories: 5 kcal");
        assert_eq!(reply.suggestion, "SUGGESTION: eggs");
    }

    #[test]
    fn test_every_exact_label_occurrence_is_removed() {
        let reply = split_model_reply(
            "Dish\n---\nNutrition: Calories: 5 kcal Nutrition: Protein: 2 g\n---\nSuggestion: add Suggestion: beans",
        );
        assert_eq!(reply.nutrition, "Calories: 5 kcal  Protein: 2 g");
        assert_eq!(reply.suggestion, "add  beans");
    }

    #[test]
    fn test_unlabeled_segments_are_dropped_and_last_label_wins() {
        let reply = split_model_reply(
            "Dish\n---\nsome chatter\n---\nNutrition: first\n---\nNutrition: second",
        );
        assert_eq!(reply.markdown, "Dish");
        assert_eq!(reply.nutrition, "second");
        assert!(reply.suggestion.is_empty());
    }

    #[test]
    fn test_empty_reply() {
        assert_eq!(split_model_reply(""), ModelReply::default());
        assert_eq!(split_model_reply(" --- --- "), ModelReply::default());
    }

    #[test]
    fn test_multibyte_segment_shorter_than_label() {
        let reply = split_model_reply("Dish\n---\nçé");
        assert_eq!(reply.markdown, "Dish");
        assert!(reply.nutrition.is_empty());
    }
}
