/// Split a comma separated ingredient list, dropping blank entries.
pub fn parse_ingredient_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|ingredient| !ingredient.is_empty())
        .map(str::to_string)
        .collect()
}

/// Merge typed and detected ingredients, keeping the first occurrence of each.
pub fn merge_ingredients<I>(typed: I, detected: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut merged: Vec<String> = Vec::new();

    for ingredient in typed.into_iter().chain(detected) {
        let ingredient = ingredient.trim();
        if ingredient.is_empty() || merged.iter().any(|known| known == ingredient) {
            continue;
        }
        merged.push(ingredient.to_string());
    }

    merged
}
