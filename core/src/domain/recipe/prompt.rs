use crate::domain::recipe::entities::RecipeRequest;

macro_rules! recipe_prompt_template {
    () => {
        r#"
You are a smart cooking assistant for food-insecure regions like Haiti.
The user has the following ingredients: {ingredients}

Please:
1. Suggest one low-cost, fuel-saving recipe using **only** these ingredients. Write the recipe in Markdown format, starting with a title, then a list of ingredients, then step-by-step instructions with icons/emojis. Do not just write a summary or intro, always include a full recipe.
2. Provide a nutrition estimate in this exact format (on a single line): Nutrition: Calories: X kcal, Protein: Y g, Fiber: Z g, Vitamin A: W mg
3. Identify missing nutrients and suggest cheap, local foods to balance it. Your suggestions must be context-aware: for sweet dishes, suggest only appropriate sweet or neutral add-ons (e.g., nuts, fruits, honey, coconut, etc.), and for savory dishes, suggest only appropriate savory add-ons (e.g., beans, greens, eggs, etc.). Write this as: Suggestion: [Markdown-formatted suggestions, use lists and bold for foods]
4. Keep the language friendly, clear, and if selected, use **Haitian Creole**.

Respond in: {language}

Format your answer as:
---
[Markdown recipe: include a title, ingredients list, and step-by-step instructions. Do not write only a summary.]
---
Nutrition: Calories: X kcal, Protein: Y g, Fiber: Z g, Vitamin A: W mg
---
Suggestion: [Markdown-formatted suggestions]
---
"#
    };
}

/// Fill the recipe prompt. Each placeholder is substituted once, so user text
/// that looks like a placeholder is passed through verbatim.
pub fn build_recipe_prompt(request: &RecipeRequest) -> String {
    format!(
        recipe_prompt_template!(),
        ingredients = request.ingredients.join(", "),
        language = request.language,
    )
}
