use std::fmt::Debug;

use crate::domain::classification::entities::Product;

/// Builds the yes/no question sent to remote advisor providers.
pub fn build_advice_prompt(product: &Product, proposed: bool) -> String {
    let nutrition = &product.nutrition;

    format!(
        "Decide if the product is generally healthy for a diet. Reply with only 'yes' or 'no'.\n\
         Title: {}\n\
         Description: {}\n\
         Keywords: {}\n\
         Nutrition: calories={}, protein={}, fat={}, carbs={}\n\
         Heuristic says: {}\n",
        product.title,
        product.description.as_deref().unwrap_or("None"),
        product.keywords.join(", "),
        figure(nutrition.calories),
        figure(nutrition.protein_grams),
        figure(nutrition.fat_grams),
        figure(nutrition.carbs_grams),
        if proposed { "yes" } else { "no" },
    )
}

/// Reads a provider answer. Only a leading "yes" or "no" counts.
pub fn parse_answer(text: &str) -> Option<bool> {
    let answer = text.trim().to_lowercase();
    if answer.starts_with("yes") {
        Some(true)
    } else if answer.starts_with("no") {
        Some(false)
    } else {
        None
    }
}

/// Absent figures read `None`; floats keep their fractional part (`6.0`).
fn figure<T: Debug>(value: Option<T>) -> String {
    value.map_or_else(|| "None".to_string(), |v| format!("{v:?}"))
}
