use crate::domain::classification::entities::Product;

pub const HEALTHY_MARKERS: [&str; 7] = [
    "organic",
    "natural",
    "protein",
    "vitamin",
    "fiber",
    "low-fat",
    "whole grain",
];

pub const UNHEALTHY_MARKERS: [&str; 6] = [
    "sugar",
    "fried",
    "processed",
    "artificial",
    "high-fat",
    "sodium",
];

const CALORIE_CEILING: i64 = 500;
const FAT_CEILING_GRAMS: f64 = 30.0;
const PROTEIN_FLOOR_GRAMS: f64 = 20.0;

/// In-process healthy/unhealthy judgement used by the local inference provider.
///
/// Counts marker hits on each side, adds one unhealthy point for a calorie or
/// fat excess and one healthy point for high protein. Ties are unhealthy.
pub fn judge(product: &Product) -> bool {
    let text = product.search_text();

    let mut healthy = count_markers(&text, &HEALTHY_MARKERS);
    let mut unhealthy = count_markers(&text, &UNHEALTHY_MARKERS);

    let nutrition = &product.nutrition;
    if nutrition.calories.unwrap_or(0) > CALORIE_CEILING
        || nutrition.fat_or_zero() > FAT_CEILING_GRAMS
    {
        unhealthy += 1;
    }
    if nutrition.protein_or_zero() > PROTEIN_FLOOR_GRAMS {
        healthy += 1;
    }

    healthy > unhealthy
}

fn count_markers(text: &str, markers: &[&str]) -> usize {
    markers.iter().filter(|marker| text.contains(*marker)).count()
}
