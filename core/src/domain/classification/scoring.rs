use crate::domain::classification::entities::{HeuristicVerdict, Product};

pub const UNHEALTHY_KEYWORDS: [&str; 10] = [
    "candy", "sugar", "sugary", "soda", "fried", "donut", "cookie", "cake", "chips", "beer",
];

pub const HEALTHY_KEYWORDS: [&str; 10] = [
    "salad",
    "protein",
    "lean",
    "low-fat",
    "low carb",
    "keto",
    "whole grain",
    "oats",
    "nuts",
    "yogurt",
];

/// Scores above this are diet-friendly. A product with no evidence scores 0.
pub const DIET_THRESHOLD: f64 = -0.1;

const BAD_HIT_WEIGHT: f64 = -1.0;
const GOOD_HIT_WEIGHT: f64 = 0.6;
const CALORIES_PER_POINT: f64 = 800.0;
const PROTEIN_PER_POINT: f64 = 50.0;
const FAT_PER_POINT: f64 = 70.0;
const CARBS_PER_POINT: f64 = 200.0;

/// Deterministic keyword and nutrition heuristic.
///
/// Keywords are matched as plain substrings of [`Product::search_text`], so
/// "cakework" counts as a hit for "cake". Hits are reported in vocabulary order.
pub fn score_product(product: &Product) -> HeuristicVerdict {
    let text = product.search_text();
    let bad_hits = matching_keywords(&text, &UNHEALTHY_KEYWORDS);
    let good_hits = matching_keywords(&text, &HEALTHY_KEYWORDS);

    let nutrition = &product.nutrition;

    let mut score = 0.0;
    score += BAD_HIT_WEIGHT * bad_hits.len() as f64;
    score += GOOD_HIT_WEIGHT * good_hits.len() as f64;
    score += -(nutrition.calories_or_zero() / CALORIES_PER_POINT);
    score += nutrition.protein_or_zero() / PROTEIN_PER_POINT;
    score += -(nutrition.fat_or_zero() / FAT_PER_POINT);
    score += -(nutrition.carbs_or_zero() / CARBS_PER_POINT);

    let is_diet = score > DIET_THRESHOLD;
    let reason = format!(
        "bad={}, good={}, score={}",
        format_hits(&bad_hits),
        format_hits(&good_hits),
        format_score(score)
    );

    HeuristicVerdict {
        is_diet,
        score,
        bad_hits,
        good_hits,
        reason,
    }
}

fn matching_keywords(text: &str, vocabulary: &[&'static str]) -> Vec<&'static str> {
    vocabulary
        .iter()
        .copied()
        .filter(|keyword| text.contains(keyword))
        .collect()
}

fn format_hits(hits: &[&str]) -> String {
    let quoted = hits
        .iter()
        .map(|hit| format!("'{hit}'"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{quoted}]")
}

/// Rounds to three decimals from the exact binary value, then prints the
/// shortest repr. Exponents at 1e16 and above carry an explicit `+`.
fn format_score(score: f64) -> String {
    let rounded = format!("{score:.3}").parse::<f64>().unwrap_or(score);
    let text = format!("{rounded:?}");

    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}
