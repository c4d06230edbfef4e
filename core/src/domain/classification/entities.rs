use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Nutrition facts for one product. Absent figures count as zero when scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Nutrition {
    #[serde(default)]
    pub calories: Option<i64>,
    #[serde(rename = "proteinGrams", default)]
    pub protein_grams: Option<f64>,
    #[serde(rename = "fatGrams", default)]
    pub fat_grams: Option<f64>,
    #[serde(rename = "carbsGrams", default)]
    pub carbs_grams: Option<f64>,
}

impl Nutrition {
    pub fn calories_or_zero(&self) -> f64 {
        self.calories.unwrap_or(0) as f64
    }

    pub fn protein_or_zero(&self) -> f64 {
        self.protein_grams.unwrap_or(0.0)
    }

    pub fn fat_or_zero(&self) -> f64 {
        self.fat_grams.unwrap_or(0.0)
    }

    pub fn carbs_or_zero(&self) -> f64 {
        self.carbs_grams.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub nutrition: Nutrition,
}

impl Product {
    /// Title, description and keywords joined by single spaces, lowercased.
    /// Both the heuristic and the local advisor match keywords against it.
    pub fn search_text(&self) -> String {
        [
            self.title.as_str(),
            self.description.as_deref().unwrap_or(""),
            self.keywords.join(" ").as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassificationResult {
    pub id: String,
    pub is_diet: bool,
    pub reason: Option<String>,
}

/// Outcome of the heuristic scorer for a single product.
#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicVerdict {
    pub is_diet: bool,
    pub score: f64,
    pub bad_hits: Vec<&'static str>,
    pub good_hits: Vec<&'static str>,
    pub reason: String,
}

/// What the override advisor thinks about a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opinion {
    Yes,
    No,
    /// No usable opinion; the heuristic decides.
    Abstain,
}

impl Opinion {
    pub fn resolve(self, proposed: bool) -> bool {
        match self {
            Opinion::Yes => true,
            Opinion::No => false,
            Opinion::Abstain => proposed,
        }
    }
}

impl From<bool> for Opinion {
    fn from(value: bool) -> Self {
        if value { Opinion::Yes } else { Opinion::No }
    }
}
