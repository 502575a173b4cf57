//! Request and response bodies for the HTTP API

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};

use crate::categorize::Category;
use crate::prompts::DEFAULT_STYLE;
use crate::service::{BOOST_SUCCESS_MESSAGE, BoostOutcome};
use crate::stats::UsageStats;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoostRequest {
    pub idea: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoostResponse {
    pub boosted_idea: String,
    pub idea_type: Category,
    pub processing_time: f64,
    pub word_count: usize,
    pub success: bool,
    pub message: String,
}

impl From<BoostOutcome> for BoostResponse {
    fn from(outcome: BoostOutcome) -> Self {
        Self {
            boosted_idea: outcome.boosted_idea,
            idea_type: outcome.category,
            processing_time: round2(outcome.processing_time),
            word_count: outcome.word_count,
            success: true,
            message: BOOST_SUCCESS_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerateRequest {
    pub domain: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default = "default_style")]
    pub style: String,
}

fn default_style() -> String {
    DEFAULT_STYLE.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerateResponse {
    pub idea: String,
}

/// Body of every failed request
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    pub error_type: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub model: String,
    pub features: Vec<String>,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub total_ideas_processed: u64,
    /// Label -> count object, keys written most frequent first
    #[serde(serialize_with = "ranked_map")]
    pub popular_categories: Vec<(Category, u64)>,
    pub avg_processing_time: f64,
}

impl From<UsageStats> for StatsResponse {
    fn from(stats: UsageStats) -> Self {
        Self {
            total_ideas_processed: stats.total_processed,
            avg_processing_time: round2(stats.avg_processing_time()),
            popular_categories: stats.popular_categories(),
        }
    }
}

fn ranked_map<S: Serializer>(ranked: &[(Category, u64)], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(ranked.iter().map(|(category, count)| (category, count)))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CategoryInfo {
    pub id: Category,
    pub name: String,
    pub description: String,
    pub examples: Vec<String>,
}

impl From<Category> for CategoryInfo {
    fn from(category: Category) -> Self {
        Self {
            id: category,
            name: category.display_name().to_string(),
            description: category.description().to_string(),
            examples: category.examples().iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryInfo>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
}

/// Round seconds to two decimals for display
pub fn round2(seconds: f64) -> f64 {
    (seconds * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_defaults() {
        let req: GenerateRequest = serde_json::from_str(r#"{"domain":"health"}"#).unwrap();
        assert_eq!(req.keywords, "");
        assert_eq!(req.style, "creative");
    }

    #[test]
    fn test_boost_response_rounds_time() {
        let resp = BoostResponse::from(BoostOutcome {
            boosted_idea: "Plan.".to_string(),
            category: Category::Creative,
            processing_time: 1.23456,
            word_count: 1,
        });
        assert_eq!(resp.processing_time, 1.23);
        assert!(resp.success);

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["idea_type"], "creative");
    }

    #[test]
    fn test_stats_response_uses_labels_as_keys() {
        let stats = UsageStats {
            total_processed: 2,
            categories: BTreeMap::from([(Category::SocialImpact, 2)]),
            processing_times: vec![1.0, 2.0],
        };

        let json = serde_json::to_value(StatsResponse::from(stats)).unwrap();
        assert_eq!(json["total_ideas_processed"], 2);
        assert_eq!(json["popular_categories"]["social_impact"], 2);
        assert_eq!(json["avg_processing_time"], 1.5);
    }

    #[test]
    fn test_stats_response_writes_most_popular_first() {
        let stats = UsageStats {
            total_processed: 6,
            categories: BTreeMap::from([(Category::Business, 1), (Category::Technology, 3), (Category::Creative, 2)]),
            processing_times: vec![1.0; 6],
        };

        let text = serde_json::to_string(&StatsResponse::from(stats)).unwrap();
        assert!(text.contains(r#""popular_categories":{"technology":3,"creative":2,"business":1}"#));
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(2.005_1), 2.01);
        assert_eq!(round2(12.344), 12.34);
    }
}
