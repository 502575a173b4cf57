//! Keyword categorizer
//!
//! Maps idea text to one of six fixed labels by case-insensitive substring
//! matching. Tables are checked in priority order and the first hit wins.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Topical bucket for an idea
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Business,
    SocialImpact,
    Technology,
    Creative,
    PersonalDevelopment,
    General,
}

/// Keyword tables in match priority order. `General` has no keywords.
pub const KEYWORD_TABLE: &[(Category, &[&str])] = &[
    (
        Category::Business,
        &["business", "startup", "company", "revenue", "profit", "customers", "market"],
    ),
    (
        Category::SocialImpact,
        &["ngo", "social", "community", "help", "volunteer", "charity", "society"],
    ),
    (
        Category::Technology,
        &["app", "software", "website", "platform", "ai", "tech", "digital"],
    ),
    (
        Category::Creative,
        &["art", "music", "design", "creative", "content", "video", "blog"],
    ),
    (
        Category::PersonalDevelopment,
        &["learn", "skill", "course", "education", "training", "personal"],
    ),
];

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Business,
        Category::SocialImpact,
        Category::Technology,
        Category::Creative,
        Category::PersonalDevelopment,
        Category::General,
    ];

    /// Wire label, e.g. `social_impact`
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::SocialImpact => "social_impact",
            Category::Technology => "technology",
            Category::Creative => "creative",
            Category::PersonalDevelopment => "personal_development",
            Category::General => "general",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Business => "Business & Startups",
            Category::SocialImpact => "Social Impact",
            Category::Technology => "Technology",
            Category::Creative => "Creative Projects",
            Category::PersonalDevelopment => "Personal Development",
            Category::General => "General",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::Business => "Commercial ventures, startups, and revenue-generating ideas",
            Category::SocialImpact => "NGOs, community initiatives, and ideas that help society",
            Category::Technology => "Apps, software platforms, websites, and digital products",
            Category::Creative => "Art, music, design, video, and content creation",
            Category::PersonalDevelopment => "Learning, skills, courses, and self-improvement",
            Category::General => "Ideas that don't fit neatly into another bucket",
        }
    }

    pub fn examples(&self) -> &'static [&'static str] {
        match self {
            Category::Business => &["Cloud kitchen for office lunches", "Subscription box for regional snacks"],
            Category::SocialImpact => &["Volunteer network for elder care", "Community library in every village"],
            Category::Technology => &["Tutoring app for rural students", "Digital ledger for kirana stores"],
            Category::Creative => &["Podcast on forgotten folk music", "Video series on street food artisans"],
            Category::PersonalDevelopment => {
                &["Course on public speaking in Hindi", "Skill-swap circles for graduates"]
            }
            Category::General => &["Weekend trekking club", "Neighbourhood composting routine"],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

/// Classify idea text. Total and deterministic; never fails.
pub fn classify(text: &str) -> Category {
    let lowered = text.to_lowercase();
    KEYWORD_TABLE
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::General)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_classify_each_bucket() {
        assert_eq!(classify("Open a company selling spices"), Category::Business);
        assert_eq!(classify("Start an NGO for stray dogs"), Category::SocialImpact);
        assert_eq!(classify("I want to build a tutoring app for rural students"), Category::Technology);
        assert_eq!(classify("Street art murals in Pune"), Category::Creative);
        assert_eq!(classify("Learn to cook regional dishes"), Category::PersonalDevelopment);
        assert_eq!(classify("Go trekking every weekend"), Category::General);
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(classify("a startup that partners with an ngo"), Category::Business);
        assert_eq!(classify("community website for farmers"), Category::SocialImpact);
        assert_eq!(classify("digital art gallery"), Category::Technology);
        assert_eq!(classify("music course for kids"), Category::Creative);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("BUSINESS PLAN"), Category::Business);
        assert_eq!(classify("Volunteer Drive"), Category::SocialImpact);
    }

    #[test]
    fn test_substring_matching_is_naive() {
        // "ai" inside "rain" is enough for technology
        assert_eq!(classify("rain harvesting tanks"), Category::Technology);
    }

    #[test]
    fn test_empty_text_is_general() {
        assert_eq!(classify(""), Category::General);
    }

    #[test]
    fn test_labels_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!("sports".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_snake_case_labels() {
        let json = serde_json::to_string(&Category::PersonalDevelopment).unwrap();
        assert_eq!(json, "\"personal_development\"");
    }

    #[test]
    fn test_every_category_has_metadata() {
        for category in Category::ALL {
            assert!(!category.display_name().is_empty());
            assert!(!category.description().is_empty());
            assert!(!category.examples().is_empty());
        }
    }

    proptest! {
        #[test]
        fn prop_classify_is_deterministic(text in ".{0,200}") {
            prop_assert_eq!(classify(&text), classify(&text));
        }

        #[test]
        fn prop_business_keyword_always_wins(prefix in "[a-z ]{0,40}", suffix in "[a-z ]{0,40}") {
            let text = format!("{} startup {}", prefix, suffix);
            prop_assert_eq!(classify(&text), Category::Business);
        }

        #[test]
        fn prop_no_keyword_means_general(text in "[xyzqj ]{0,60}") {
            prop_assert_eq!(classify(&text), Category::General);
        }
    }
}
